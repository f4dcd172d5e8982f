//! src/app/etat.rs
//!
//! État de présentation (sans noyau).
//!
//! Rôle : contenir l'état de l'adaptateur (entrée, résultat, temps, erreur)
//! et offrir des opérations simples (reset/clear/dépôt) sans logique de
//! calcul.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Sur erreur : résultat ET temps coupés (on n'affiche jamais un temps
//!   sans résultat).

#[derive(Clone, Default, Debug)]
pub struct AppArccos {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,     // arccos(x) en radians, 10 décimales
    pub temps: String,        // temps de calcul en ms, 10 décimales
    pub erreur: String,       // message d'erreur (si saisie/pipeline échoue)
    pub resultat_dispo: bool, // false au démarrage : rien à lire
}

impl AppArccos {
    /// Remise à zéro totale (entrée + sorties).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// Effacer seulement l'entrée (sans toucher aux sorties).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
    }

    /// Effacer résultat + temps + erreur (sans toucher à l'entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.temps.clear();
        self.erreur.clear();
        self.resultat_dispo = false;
    }

    /// Déposer une erreur. Résultat et temps sont coupés.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.resultat.clear();
        self.temps.clear();
        self.resultat_dispo = false;
    }

    /// Déposer un résultat complet (résultat + temps déjà formatés).
    pub fn set_resultats(&mut self, resultat: impl Into<String>, temps: impl Into<String>) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.temps = temps.into();
        self.resultat_dispo = true;
    }
}
