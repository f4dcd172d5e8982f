// src/app.rs
//
// Arccos série — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer le sous-module etat.rs
// - Ré-exporter AppArccos (pour main.rs: use crate::app::AppArccos;)
// - Fournir l'action `calculer` : le pont état <-> noyau
//
// Important:
// - etat.rs ne touche jamais au noyau ; c'est ICI que l'évaluation passe,
//   et c'est le noyau (saisie.rs) qui valide le domaine avant la série.

pub mod etat;

// Ré-export pratique : `use crate::app::AppArccos;`
pub use etat::AppArccos;

use crate::noyau;

impl AppArccos {
    /// Évalue l'entrée courante via le noyau, puis dépose résultat + temps
    /// dans l'état — ou le message d'erreur (résultat et temps coupés).
    pub fn calculer(&mut self) {
        match noyau::evaluer(&self.entree) {
            Ok(ev) => self.set_resultats(ev.resultat, ev.temps_ms),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}
