//! Noyau — évaluation (pipeline réel)
//!
//! saisie (parse + domaine) -> chrono -> série -> garde finitude -> formatage
//!
//! Remarque : le chrono n'entoure QUE l'appel à la série — le temps affiché
//! mesure le calcul, pas le parse ni le formatage.

use std::time::Instant;

use super::erreur::ErreurCalcul;
use super::format::{format_resultat, format_temps_ms};
use super::saisie::lire_valeur;
use super::serie::arccos_serie;

/// Sortie du pipeline : valeur brute + les deux champs affichables.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// arccos(x) en radians (brut).
    pub valeur: f64,
    /// arccos(x), 10 décimales.
    pub resultat: String,
    /// temps de calcul en ms, 10 décimales.
    pub temps_ms: String,
}

/// API publique : évalue une saisie utilisateur et retourne soit les champs
/// affichables, soit une erreur catégorisée (à convertir en texte par l'app).
pub fn evaluer(texte: &str) -> Result<Evaluation, ErreurCalcul> {
    // 1) Parse + domaine (la série n'est jamais appelée hors de [-1, 1])
    let x = lire_valeur(texte)?;

    // 2) Série, chronométrée seule
    let depart = Instant::now();
    let valeur = arccos_serie(x);
    let temps_ms = depart.elapsed().as_secs_f64() * 1_000.0;

    // 3) Garde de finitude (fourre-tout : ne doit jamais se produire
    //    sous le contrat de domaine)
    if !valeur.is_finite() {
        return Err(ErreurCalcul::Inattendue);
    }

    // 4) Formatage
    Ok(Evaluation {
        valeur,
        resultat: format_resultat(valeur),
        temps_ms: format_temps_ms(temps_ms),
    })
}
