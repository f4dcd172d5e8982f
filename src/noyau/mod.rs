//! Noyau arccos
//!
//! Organisation interne :
//! - serie.rs   : série entière d'arccos (86 termes, budget fixe)
//! - saisie.rs  : parse f64 + validation du domaine [-1, 1]
//! - erreur.rs  : taxonomie (NombreInvalide / HorsDomaine / Inattendue)
//! - format.rs  : affichage 10 décimales (résultat, temps ms)
//! - eval.rs    : pipeline complet saisie -> chrono -> série -> formatage

pub mod erreur;
pub mod eval;
pub mod format;
pub mod saisie;
pub mod serie;



#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{evaluer, Evaluation};
pub use serie::arccos_serie;
