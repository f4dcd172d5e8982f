// src/noyau/saisie.rs
//
// Saisie : texte → f64 fini → contrôle du domaine [-1, 1].
// La validation vit ICI, avant tout appel à la série : la série (serie.rs)
// suppose son contrat de domaine déjà garanti.

use super::erreur::ErreurCalcul;

/// Parse l'entrée utilisateur et valide le domaine.
///
/// Rejets :
/// - texte vide ou non numérique → NombreInvalide
/// - inf / NaN (parsables par f64 mais non finis) → NombreInvalide
/// - x < -1 ou x > 1 → HorsDomaine
pub fn lire_valeur(texte: &str) -> Result<f64, ErreurCalcul> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::NombreInvalide);
    }

    let x: f64 = s.parse().map_err(|_| ErreurCalcul::NombreInvalide)?;
    if !x.is_finite() {
        return Err(ErreurCalcul::NombreInvalide);
    }

    valider_domaine(x)
}

/// Contrôle du domaine seul (x déjà fini).
pub fn valider_domaine(x: f64) -> Result<f64, ErreurCalcul> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(ErreurCalcul::HorsDomaine);
    }
    Ok(x)
}
