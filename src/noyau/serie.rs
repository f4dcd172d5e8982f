// src/noyau/serie.rs
//
// Série entière d'arccos (budget d'itérations FIXE)
// -------------------------------------------------
// acos(x) = π/2 − asin(x), avec
// asin(x) = Σ (2n)! / (4^n·(n!)²·(2n+1)) · x^(2n+1), n = 0..NB_TERMES
//
// La soustraction acos = π/2 − asin est repliée dans l'accumulation :
// `somme` démarre à π/2 et chaque terme est soustrait.
//
// Contrat de domaine : l'appelant garantit x ∈ [-1, 1] (voir saisie.rs).
// La série elle-même ne vérifie rien : fonction pure, sans effet de bord.

use std::f64::consts::FRAC_PI_2;

/// Budget fixe : toujours 86 accumulations, quel que soit x.
/// Pas de règle d'arrêt par tolérance — le coût constant fait partie du contrat.
pub const NB_TERMES: u32 = 86;

/// arccos(x) en radians, x ∈ [-1, 1].
///
/// Au bord du domaine (|x| = 1) la série converge très lentement : avec 86
/// termes le résultat y reste imprécis (~6e-2). C'est assumé — aucune forme
/// fermée de contournement.
pub fn arccos_serie(x: f64) -> f64 {
    arccos_serie_compte(x).0
}

/// Variante instrumentée : retourne aussi le nombre de termes accumulés
/// (toujours NB_TERMES — verrouillé par test).
pub fn arccos_serie_compte(x: f64) -> (f64, u32) {
    let mut somme = FRAC_PI_2;
    let mut x_puiss = x; // x^(2n+1), multipliée par x² à chaque tour
    let mut accumules = 0u32;

    for n in 0..NB_TERMES {
        somme -= coefficient(n) * x_puiss;
        x_puiss *= x * x;
        accumules += 1;
    }

    (somme, accumules)
}

/// Coefficient du terme n : (2n)! / (2^(2n) · (n!)² · (2n+1)).
///
/// Factorielle recalculée de zéro à chaque appel (O(n) par terme, O(N²) au
/// total) : assumé, N est petit et fixe. Le dénominateur est évalué de
/// gauche à droite ; à n = 85 il sature l'infini f64 et le coefficient
/// retombe à 0 — comportement de référence, verrouillé par test.
pub(super) fn coefficient(n: u32) -> f64 {
    factorielle(2 * n) / (2f64.powi((2 * n) as i32) * factorielle(n).powi(2) * f64::from(2 * n + 1))
}

/// Factorielle itérative en f64. factorielle(0) = 1 par définition.
fn factorielle(n: u32) -> f64 {
    let mut resultat = 1.0;
    for i in 1..=n {
        resultat *= f64::from(i);
    }
    resultat
}
