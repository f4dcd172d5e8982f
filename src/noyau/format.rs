// src/noyau/format.rs
//
// Formatage des sorties : exactement 10 chiffres après la virgule, pour le
// résultat (radians) comme pour le temps (ms).

/// arccos(x) formaté, 10 décimales.
pub fn format_resultat(valeur: f64) -> String {
    format_10_decimales(valeur)
}

/// Temps écoulé formaté, 10 décimales (entrée en millisecondes).
pub fn format_temps_ms(temps_ms: f64) -> String {
    format_10_decimales(temps_ms)
}

fn format_10_decimales(v: f64) -> String {
    format!("{v:.10}")
}
