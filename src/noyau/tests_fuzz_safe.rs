//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler saisie + pipeline sans faire chauffer la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - on accepte les erreurs attendues (NombreInvalide, HorsDomaine)
//! - invariant clé : une erreur => aucun résultat, jamais l'inverse

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval::evaluer;
use super::saisie::lire_valeur;
use super::serie::arccos_serie;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    /// f64 uniforme dans [-1, 1]
    fn dans_domaine(&mut self) -> f64 {
        let u = f64::from(self.next_u32()) / f64::from(u32::MAX);
        2.0 * u - 1.0
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de saisies ------------------------ */

fn gen_saisie_valide(rng: &mut Rng) -> String {
    // textes qui doivent parser ET rester dans [-1, 1]
    match rng.pick(4) {
        0 => format!("{:.6}", rng.dans_domaine()),
        1 => format!("0.{:04}", rng.pick(10_000)),
        2 => format!("-0.{:04}", rng.pick(10_000)),
        _ => ["0", "1", "-1", "0.5", "-0.5", "1e-9"][rng.pick(6) as usize].to_string(),
    }
}

fn gen_saisie_hors_domaine(rng: &mut Rng) -> String {
    match rng.pick(3) {
        0 => format!("{}.{:03}", 2 + rng.pick(50), rng.pick(1_000)),
        1 => format!("-{}.{:03}", 2 + rng.pick(50), rng.pick(1_000)),
        _ => format!("1.{:09}1", rng.pick(1_000)), // juste au-dessus de 1
    }
}

fn gen_saisie_invalide(rng: &mut Rng) -> String {
    [
        "", "   ", "abc", "0,5", "1.2.3", "--1", "0x1f", "½", "pi/3", "inf", "-inf", "NaN",
    ][rng.pick(12) as usize]
        .to_string()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_domaine_et_image() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let x = rng.dans_domaine();
        let v = arccos_serie(x);

        assert!(v.is_finite(), "x = {x}");
        assert!(v >= -1e-9 && v <= PI + 1e-9, "x = {x}, v = {v}");
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes entrées ; fonction pure => mêmes bits en sortie.
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        budget(t0, max);

        let x = rng.dans_domaine();
        assert_eq!(arccos_serie(x).to_bits(), arccos_serie(x).to_bits());
    }
}

#[test]
fn fuzz_safe_saisies_valides_passent() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..150 {
        budget(t0, max);

        let s = gen_saisie_valide(&mut rng);
        let ev = evaluer(&s).unwrap_or_else(|e| panic!("saisie {s:?} rejetée: {e}"));
        assert!(ev.valeur.is_finite());
        assert!(ev.resultat.contains('.'), "format 10 décimales attendu");
    }
}

#[test]
fn fuzz_safe_hors_domaine_rejete_avant_calcul() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xD0_u64);

    for _ in 0..150 {
        budget(t0, max);

        let s = gen_saisie_hors_domaine(&mut rng);
        // le rejet se joue dès la saisie : la série n'est jamais atteinte
        assert_eq!(lire_valeur(&s), Err(ErreurCalcul::HorsDomaine), "s = {s:?}");
        assert_eq!(evaluer(&s).unwrap_err(), ErreurCalcul::HorsDomaine);
    }
}

#[test]
fn fuzz_safe_saisies_invalides_rejetees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xF00D_u64);

    for _ in 0..100 {
        budget(t0, max);

        let s = gen_saisie_invalide(&mut rng);
        assert_eq!(
            evaluer(&s).unwrap_err(),
            ErreurCalcul::NombreInvalide,
            "s = {s:?}"
        );
    }
}
