// src/main.rs
//
// Arccos série — point d'entrée
// -----------------------------
// But:
// - boucle interactive : une valeur par ligne, résultat + temps en face
// - aucun drapeau CLI, aucune configuration : tout passe par la saisie
//
// IMPORTANT (structure projet):
// - l'action `calculer` vit dans src/app.rs
// - ici : point d'entrée seulement (lecture stdin + affichage)

use std::io::{self, BufRead, Write};

mod app;
mod noyau;

use app::AppArccos;

const TITRE_APP: &str = "Calculateur d'arccosinus (série entière, 86 termes)";

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{TITRE_APP}")?;
    writeln!(stdout, "Entrez une valeur x dans [-1, 1] (q pour quitter)")?;

    let mut app = AppArccos::default();

    loop {
        write!(stdout, "x = ")?;
        stdout.flush()?;

        let mut ligne = String::new();
        if stdin.lock().read_line(&mut ligne)? == 0 {
            break; // fin de flux
        }

        let saisie = ligne.trim();
        if saisie.eq_ignore_ascii_case("q") || saisie.eq_ignore_ascii_case("quit") {
            break;
        }

        app.entree = saisie.to_string();
        app.calculer();

        if app.resultat_dispo {
            writeln!(stdout, "arccos(x) en radians : {}", app.resultat)?;
            writeln!(stdout, "temps de calcul (ms) : {}", app.temps)?;
        } else {
            writeln!(stdout, "{}", app.erreur)?;
        }
    }

    Ok(())
}
