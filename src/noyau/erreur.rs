// src/noyau/erreur.rs
//
// Taxonomie d'erreurs du pipeline — trois classes, toutes converties en
// texte affichable au niveau de l'app (rien ne traverse la couche
// utilisateur).

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// L'entrée ne se lit pas comme un nombre réel fini.
    #[error("entrée invalide : entrez un nombre réel")]
    NombreInvalide,

    /// Nombre lisible mais hors du domaine d'arccos.
    #[error("hors domaine : la valeur doit être dans [-1, 1]")]
    HorsDomaine,

    /// Fourre-tout : le pipeline a produit autre chose qu'un réel fini.
    #[error("une erreur est survenue")]
    Inattendue,
}
