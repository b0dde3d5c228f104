// src/noyau/erreur.rs
//
// Taxonomie des échecs d'analyse.
// Toutes ces variantes se réduisent à un seul "Erreur" côté UI ;
// le détail sert aux journaux et aux tests.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Echec {
    /// Aucun jeton après la lecture (entrée vide ou sans symbole reconnu).
    #[error("entrée vide")]
    FluxVide,

    /// Le jeton courant ne peut pas commencer un facteur (ou fin de flux).
    #[error("jeton inattendu en position {position}: {}", .jeton.as_deref().unwrap_or("fin d'entrée"))]
    JetonInattendu {
        position: usize,
        jeton: Option<String>,
    },

    #[error("parenthèse non fermée (position {position})")]
    ParentheseNonFermee { position: usize },

    #[error("division par zéro (position {position})")]
    DivisionParZero { position: usize },

    /// Expression complète mais jetons non consommés après elle.
    #[error("jetons restants à partir de la position {position}")]
    JetonsRestants { position: usize },

    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    /// Garde-fou contre l'épuisement de pile ("((((((..." / "------...").
    #[error("imbrication trop profonde (max {max})")]
    ProfondeurExcessive { max: usize },
}
