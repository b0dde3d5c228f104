//! Noyau : évaluateur arithmétique
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (permissive)
//! - analyse.rs  : descente récursive -> f64 (précédence, implicite, ^)
//! - erreur.rs   : taxonomie des échecs
//! - format.rs   : affichage des résultats
//! - banc.rs     : banc d'auto-test + batterie de régression

pub mod analyse;
pub mod banc;
pub mod erreur;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use analyse::parse;
