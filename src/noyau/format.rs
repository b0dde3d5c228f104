// src/noyau/format.rs

use super::erreur::Echec;

/// Texte affiché pour tout échec d'analyse (le détail reste dans les journaux).
pub const TEXTE_ERREUR: &str = "Erreur";

/// Affichage d'un nombre (forme courte, sans zéros parasites).
/// - entiers sans ".0" : 54 et non 54.0
/// - notation exponentielle hors de [1e-6, 1e21)
/// - NaN / ±Infinity explicites
/// - -0 affiché "0"
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        let texte = if v > 0.0 { "Infinity" } else { "-Infinity" };
        return texte.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if (1e-6..1e21).contains(&a) {
        return format!("{v}");
    }

    // "1e21" -> "1e+21" ; "1.5e-8" reste tel quel
    let e = format!("{v:e}");
    match e.split_once('e') {
        Some((mantisse, exposant)) if !exposant.starts_with('-') => {
            format!("{mantisse}e+{exposant}")
        }
        _ => e,
    }
}

/// Texte ré-insérable dans l'entrée (touche ANS) : notation positionnelle,
/// relisible par le lexer. None pour NaN / ±Infinity.
pub fn format_saisie(v: f64) -> Option<String> {
    if !v.is_finite() {
        return None;
    }
    if v == 0.0 {
        return Some("0".to_string());
    }
    Some(format!("{v}"))
}

/// Affichage d'un résultat d'analyse : nombre ou texte d'erreur unique.
pub fn format_resultat(r: &Result<f64, Echec>) -> String {
    match r {
        Ok(v) => format_nombre(*v),
        Err(_) => TEXTE_ERREUR.to_string(),
    }
}
