//! Banc d'auto-test : (expression, réponse attendue) -> fiche {expression, attendu, obtenu}.
//!
//! Deux vérifications :
//! - `reussi()` : lâche. Un échec attendu est satisfait quel que soit le résultat obtenu.
//! - `reussi_strict()` : un échec attendu exige un échec obtenu.
//!
//! Les valeurs attendues sont comparées à l'égalité exacte (f64).

use super::analyse::parse;
use super::erreur::Echec;
use super::format::{format_nombre, format_resultat};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Attendu {
    Valeur(f64),
    Echec,
}

#[derive(Clone, Debug)]
pub struct CasTest {
    pub expression: String,
    pub attendu: Attendu,
    pub obtenu: Result<f64, Echec>,
}

impl CasTest {
    pub fn reussi(&self) -> bool {
        match self.attendu {
            Attendu::Echec => true,
            Attendu::Valeur(v) => self.obtenu == Ok(v),
        }
    }

    pub fn reussi_strict(&self) -> bool {
        match self.attendu {
            Attendu::Echec => self.obtenu.is_err(),
            Attendu::Valeur(_) => self.reussi(),
        }
    }

    fn attendu_txt(&self) -> String {
        match self.attendu {
            Attendu::Valeur(v) => format_nombre(v),
            Attendu::Echec => "échec".to_string(),
        }
    }
}

/// Construit une fiche en passant `expression` par le noyau.
pub fn tester_entree(expression: &str, attendu: Attendu) -> CasTest {
    CasTest {
        expression: expression.to_string(),
        attendu,
        obtenu: parse(expression),
    }
}

/// Batterie de régression : décimaux, signes, implicite, échecs attendus.
pub fn batterie_maths() -> Vec<CasTest> {
    use Attendu::Valeur;
    const ECHEC: Attendu = Attendu::Echec;

    [
        // décimaux
        ("0.5 + 0.5", Valeur(1.0)),
        (".5 + .5", Valeur(1.0)),
        ("2 * .25", Valeur(0.5)),
        ("10 / .5", Valeur(20.0)),
        ("10 / 0.5", Valeur(20.0)),
        // signes
        ("+8 + -3", Valeur(5.0)),
        ("5 + -3 * 2", Valeur(-1.0)),
        ("10 / -2", Valeur(-5.0)),
        ("10 + +3", Valeur(13.0)),
        ("-6 * -2", Valeur(12.0)),
        ("9 / -8", Valeur(-1.125)),
        // multiplication implicite
        ("6(9)", Valeur(54.0)),
        ("(5+1)(27/3)", Valeur(54.0)),
        ("(9)6", Valeur(54.0)),
        // échecs attendus
        ("6+", ECHEC),
        ("*6", ECHEC),
        ("5 + -", ECHEC),
        ("4 4", ECHEC),
    ]
    .into_iter()
    .map(|(expr, attendu)| tester_entree(expr, attendu))
    .collect()
}

#[derive(Clone, Debug)]
pub struct Rapport {
    pub total: usize,
    pub echecs: Vec<CasTest>,
}

impl Rapport {
    pub fn tout_reussi(&self) -> bool {
        self.echecs.is_empty()
    }
}

/// Passe la batterie, journalise chaque fiche en défaut, puis le bilan.
pub fn executer_batterie(cas: &[CasTest], strict: bool) -> Rapport {
    let echecs: Vec<CasTest> = cas
        .iter()
        .filter(|c| {
            if strict {
                !c.reussi_strict()
            } else {
                !c.reussi()
            }
        })
        .cloned()
        .collect();

    for c in &echecs {
        tracing::warn!(
            expression = %c.expression,
            attendu = %c.attendu_txt(),
            obtenu = %format_resultat(&c.obtenu),
            "test échoué"
        );
    }

    if echecs.is_empty() {
        tracing::info!(total = cas.len(), "tous les tests maths réussis");
    }

    Rapport {
        total: cas.len(),
        echecs,
    }
}
