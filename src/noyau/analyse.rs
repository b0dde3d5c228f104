// src/noyau/analyse.rs
//
// Descente récursive -> valeur (sans AST intermédiaire)
//
// Grammaire (du moins lié au plus lié) :
//   expression := terme (("+" | "-") terme)*
//   terme      := facteur (("*" | "/") facteur)*
//   facteur    := ("+" | "-") facteur
//               | "(" expression ")" [facteur si "(" ou nombre suit] ["^" facteur]
//               | NOMBRE             [facteur si "(" suit]            ["^" facteur]
//
// Règles:
// - Le signe unaire retourne AVANT le test "^" : "-2^2" = -(2^2) = -4.
// - Multiplication implicite asymétrique :
//    - après ")" : si "(" ou un nombre suit => "(9)6" = 54
//    - après un nombre : seulement si "(" suit => "6(9)" = 54, mais "4 4" échoue
//   Elle enchaîne à droite : "6(9)6" = 6 * (9 * 6).
// - Division : échec si le diviseur vaut 0 (y compris -0), quel que soit le numérateur.
// - NaN (ex: (-8)^(1/3)) est un résultat VALIDE, distinct d'un échec.
//
// État d'analyse local à l'appel : jetons empruntés + curseur, recréés à chaque parse().

use super::erreur::Echec;
use super::jetons::{tokenize, Op, Tok};

/// Garde-fou : profondeur maximale de facteurs imbriqués (parenthèses, signes,
/// exposants, et chaque maillon d'une multiplication implicite enchaînée).
pub const PROFONDEUR_MAX: usize = 512;

/// Point d'entrée unique : lit `entree`, l'évalue et vérifie que tout a été consommé.
pub fn parse(entree: &str) -> Result<f64, Echec> {
    let jetons = tokenize(entree);

    let resultat = if jetons.is_empty() {
        Err(Echec::FluxVide)
    } else {
        let mut a = Analyseur::new(&jetons);
        a.expression().and_then(|valeur| a.fin(valeur))
    };

    match &resultat {
        Ok(valeur) => tracing::debug!(entree, valeur, "expression évaluée"),
        Err(echec) => tracing::debug!(entree, %echec, "échec d'analyse"),
    }
    resultat
}

struct Analyseur<'a> {
    jetons: &'a [Tok],
    position: usize,
    profondeur: usize,
}

impl<'a> Analyseur<'a> {
    fn new(jetons: &'a [Tok]) -> Self {
        Self {
            jetons,
            position: 0,
            profondeur: 0,
        }
    }

    fn courant(&self) -> Option<&'a Tok> {
        self.jetons.get(self.position)
    }

    fn courant_op(&self) -> Option<Op> {
        match self.courant() {
            Some(Tok::Op(op)) => Some(*op),
            _ => None,
        }
    }

    /// Complétude : aucun jeton ne doit rester après l'expression de tête.
    fn fin(&self, valeur: f64) -> Result<f64, Echec> {
        if self.position == self.jetons.len() {
            Ok(valeur)
        } else {
            Err(Echec::JetonsRestants {
                position: self.position,
            })
        }
    }

    fn expression(&mut self) -> Result<f64, Echec> {
        let mut valeur = self.terme()?;

        while let Some(op @ (Op::Plus | Op::Minus)) = self.courant_op() {
            self.position += 1;
            let droite = self.terme()?;
            valeur = match op {
                Op::Plus => valeur + droite,
                _ => valeur - droite,
            };
        }
        Ok(valeur)
    }

    fn terme(&mut self) -> Result<f64, Echec> {
        let mut valeur = self.facteur()?;

        while let Some(op @ (Op::Star | Op::Slash)) = self.courant_op() {
            let position_op = self.position;
            self.position += 1;
            let droite = self.facteur()?;
            valeur = match op {
                Op::Star => valeur * droite,
                _ => {
                    if droite == 0.0 {
                        return Err(Echec::DivisionParZero {
                            position: position_op,
                        });
                    }
                    valeur / droite
                }
            };
        }
        Ok(valeur)
    }

    fn facteur(&mut self) -> Result<f64, Echec> {
        if self.profondeur >= PROFONDEUR_MAX {
            return Err(Echec::ProfondeurExcessive {
                max: PROFONDEUR_MAX,
            });
        }
        self.profondeur += 1;
        let resultat = self.facteur_sans_garde();
        self.profondeur -= 1;
        resultat
    }

    fn facteur_sans_garde(&mut self) -> Result<f64, Echec> {
        let Some(jeton) = self.courant() else {
            return Err(Echec::JetonInattendu {
                position: self.position,
                jeton: None,
            });
        };

        let mut valeur = match jeton {
            // signe unaire : s'applique au facteur suivant, exposant compris
            Tok::Op(op @ (Op::Plus | Op::Minus)) => {
                self.position += 1;
                let f = self.facteur()?;
                return Ok(if *op == Op::Minus { -f } else { f });
            }

            Tok::LPar => {
                self.position += 1;
                let v = self.expression()?;
                if self.courant() != Some(&Tok::RPar) {
                    return Err(Echec::ParentheseNonFermee {
                        position: self.position,
                    });
                }
                self.position += 1;

                if matches!(self.courant(), Some(Tok::LPar | Tok::Num(_))) {
                    v * self.facteur()?
                } else {
                    v
                }
            }

            Tok::Num(texte) => {
                let v: f64 = texte
                    .parse()
                    .map_err(|_| Echec::NombreInvalide(texte.clone()))?;
                self.position += 1;

                if matches!(self.courant(), Some(Tok::LPar)) {
                    v * self.facteur()?
                } else {
                    v
                }
            }

            autre => {
                return Err(Echec::JetonInattendu {
                    position: self.position,
                    jeton: Some(autre.to_string()),
                })
            }
        };

        if self.courant_op() == Some(Op::Caret) {
            self.position += 1;
            let exposant = self.facteur()?;
            valeur = valeur.powf(exposant);
        }

        Ok(valeur)
    }
}
