//! Tests scientifiques (campagne) : propriétés du noyau sur des familles d'entrées.
//!
//! Propriétés visées :
//! - précédence : ^ > signe unaire > * / > + -
//! - associativité : * / + - à gauche, ^ à droite
//! - multiplication implicite asymétrique, enchaînée à droite après ")"
//! - division par zéro : toujours un échec, quel que soit le numérateur
//! - complétude : tout jeton restant fait échouer
//! - lecture idempotente
//!
//! Les valeurs de référence sont calculées en Rust avec le même ordre d'opérations,
//! ce qui permet l'égalité exacte sur f64.

use std::time::{Duration, Instant};

use super::erreur::Echec;
use super::jetons::tokenize;
use super::parse;

fn eval_ok(expr: &str) -> f64 {
    parse(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_exact(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert_eq!(v.to_bits(), attendu.to_bits(), "expr={expr:?} v={v} attendu={attendu}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

const VALEURS: [f64; 7] = [0.5, 1.0, 2.0, 3.0, 7.0, 10.0, 0.25];

fn txt(v: f64) -> String {
    format!("{v}")
}

/* ------------------------ Oracles ------------------------ */

#[test]
fn sci_oracles() {
    let cas: [(&str, f64); 11] = [
        ("0.5 + 0.5", 1.0),
        (".5 + .5", 1.0),
        ("2 * .25", 0.5),
        ("10 / .5", 20.0),
        ("+8 + -3", 5.0),
        ("5 + -3 * 2", -1.0),
        ("10 / -2", -5.0),
        ("9 / -8", -1.125),
        ("6(9)", 54.0),
        ("(5+1)(27/3)", 54.0),
        ("(9)6", 54.0),
    ];
    for (expr, attendu) in cas {
        assert_exact(expr, attendu);
    }

    for expr in ["6+", "*6", "5 + -", "4 4"] {
        assert!(parse(expr).is_err(), "expr={expr:?} devrait échouer");
    }
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_associativite_gauche() {
    let start = Instant::now();
    for &a in &VALEURS {
        for &b in &VALEURS {
            for &c in &VALEURS {
                budget(start, Duration::from_secs(5));
                let (ta, tb, tc) = (txt(a), txt(b), txt(c));

                assert_exact(&format!("{ta} - {tb} - {tc}"), (a - b) - c);
                assert_exact(&format!("{ta} / {tb} / {tc}"), (a / b) / c);
                assert_exact(&format!("{ta} - {tb} + {tc}"), (a - b) + c);
                assert_exact(&format!("{ta} / {tb} * {tc}"), (a / b) * c);
            }
        }
    }
}

#[test]
fn sci_precedence_mixte() {
    for &a in &VALEURS {
        for &b in &VALEURS {
            for &c in &VALEURS {
                let (ta, tb, tc) = (txt(a), txt(b), txt(c));

                assert_exact(&format!("{ta} + {tb} * {tc}"), a + b * c);
                assert_exact(&format!("{ta} - {tb} / {tc}"), a - b / c);
                assert_exact(&format!("{ta} * {tb} ^ {tc}"), a * b.powf(c));
                assert_exact(&format!("{ta} ^ {tb} ^ {tc}"), a.powf(b.powf(c)));
                assert_exact(&format!("-{ta} ^ {tb}"), -(a.powf(b)));
                assert_exact(&format!("{ta} * -{tb} + {tc}"), a * -b + c);
            }
        }
    }
}

/* ------------------------ Multiplication implicite ------------------------ */

#[test]
fn sci_implicite_asymetrique() {
    for &a in &VALEURS {
        for &b in &VALEURS {
            let (ta, tb) = (txt(a), txt(b));

            // nombre "(" => multiplie
            assert_exact(&format!("{ta}({tb})"), a * b);
            // ")" nombre => multiplie
            assert_exact(&format!("({ta}){tb}"), a * b);
            // ")" "(" => multiplie
            assert_exact(&format!("({ta})({tb})"), a * b);
            // nombre nombre => jetons restants
            assert_eq!(
                parse(&format!("{ta} {tb}")),
                Err(Echec::JetonsRestants { position: 1 })
            );
        }
    }
}

#[test]
fn sci_implicite_enchaine_a_droite() {
    // A(B)(C)^2 = A * (B * C^2), pas (A*B*C)^2
    for &a in &VALEURS {
        for &b in &VALEURS {
            for &c in &VALEURS {
                let (ta, tb, tc) = (txt(a), txt(b), txt(c));
                assert_exact(
                    &format!("{ta}({tb})({tc})^2"),
                    a * (b * c.powf(2.0)),
                );
                assert_exact(&format!("({ta}){tb}({tc})"), a * (b * c));
            }
        }
    }
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn sci_division_par_zero_toujours() {
    let numerateurs = ["0", "1", "-1", "0.5", "-999", "(2^10)", "-(3)(4)"];
    let zeros = ["0", "0.0", ".0", "-0", "(1-1)", "(0)(5)", "0^1"];
    for n in numerateurs {
        for z in zeros {
            let expr = format!("{n} / {z}");
            assert!(
                matches!(parse(&expr), Err(Echec::DivisionParZero { .. })),
                "expr={expr:?}"
            );
        }
    }
}

/* ------------------------ Complétude ------------------------ */

#[test]
fn sci_completude() {
    let complets = ["1", "(1+2)", "2^3", "-4", "6(9)"];
    let restes = [")", "5"];
    for c in complets {
        for r in restes {
            let expr = format!("{c} {r}");
            // un nombre après ")" est absorbé par l'implicite
            if r == "5" && c.ends_with(')') {
                continue;
            }
            assert!(
                matches!(parse(&expr), Err(Echec::JetonsRestants { .. })),
                "expr={expr:?} -> {:?}",
                parse(&expr)
            );
        }
    }
}

/* ------------------------ Lecture ------------------------ */

#[test]
fn sci_lecture_idempotente() {
    for s in ["", " 1 + 2 ", "(5+1)(27/3)", ".5^-.5", "a1b2c3", "1..2..3"] {
        assert_eq!(tokenize(s), tokenize(s), "s={s:?}");
    }
}

#[test]
fn sci_nan_reste_un_succes() {
    for expr in ["(-8)^(1/3)", "(-2)^.5", "(0-1)^(1/2)"] {
        let v = eval_ok(expr);
        assert!(v.is_nan(), "expr={expr:?} v={v}");
    }
}
