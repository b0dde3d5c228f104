//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée (générateur) + garde-fou du noyau (PROFONDEUR_MAX)
//! - budget temps global
//! - invariants clés :
//!     - aucun panic, quelle que soit l'entrée
//!     - même entrée => même résultat (bit à bit)
//!     - un échec ne "fuit" jamais en NaN, et NaN reste un succès possible
//!     - une expression bien formée entourée de parenthèses garde sa valeur

use std::time::{Duration, Instant};

use super::erreur::Echec;
use super::parse;

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}.{}", rng.pick(100), rng.pick(10)),
        3 => format!(".{}", 1 + rng.pick(9)),
        4 => format!("{}.", rng.pick(20)),
        _ => format!("{}", rng.pick(1000)),
    }
}

/// Expression bien formée (grammaire explicite, sans implicite).
fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 {
        return gen_nombre(rng);
    }
    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => format!("({})", gen_expr(rng, profondeur - 1)),
        2 => format!("-{}", gen_expr_atome(rng, profondeur - 1)),
        _ => {
            let op = ["+", "-", "*", "/", "^"][rng.pick(5) as usize];
            let a = gen_expr_atome(rng, profondeur - 1);
            let b = gen_expr_atome(rng, profondeur - 1);
            if rng.coin() {
                format!("{a} {op} {b}")
            } else {
                format!("{a}{op}{b}")
            }
        }
    }
}

fn gen_expr_atome(rng: &mut Rng, profondeur: u32) -> String {
    if rng.coin() {
        gen_nombre(rng)
    } else {
        format!("({})", gen_expr(rng, profondeur))
    }
}

/// Bruit : suite arbitraire de symboles, reconnus ou non.
fn gen_bruit(rng: &mut Rng, longueur: u32) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '5', '9', '.', '+', '-', '*', '/', '^', '(', ')', ' ', 'x', ',', 'é', '%',
    ];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn meme_resultat(a: &Result<f64, Echec>, b: &Result<f64, Echec>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.to_bits() == y.to_bits(),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_bruit_sans_panic_et_deterministe() {
    let start = Instant::now();
    let mut rng = Rng::new(0x5eed_1234);

    for _ in 0..3000 {
        budget(start, Duration::from_secs(5));
        let n = rng.pick(40);
        let s = gen_bruit(&mut rng, n);

        let r1 = parse(&s);
        let r2 = parse(&s);
        assert!(meme_resultat(&r1, &r2), "non déterministe pour {s:?}");
    }
}

#[test]
fn fuzz_expressions_bien_formees() {
    let start = Instant::now();
    let mut rng = Rng::new(42);

    for _ in 0..2000 {
        budget(start, Duration::from_secs(5));
        let s = gen_expr(&mut rng, 4);

        match parse(&s) {
            Ok(_) => {}
            // seul échec admissible sur une expression bien formée
            Err(Echec::DivisionParZero { .. }) => {}
            Err(e) => panic!("expr={s:?} échec inattendu: {e}"),
        }
    }
}

#[test]
fn fuzz_parentheses_neutres() {
    let mut rng = Rng::new(7);

    for _ in 0..1000 {
        let s = gen_expr(&mut rng, 3);
        let r = parse(&s);
        let r_par = parse(&format!("({s})"));
        assert!(
            meme_resultat(&r, &r_par) || matches!((&r, &r_par), (Err(_), Err(_))),
            "expr={s:?} r={r:?} r_par={r_par:?}"
        );
    }
}

#[test]
fn fuzz_troncature_echoue_proprement() {
    // couper une expression n'importe où : jamais de panic
    let mut rng = Rng::new(99);

    for _ in 0..500 {
        let s = gen_expr(&mut rng, 3);
        for coupe in 0..=s.len() {
            if s.is_char_boundary(coupe) {
                let _ = parse(&s[..coupe]);
            }
        }
    }
}

#[test]
fn fuzz_imbrication_extreme() {
    // le garde-fou coupe avant la pile native
    let mut rng = Rng::new(2024);

    for _ in 0..20 {
        let n = 1000 + rng.pick(4000) as usize;
        let ouvrantes = "(".repeat(n);
        let signes = "-".repeat(n);
        let exposants = "2^".repeat(n);

        assert!(matches!(
            parse(&format!("{ouvrantes}1")),
            Err(Echec::ProfondeurExcessive { .. })
        ));
        assert!(matches!(
            parse(&format!("{signes}1")),
            Err(Echec::ProfondeurExcessive { .. })
        ));
        assert!(matches!(
            parse(&format!("{exposants}1")),
            Err(Echec::ProfondeurExcessive { .. })
        ));
    }
}
