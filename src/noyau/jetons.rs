// src/noyau/jetons.rs

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Op {
    fn depuis_car(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '^' => Some(Op::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Texte du littéral tel que lu ("12", "3.", ".5", "0.25").
    // La conversion en f64 est faite par l'analyse.
    Num(String),
    Op(Op),

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(texte) => f.write_str(texte),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux : `12`, `12.`, `12.5`, `.5`
/// - opérateurs + - * / ^
/// - parenthèses ( )
///
/// Lecture permissive : tout autre caractère (lettres, `.` isolé, symboles)
/// est ignoré sans erreur. Une entrée vide ou blanche donne une liste vide.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        if let Some(op) = Op::depuis_car(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        // digits ( "." digits? )?
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        // "." digits
        if c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        tracing::trace!(position = i, caractere = %c, "caractère ignoré");
        i += 1;
    }

    out
}

/// Format utilitaire (journal / ligne "Jetons" de la vue) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
