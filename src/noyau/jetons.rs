// src/noyau/jetons.rs

use num_bigint::BigInt;

use super::erreur::{Cause, ErreurCalcul};
use super::nombre::Nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(Nombre),

    Plus,
    Minus,
    Star,
    Slash,
    DoubleSlash, // //
    Caret,       // ^ ou **

    // Produits par le shunting-yard seulement (jamais par tokenize)
    // NOTE: un + / - en position “valeur attendue” devient unaire.
    Neg,
    Pos,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12, 007)
/// - décimaux (ex: 1.5, .5, 5.)
/// - opérateurs + - * / ^
/// - `**` (= ^) et `//` (division plancher)
/// - espaces ignorés
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs (les doubles d’abord)
        let suivant = chars.get(i + 1).copied();
        match (c, suivant) {
            ('*', Some('*')) => {
                out.push(Tok::Caret);
                i += 2;
                continue;
            }
            ('/', Some('/')) => {
                out.push(Tok::DoubleSlash);
                i += 2;
                continue;
            }
            ('+', _) => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            ('-', _) => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            ('*', _) => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            ('/', _) => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            ('^', _) => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : chiffres [ . chiffres ]  ou  . chiffres
        if c.is_ascii_digit() || c == '.' {
            let (nombre, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(nombre));
            i = fin;
            continue;
        }

        return Err(Cause::CaractereInattendu(c).into());
    }

    Ok(out)
}

/// Lit un littéral numérique à partir de `debut`.
/// Retourne (valeur, indice juste après le littéral).
fn lire_nombre(chars: &[char], debut: usize) -> Result<(Nombre, usize), ErreurCalcul> {
    let mut i = debut;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    let entier: String = chars[debut..i].iter().collect();

    // entier pur
    if i >= chars.len() || chars[i] != '.' {
        let n = BigInt::parse_bytes(entier.as_bytes(), 10)
            .ok_or_else(|| Cause::NombreInvalide(entier.clone()))?;
        return Ok((Nombre::Entier(n), i));
    }

    // partie décimale
    i += 1;
    let debut_frac = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    let frac: String = chars[debut_frac..i].iter().collect();
    let brut: String = chars[debut..i].iter().collect();

    // "." seul, ou un second point collé ("1.2.3")
    if entier.is_empty() && frac.is_empty() {
        return Err(Cause::NombreInvalide(brut).into());
    }
    if i < chars.len() && chars[i] == '.' {
        return Err(Cause::NombreInvalide(brut).into());
    }

    // forme normalisée : f64::from_str n’a pas à deviner "5." ou ".5"
    let normalise = format!(
        "{}.{}",
        if entier.is_empty() { "0" } else { entier.as_str() },
        if frac.is_empty() { "0" } else { frac.as_str() }
    );
    let x: f64 = normalise
        .parse()
        .map_err(|_| Cause::NombreInvalide(brut.clone()))?;
    if !x.is_finite() {
        return Err(Cause::Debordement.into());
    }

    Ok((Nombre::Reel(x), i))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::DoubleSlash => "//".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::Neg => "neg".to_string(),
            Tok::Pos => "pos".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
