// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en refusant les formes mal construites
// - Puis évaluer la RPN sur une pile de Nombre
//
// Précédences (faible -> forte):
//   + -  (binaires, gauche)
//   * / //  (binaires, gauche)
//   + -  (unaires, préfixes)
//   ^    (droite)
//
// Conséquences voulues :
//   -2^2  = -(2^2) = -4
//   2^-1  = 2^(-1) = 0.5
//   2*-3  = -6   (unaire réel : pas d’injection de 0)
//   2^3^2 = 2^9  = 512

use super::erreur::{Cause, ErreurCalcul};
use super::jetons::Tok;
use super::nombre::Nombre;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::DoubleSlash => 2,
        Tok::Neg | Tok::Pos => 3,
        Tok::Caret => 4,
        Tok::Num(_) => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret | Tok::Neg | Tok::Pos)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [Num(2), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    if tokens.is_empty() {
        return Err(Cause::EntreeVide.into());
    }

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une sous-expression complète.
    // Sert à détecter les unaires et les opérandes manquantes.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(Cause::OperateurManquant.into());
                }
                out.push(tok);
                prev_was_value = true;
            }

            // + / - en tête ou après un opérateur : préfixe unaire.
            // Un préfixe ne dépile rien (il n’a pas encore d’opérande).
            Tok::Plus | Tok::Minus if !prev_was_value => {
                ops.push(if matches!(tok, Tok::Minus) {
                    Tok::Neg
                } else {
                    Tok::Pos
                });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::DoubleSlash | Tok::Caret => {
                if !prev_was_value {
                    return Err(Cause::OperandeManquante.into());
                }

                // dépile tant que la précédence/associativité exige
                // de sortir l’opérateur du haut
                while let Some(top) = ops.last() {
                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            // jamais émis par tokenize
            Tok::Neg | Tok::Pos => ops.push(tok),
        }
    }

    // opérateur final sans opérande : "5/" , "3-" , "-"
    if !prev_was_value {
        return Err(Cause::OperandeManquante.into());
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN.
pub fn eval_rpn(rpn: &[Tok]) -> Result<Nombre, ErreurCalcul> {
    let mut st: Vec<Nombre> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(n) => st.push(n),

            Tok::Neg | Tok::Pos => {
                let x = st.pop().ok_or(Cause::OperandeManquante)?;
                st.push(if matches!(tok, Tok::Neg) { x.oppose() } else { x });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::DoubleSlash | Tok::Caret => {
                let b = st.pop().ok_or(Cause::OperandeManquante)?;
                let a = st.pop().ok_or(Cause::OperandeManquante)?;

                let v = match tok {
                    Tok::Plus => a.ajouter(b)?,
                    Tok::Minus => a.soustraire(b)?,
                    Tok::Star => a.multiplier(b)?,
                    Tok::Slash => a.diviser(b)?,
                    Tok::DoubleSlash => a.diviser_plancher(b)?,
                    _ => a.puissance(b)?,
                };

                st.push(v);
            }
        }
    }

    let v = st.pop().ok_or(Cause::EntreeVide)?;
    if !st.is_empty() {
        return Err(Cause::OperateurManquant.into());
    }
    Ok(v)
}
