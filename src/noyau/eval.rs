//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile de Nombre -> affichage
//!
//! Fonction pure : aucune donnée partagée, aucun état caché.
//! Le même texte donne toujours le même résultat.

use tracing::{debug, trace};

use super::erreur::ErreurCalcul;
use super::format::format_nombre;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression et retourne le texte à afficher,
/// ou le genre d’erreur (DivisionParZero / Generique).
pub fn evaluer(expr_str: &str) -> Result<String, ErreurCalcul> {
    let resultat = evaluer_sans_journal(expr_str);

    match &resultat {
        Ok(affiche) => debug!(expression = expr_str, resultat = %affiche, "évaluation"),
        Err(ErreurCalcul::Generique(cause)) => {
            debug!(expression = expr_str, %cause, "évaluation échouée")
        }
        Err(e) => debug!(expression = expr_str, erreur = %e, "évaluation échouée"),
    }

    resultat
}

fn evaluer_sans_journal(expr_str: &str) -> Result<String, ErreurCalcul> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    trace!(jetons = %format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(rpn = %format_tokens(&rpn));

    // 3) Valeur
    let valeur = eval_rpn(&rpn)?;

    // 4) Affichage
    Ok(format_nombre(&valeur))
}

/// Texte final, succès ou erreur (ce que l’écran montre après "=").
pub fn affichage(expr_str: &str) -> String {
    match evaluer(expr_str) {
        Ok(s) => s,
        Err(e) => e.to_string(),
    }
}
