//! Noyau de calcul (sans UI)
//!
//! Organisation interne :
//! - erreur.rs   : deux genres d’erreur visibles (+ cause interne pour le journal)
//! - nombre.rs   : entier exact (BigInt) OU réel (f64), opérations
//! - jetons.rs   : tokenisation
//! - rpn.rs      : shunting-yard + évaluation de la RPN
//! - format.rs   : affichage (10 décimales max, zéros finaux retirés)
//! - eval.rs     : pipeline complet
//!
//! Aucune évaluation “générique” : seuls les nombres et + - * / ^ (// **) existent.

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod nombre;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use eval::{affichage, evaluer};
