//! Tests scientifiques (campagne) : propriétés arithmétiques + limites contrôlées.
//!
//! But : vérifier le contrat d’affichage sur des familles d’expressions,
//! sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (longueur, exposants)
//!
//! Notes :
//! - Entiers exacts : + - * ^ ne passent jamais par f64 (2^100 est exact).
//! - `/` est une division vraie : le résultat est réel, puis nettoyé (4/2 -> 2).
//! - Les réels sont affichés à 10 décimales max : on compare des textes.

use std::time::{Duration, Instant};

use super::erreur::{Cause, ErreurCalcul};
use super::{affichage, evaluer};

fn eval_ok(expr: &str) -> String {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e:?}"))
}

fn assert_affiche(expr: &str, attendu: &str) {
    assert_eq!(affichage(expr), attendu, "expr={expr:?}");
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Contrat d’affichage ------------------------ */

#[test]
fn sci_exemples_de_reference() {
    assert_affiche("2^10", "1024");
    assert_affiche("10/4", "2.5");
    assert_affiche("5/0", "Cannot divide by zero");
    assert_affiche("5/", "Error");
}

#[test]
fn sci_entier_jamais_de_point() {
    // tout ce qui reste entier s’affiche sans '.'
    for expr in ["1+1", "9*9", "2^20", "100-1", "7//2", "0", "007"] {
        let s = eval_ok(expr);
        assert!(!s.contains('.'), "expr={expr:?} affiche={s:?}");
    }
}

#[test]
fn sci_reels_jamais_de_zero_final() {
    for expr in ["10/4", "1/8", "2.50*1", "3.1", "0.5+0.25", "1/3", "2/3"] {
        let s = eval_ok(expr);
        assert!(!s.ends_with('0') || !s.contains('.'), "expr={expr:?} affiche={s:?}");
        assert!(!s.ends_with('.'), "expr={expr:?} affiche={s:?}");
        if let Some((_, frac)) = s.split_once('.') {
            assert!(frac.len() <= 10, "expr={expr:?} affiche={s:?}");
        }
    }
}

#[test]
fn sci_reel_integral_sans_point() {
    assert_affiche("4/2", "2");
    assert_affiche("2.5*2", "5");
    assert_affiche("4^0.5", "2");
    assert_affiche("3.0", "3");
}

/* ------------------------ Identités ------------------------ */

#[test]
fn sci_elements_neutres() {
    for a in ["7", "1.25", "12345678901234567890"] {
        assert_eq!(eval_ok(&format!("{a}+0")), eval_ok(a));
        assert_eq!(eval_ok(&format!("{a}*1")), eval_ok(a));
        assert_eq!(eval_ok(&format!("{a}-{a}")), "0");
        assert_eq!(eval_ok(&format!("{a}^1")), eval_ok(a));
        assert_eq!(eval_ok(&format!("{a}^0")), "1");
    }
}

#[test]
fn sci_unaires_empiles() {
    assert_affiche("--5", "5");
    assert_affiche("---5", "-5");
    assert_affiche("+5", "5");
    assert_affiche("5+-5", "0");
    assert_affiche("-5*-5", "25");
}

#[test]
fn sci_moins_unaire_sous_la_puissance() {
    // -a^b = -(a^b), mais a^-b = 1/(a^b)
    assert_affiche("-3^2", "-9");
    assert_affiche("3^-2", "0.1111111111");
    assert_affiche("2^-2^2", "0.0625");
}

/* ------------------------ Erreurs : deux genres seulement ------------------------ */

#[test]
fn sci_erreurs_generiques() {
    for expr in ["5/", "*5", "5**", "1.2.3", ".", "+", "2^", "5+*3", "2x", "(1+2)"] {
        match evaluer(expr) {
            Err(ErreurCalcul::Generique(_)) => {}
            autre => panic!("expr={expr:?} attendu Generique, reçu {autre:?}"),
        }
        assert_affiche(expr, "Error");
    }
}

#[test]
fn sci_divisions_par_zero() {
    for expr in ["5/0", "0/0", "1/0.0", "3//0", "1+1/0", "0^-1", "2*3/0*4"] {
        assert_eq!(
            evaluer(expr),
            Err(ErreurCalcul::DivisionParZero),
            "expr={expr:?}"
        );
    }
}

#[test]
fn sci_forme_verifiee_avant_evaluation() {
    // shunting-yard d’abord : "5/0+" est mal construite, on n’évalue rien
    assert_eq!(
        evaluer("5/0+"),
        Err(ErreurCalcul::Generique(Cause::OperandeManquante))
    );
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_bigint_exact() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    assert_affiche("2^100", "1267650600228229401496703205376");

    // gros entier (100 chiffres) : reste exact
    let big = "9".repeat(100);
    let expr = format!("{big}+1");
    let attendu = format!("1{}", "0".repeat(100));
    assert_affiche(&expr, &attendu);
    budget(t0, max);
}

#[test]
fn sci_stress_puissance_refusee_rapidement() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    assert_eq!(
        evaluer("9^9^9"),
        Err(ErreurCalcul::Generique(Cause::PuissanceTropGrande))
    );
    budget(t0, max);
}

#[test]
fn sci_stress_debordement_reel() {
    assert_eq!(
        evaluer("10.0^400"),
        Err(ErreurCalcul::Generique(Cause::Debordement))
    );
    // entier énorme converti en réel pour une division
    let big = format!("1{}", "0".repeat(400));
    assert_eq!(
        evaluer(&format!("{big}/3")),
        Err(ErreurCalcul::Generique(Cause::Debordement))
    );
}

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 2000 termes : pile plate (pas d’AST récursif), aucun risque de stack overflow
    let mut expr = String::new();
    for k in 0..2000 {
        if k > 0 {
            expr.push('+');
        }
        expr.push_str("0.5");
    }
    budget(t0, max);

    assert_affiche(&expr, "1000");
    budget(t0, max);
}

#[test]
fn sci_stress_longue_chaine_unaire() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 1001 moins : nombre impair => négatif
    let expr = format!("{}7", "-".repeat(1001));
    assert_affiche(&expr, "-7");
    budget(t0, max);
}
