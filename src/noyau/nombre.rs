// src/noyau/nombre.rs
//
// Valeur numérique du noyau : entier exact OU réel.
//
// Règles (identiques au comportement attendu d’une calculatrice “int/float”) :
// - Entier ⊕ Entier reste Entier pour + - * // et ^ (exposant ≥ 0)
// - `/` est une division VRAIE : toujours Reel (2.5, pas 2)
// - exposant négatif => Reel
// - mélange Entier/Reel => Reel
// - un réel non fini (inf/NaN) n’est jamais rendu : Debordement

use std::fmt;

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::{Cause, ErreurCalcul};

/// Garde-fou : taille max (en bits) d’un entier produit par `^`.
/// Au-delà, on refuse plutôt que de geler l’UI.
pub const BITS_PUISSANCE_MAX: u64 = 100_000;

#[derive(Clone, Debug, PartialEq)]
pub enum Nombre {
    Entier(BigInt),
    Reel(f64),
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nombre::Entier(n) => write!(f, "{n}"),
            Nombre::Reel(x) => write!(f, "{x:?}"),
        }
    }
}

/* ------------------------ Conversions ------------------------ */

fn reel_fini(x: f64) -> Result<Nombre, ErreurCalcul> {
    if x.is_finite() {
        Ok(Nombre::Reel(x))
    } else {
        Err(Cause::Debordement.into())
    }
}

fn entier_vers_reel(n: &BigInt) -> Result<f64, ErreurCalcul> {
    match n.to_f64() {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(Cause::Debordement.into()),
    }
}

impl Nombre {
    fn en_reel(&self) -> Result<f64, ErreurCalcul> {
        match self {
            Nombre::Entier(n) => entier_vers_reel(n),
            Nombre::Reel(x) => Ok(*x),
        }
    }

    fn est_zero(&self) -> bool {
        match self {
            Nombre::Entier(n) => n.is_zero(),
            Nombre::Reel(x) => *x == 0.0,
        }
    }

    fn est_negatif(&self) -> bool {
        match self {
            Nombre::Entier(n) => n.is_negative(),
            Nombre::Reel(x) => *x < 0.0,
        }
    }

    /* ------------------------ Unaires ------------------------ */

    pub fn oppose(self) -> Nombre {
        match self {
            Nombre::Entier(n) => Nombre::Entier(-n),
            Nombre::Reel(x) => Nombre::Reel(-x),
        }
    }

    /* ------------------------ Binaires ------------------------ */

    pub fn ajouter(self, autre: Nombre) -> Result<Nombre, ErreurCalcul> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Ok(Nombre::Entier(a + b)),
            (a, b) => reel_fini(a.en_reel()? + b.en_reel()?),
        }
    }

    pub fn soustraire(self, autre: Nombre) -> Result<Nombre, ErreurCalcul> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Ok(Nombre::Entier(a - b)),
            (a, b) => reel_fini(a.en_reel()? - b.en_reel()?),
        }
    }

    pub fn multiplier(self, autre: Nombre) -> Result<Nombre, ErreurCalcul> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Ok(Nombre::Entier(a * b)),
            (a, b) => reel_fini(a.en_reel()? * b.en_reel()?),
        }
    }

    /// Division vraie. Entier/Entier passe par un rationnel exact,
    /// puis UN seul arrondi vers f64 (pas deux conversions successives).
    pub fn diviser(self, autre: Nombre) -> Result<Nombre, ErreurCalcul> {
        if autre.est_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => {
                let q = BigRational::new(a, b);
                match q.to_f64() {
                    Some(x) => reel_fini(x),
                    None => Err(Cause::Debordement.into()),
                }
            }
            (a, b) => reel_fini(a.en_reel()? / b.en_reel()?),
        }
    }

    /// Division entière “plancher” (`//`) : arrondi vers -∞.
    pub fn diviser_plancher(self, autre: Nombre) -> Result<Nombre, ErreurCalcul> {
        if autre.est_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => {
                // `/` de BigInt tronque vers 0 : on corrige quand le reste
                // n’a pas le signe du diviseur.
                let mut q = &a / &b;
                let r = &a % &b;
                if !r.is_zero() && (r.sign() == Sign::Minus) != (b.sign() == Sign::Minus) {
                    q -= 1u32;
                }
                Ok(Nombre::Entier(q))
            }
            (a, b) => reel_fini(plancher_reel(a.en_reel()?, b.en_reel()?)),
        }
    }

    /// Puissance (`^` / `**`).
    /// - 0 à une puissance négative : division par zéro
    /// - Entier^Entier(≥0) : exact, borné par BITS_PUISSANCE_MAX
    pub fn puissance(self, exposant: Nombre) -> Result<Nombre, ErreurCalcul> {
        if self.est_zero() && exposant.est_negatif() {
            return Err(ErreurCalcul::DivisionParZero);
        }

        match (self, exposant) {
            (Nombre::Entier(b), Nombre::Entier(e)) if !e.is_negative() => {
                puissance_entiere(b, &e).map(Nombre::Entier)
            }
            (b, e) => {
                let x = b.en_reel()?.powf(e.en_reel()?);
                reel_fini(x)
            }
        }
    }
}

/// a // b en réels (b ≠ 0), à partir du reste exact `a % b` (fmod).
/// Diviser puis arrondir ne suffit pas : 1/0.1 s’arrondit à 10.0, alors que
/// 1 // 0.1 vaut 9 (0.1 en binaire est un peu plus grand que 1/10).
fn plancher_reel(a: f64, b: f64) -> f64 {
    let reste = a % b;
    let mut q = (a - reste) / b;
    // reste du signe du diviseur (convention plancher)
    if reste != 0.0 && (b < 0.0) != (reste < 0.0) {
        q -= 1.0;
    }
    if q == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    // q est presque entier : on recale sur l’entier le plus proche
    let mut p = q.floor();
    if q - p > 0.5 {
        p += 1.0;
    }
    p
}

/// b^e exact (e ≥ 0), avec garde-fou de taille.
fn puissance_entiere(base: BigInt, e: &BigInt) -> Result<BigInt, ErreurCalcul> {
    // |b| ≤ 1 : résultat trivial, quel que soit e
    if base.is_zero() {
        return Ok(if e.is_zero() {
            BigInt::one()
        } else {
            BigInt::zero()
        });
    }
    if base.abs().is_one() {
        let pair = (e % 2u32).is_zero();
        return Ok(if base.is_negative() && !pair {
            -BigInt::one()
        } else {
            BigInt::one()
        });
    }

    let e = e.to_u64().ok_or(Cause::PuissanceTropGrande)?;
    if base.bits().saturating_mul(e) > BITS_PUISSANCE_MAX {
        return Err(Cause::PuissanceTropGrande.into());
    }
    // |b| ≥ 2 et bits*e borné => e tient dans u32
    let e = u32::try_from(e).map_err(|_| Cause::PuissanceTropGrande)?;
    Ok(base.pow(e))
}
