// src/noyau/erreur.rs
//
// Deux genres d’erreur seulement (visibles) :
// - DivisionParZero -> "Cannot divide by zero"
// - Generique       -> "Error"
//
// La `Cause` d’une erreur générique ne sert qu’au journal (tracing) :
// l’utilisateur voit toujours le même texte.

use thiserror::Error;

/// Échec d’évaluation, tel qu’affiché à l’utilisateur.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("Cannot divide by zero")]
    DivisionParZero,

    #[error("Error")]
    Generique(Cause),
}

/// Raison interne d’une erreur générique.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Cause {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("opérande manquante")]
    OperandeManquante,

    #[error("opérateur manquant entre deux valeurs")]
    OperateurManquant,

    #[error("dépassement numérique")]
    Debordement,

    #[error("puissance trop grande")]
    PuissanceTropGrande,
}

impl From<Cause> for ErreurCalcul {
    fn from(cause: Cause) -> Self {
        Self::Generique(cause)
    }
}
