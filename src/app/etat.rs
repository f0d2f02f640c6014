//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (expression, résultat affiché)
//! et appliquer les touches (chiffres, opérateurs, C, ←, =).
//!
//! Contrats :
//! - Le résultat affiché dérive TOUJOURS de l’expression (aucune valeur numérique stockée).
//! - Mise à jour “en direct” : après chaque ajout, on évalue à l’essai ; si ça échoue
//!   (ex: "12+"), on garde l’ancien résultat au lieu d’afficher "Error".
//! - Seuls "=" et ← montrent une erreur comme résultat.
//! - C remet tout à zéro, depuis n’importe quel état.

use tracing::debug;

use crate::noyau;

/// Texte affiché au démarrage et après C.
pub const RESULTAT_INITIAL: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
        }
    }
}

/// Une touche (bouton ou clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Operateur(Operateur),
    Effacer,
    RetourArriere,
    Evaluer,
}

impl Touche {
    /// Clavier -> touche. Tout caractère hors `0-9 . + - * / ^` est ignoré (None).
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        let t = match c {
            '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
            '.' => Touche::Point,
            '+' => Touche::Operateur(Operateur::Plus),
            '-' => Touche::Operateur(Operateur::Moins),
            '*' => Touche::Operateur(Operateur::Fois),
            '/' => Touche::Operateur(Operateur::Divise),
            '^' => Touche::Operateur(Operateur::Puissance),
            _ => return None,
        };
        Some(t)
    }

    /// Texte du bouton.
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::Point => ".".to_string(),
            Touche::Operateur(op) => op.symbole().to_string(),
            Touche::Effacer => "C".to_string(),
            Touche::RetourArriere => "←".to_string(),
            Touche::Evaluer => "=".to_string(),
        }
    }
}

/// État conceptuel du couple (expression, résultat).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EtatSession {
    #[default]
    Vide,
    Partielle,
    Evaluee,
    ErreurAffichee,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sortie ---
    pub resultat: String, // nombre formaté OU message d’erreur
    pub resultat_en_erreur: bool, // vrai si `resultat` est un message d’erreur (couleur)

    pub etat: EtatSession,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: String::new(),
            resultat: RESULTAT_INITIAL.to_string(),
            resultat_en_erreur: false,
            etat: EtatSession::Vide,
        }
    }
}

impl AppCalc {
    /* ------------------------ Entrée unique (boutons + clavier) ------------------------ */

    pub fn saisir(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(d) => {
                // un Chiffre hors 0..=9 ne peut venir que d’un bug appelant : ignoré
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.ajouter(c);
                }
            }
            Touche::Point => self.ajouter('.'),
            Touche::Operateur(op) => self.ajouter(op.symbole()),
            Touche::Effacer => self.effacer(),
            Touche::RetourArriere => self.retour_arriere(),
            Touche::Evaluer => self.evaluer(),
        }
        debug!(?touche, expression = %self.expression, resultat = %self.resultat, etat = ?self.etat);
    }

    /* ------------------------ Actions ------------------------ */

    /// Ajout d’un caractère + évaluation “à l’essai”.
    fn ajouter(&mut self, c: char) {
        self.expression.push(c);
        self.etat = EtatSession::Partielle;

        // échec (ex: opérateur final) => on garde l’ancien résultat
        if let Ok(r) = noyau::evaluer(&self.expression) {
            self.resultat = r;
            self.resultat_en_erreur = false;
        }
    }

    /// ← : retire un caractère puis réévalue (l’erreur éventuelle EST affichée).
    pub fn retour_arriere(&mut self) {
        if self.expression.pop().is_none() {
            return;
        }

        if self.expression.is_empty() {
            self.effacer();
            return;
        }

        let r = noyau::evaluer(&self.expression);
        self.afficher(r);
        self.etat = EtatSession::Partielle;
    }

    /// = : résultat final (ou message d’erreur), puis l’expression repart de zéro.
    pub fn evaluer(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        let r = noyau::evaluer(&self.expression);
        self.etat = if r.is_ok() {
            EtatSession::Evaluee
        } else {
            EtatSession::ErreurAffichee
        };
        self.afficher(r);
        self.expression.clear();
    }

    /// C : remise à zéro totale.
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.resultat = RESULTAT_INITIAL.to_string();
        self.resultat_en_erreur = false;
        self.etat = EtatSession::Vide;
    }

    /// Résultat OU message d’erreur, avec le drapeau de couleur.
    fn afficher(&mut self, r: Result<String, noyau::erreur::ErreurCalcul>) {
        match r {
            Ok(s) => {
                self.resultat = s;
                self.resultat_en_erreur = false;
            }
            Err(e) => {
                self.resultat = e.to_string();
                self.resultat_en_erreur = true;
            }
        }
    }
}
