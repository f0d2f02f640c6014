// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier est traduit en `Touche` ici, AVANT la vue : un seul chemin
//   (AppCalc::saisir) pour les boutons et le clavier.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for touche in touches_clavier(ctx) {
            self.saisir(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Clavier -> touches, dans l’ordre de frappe.
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    let focus_widget = ctx.memory(|m| m.focused().is_some());
    ctx.input(|i| traduire_evenements(&i.events, focus_widget))
}

/// - caractères acceptés (0-9 . + - * / ^) : ajout ; '=' : évaluer
/// - Enter = "=", Backspace = ←, Escape / Delete = C
/// - tout le reste est ignoré
///
/// Un bouton du pavé qui a le focus clavier se déclenche déjà sur Enter :
/// dans ce cas Enter n’est PAS traduit ici (sinon double déclenchement).
fn traduire_evenements(events: &[egui::Event], focus_widget: bool) -> Vec<Touche> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(texte) => {
                out.extend(texte.chars().filter_map(|c| {
                    if c == '=' {
                        Some(Touche::Evaluer)
                    } else {
                        Touche::depuis_caractere(c)
                    }
                }));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter if !focus_widget => out.push(Touche::Evaluer),
                egui::Key::Backspace => out.push(Touche::RetourArriere),
                egui::Key::Escape | egui::Key::Delete => out.push(Touche::Effacer),
                _ => {}
            },
            _ => {}
        }
    }
    out
}
