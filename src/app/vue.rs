// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Deux champs en lecture seule : expression (petit) + résultat (grand)
// - Pavé 4 colonnes, "=" sur deux colonnes
//
// Note :
// - Le clavier est lu dans app.rs (avant la vue), pas ici.

use eframe::egui;

use super::etat::{AppCalc, Operateur, Touche};

/// Pavé (même disposition que la calculatrice d’origine).
const PAVE: [&[Touche]; 5] = [
    &[
        Touche::Effacer,
        Touche::RetourArriere,
        Touche::Operateur(Operateur::Puissance),
        Touche::Operateur(Operateur::Divise),
    ],
    &[
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Fois),
    ],
    &[
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Operateur::Moins),
    ],
    &[
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Operateur::Plus),
    ],
    &[Touche::Chiffre(0), Touche::Point, Touche::Evaluer],
];

const HAUTEUR_BOUTON: f32 = 52.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);

        ui.add_space(10.0);

        self.ui_pave(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        let couleur_resultat = if self.resultat_en_erreur {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // expression en cours (peut être vide)
                    ui.label(
                        egui::RichText::new(self.expression.as_str())
                            .monospace()
                            .size(18.0)
                            .weak(),
                    );
                    ui.label(
                        egui::RichText::new(self.resultat.as_str())
                            .monospace()
                            .size(36.0)
                            .color(couleur_resultat),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let espace = ui.spacing().item_spacing.x;
        let largeur = ((ui.available_width() - 3.0 * espace) / 4.0).max(40.0);

        for ligne in PAVE {
            ui.horizontal(|ui| {
                for &touche in ligne {
                    let w = if touche == Touche::Evaluer {
                        2.0 * largeur + espace
                    } else {
                        largeur
                    };
                    self.bouton(ui, touche, [w, HAUTEUR_BOUTON]);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, taille: [f32; 2]) {
        let texte = egui::RichText::new(touche.libelle())
            .size(20.0)
            .strong()
            .color(egui::Color32::WHITE);
        let b = egui::Button::new(texte).fill(couleur_touche(touche));

        if ui.add_sized(taille, b).clicked() {
            self.saisir(touche);
        }
    }
}

/// Couleur de fond par famille de touche.
fn couleur_touche(touche: Touche) -> egui::Color32 {
    match touche {
        Touche::Chiffre(_) | Touche::Point => egui::Color32::from_rgb(0x2A, 0x2A, 0x4A),
        Touche::Operateur(_) => egui::Color32::from_rgb(0x0F, 0x34, 0x60),
        Touche::Effacer | Touche::RetourArriere => egui::Color32::from_rgb(0x95, 0x01, 0x01),
        Touche::Evaluer => egui::Color32::from_rgb(0x1B, 0x5E, 0x20),
    }
}
