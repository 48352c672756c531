// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Panneau gauche : choix de la fonction (radio), degré (curseur), évaluation exacte en un point
// - Panneau central : graphique (trace.rs)
// - Clavier : Enter évalue (quand le champ x a le focus)

use eframe::egui;

use super::etat::AppTaylor;
use super::trace::dessiner_graphique;
use crate::noyau::Fonction;

/// Titre du graphique.
const TITRE_GRAPHIQUE: &str = "Approximations par séries de Taylor";

impl AppTaylor {
    /// Panneau de commandes : à appeler depuis eframe::App::update(...)
    pub fn ui_commandes(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Séries de Taylor");
                ui.add_space(6.0);

                self.ui_fonction(ui);

                ui.add_space(8.0);
                self.ui_degre(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_point(ui);
            });
    }

    /// Panneau central.
    pub fn ui_graphique(&self, ui: &mut egui::Ui) {
        dessiner_graphique(ui, TITRE_GRAPHIQUE, &self.graphique);
    }

    fn ui_fonction(&mut self, ui: &mut egui::Ui) {
        ui.label("Fonction :");
        let mut choix = self.fonction;
        for f in Fonction::TOUTES {
            ui.radio_value(&mut choix, f, f.etiquette());
        }
        if choix != self.fonction {
            self.choisir_fonction(choix);
        }
    }

    fn ui_degre(&mut self, ui: &mut egui::Ui) {
        let mut d = self.degre;
        let resp = ui.add(
            egui::Slider::new(&mut d, self.reglages.degre_min..=self.reglages.degre_max)
                .text("n-ième degré")
                .step_by(1.0),
        );
        if resp.changed() {
            self.set_degre(d);
        }
    }

    fn ui_point(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("T{}(x) exact en x :", self.degre));

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree_x)
                .desired_width(ui.available_width())
                .hint_text("Ex: 1, 1/2, -0.25")
                .id_salt("entree_x_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter : seulement si le champ avait le focus (perdu au moment de la validation)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.evaluer_point();
        }

        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface résultats + erreur", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            let eq = ui.add_sized([46.0, 30.0], egui::Button::new("="));
            if eq.clicked() {
                self.evaluer_point();
            }
        });

        ui.horizontal(|ui| {
            ui.label("ΣLocal :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=200)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }

        ui.add_space(6.0);

        ui.label("EXACT :");
        Self::champ_monospace(ui, "exact_out", &self.exact, 2);

        ui.label("ΣLocal :");
        if self.lecture_dispo {
            Self::champ_monospace(ui, "socal_out", &self.lecture, 1);
        } else {
            ui.monospace("indisponible");
        }

        ui.label("f64 :");
        Self::champ_monospace(ui, "flottant_out", &self.flottant, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule, cadre visuel via Frame + Label monospace (retour à la ligne).
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.add(egui::Label::new(egui::RichText::new(contenu).monospace()).wrap());
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([46.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}
