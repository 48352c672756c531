// src/app.rs
//
// Séries de Taylor — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + trace.rs)
// - Ré-exporter AppTaylor (pour main.rs: use crate::app::AppTaylor;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod trace;
pub mod vue;

pub use etat::AppTaylor;

use eframe::egui;

impl eframe::App for AppTaylor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement l’entrée x (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::SidePanel::left("commandes")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                self.ui_commandes(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_graphique(ui);
        });
    }
}
