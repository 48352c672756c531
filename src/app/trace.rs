// src/app/trace.rs
//
// Tracé 2-D sur un Painter egui
// -----------------------------
// - Repere      : données (x, y) <-> écran
// - tracer_courbe : primitive générique “une suite de (x, y) + une étiquette”
// - dessiner_graphique : grille pointillée, axes y=0 / x=0, graduations, courbes, légende
//
// Les échantillons non finis (inf / NaN) coupent la polyligne.

use eframe::egui::{self, pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Shape, Stroke};

use super::etat::Graphique;
use crate::noyau::echantillons::Courbe;
use crate::noyau::graduations::{Y_MAX, Y_MIN};

/// Couleurs “classiques” (bleu / orange) : fonction puis série.
pub const COULEUR_FONCTION: Color32 = Color32::from_rgb(31, 119, 180);
pub const COULEUR_TAYLOR: Color32 = Color32::from_rgb(255, 127, 14);

const EPAISSEUR_FONCTION: f32 = 2.5;
const EPAISSEUR_TAYLOR: f32 = 1.5;

// Marges (titre en haut, étiquettes y à gauche, étiquettes x en bas)
const MARGE_HAUT: f32 = 32.0;
const MARGE_GAUCHE: f32 = 36.0;
const MARGE_BAS: f32 = 24.0;
const MARGE_DROITE: f32 = 12.0;

/// Correspondance données -> écran.
#[derive(Clone, Copy, Debug)]
pub struct Repere {
    pub ecran: Rect,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Repere {
    pub fn vers_ecran(&self, x: f64, y: f64) -> Pos2 {
        // y borné loin hors cadre : évite les f32 infinis sans changer ce qui est visible
        let h = self.y_max - self.y_min;
        let y = y.clamp(self.y_min - 10.0 * h, self.y_max + 10.0 * h);

        let tx = ((x - self.x_min) / (self.x_max - self.x_min)) as f32;
        let ty = ((y - self.y_min) / h) as f32;
        pos2(
            self.ecran.left() + tx * self.ecran.width(),
            self.ecran.bottom() - ty * self.ecran.height(),
        )
    }

    pub fn depuis_ecran(&self, p: Pos2) -> (f64, f64) {
        let tx = f64::from((p.x - self.ecran.left()) / self.ecran.width());
        let ty = f64::from((self.ecran.bottom() - p.y) / self.ecran.height());
        (
            self.x_min + tx * (self.x_max - self.x_min),
            self.y_min + ty * (self.y_max - self.y_min),
        )
    }
}

/// Primitive générique : une polyligne par morceau de points finis.
pub fn tracer_courbe(painter: &egui::Painter, repere: &Repere, courbe: &Courbe, trait_: Stroke) {
    let mut morceau: Vec<Pos2> = Vec::with_capacity(courbe.points.len());

    for &[x, y] in &courbe.points {
        if x.is_finite() && y.is_finite() {
            morceau.push(repere.vers_ecran(x, y));
        } else {
            vider_morceau(painter, &mut morceau, trait_);
        }
    }
    vider_morceau(painter, &mut morceau, trait_);
}

fn vider_morceau(painter: &egui::Painter, morceau: &mut Vec<Pos2>, trait_: Stroke) {
    if morceau.len() >= 2 {
        painter.add(Shape::line(std::mem::take(morceau), trait_));
    } else {
        morceau.clear();
    }
}

/// Graphique complet dans tout l’espace disponible.
pub fn dessiner_graphique(ui: &mut egui::Ui, titre: &str, g: &Graphique) {
    let Some(fenetre) = g.fenetre else {
        ui.colored_label(ui.visuals().error_fg_color, "graphique indisponible");
        return;
    };

    let (reponse, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let cadre = reponse.rect;

    let repere = Repere {
        ecran: Rect::from_min_max(
            cadre.min + vec2(MARGE_GAUCHE, MARGE_HAUT),
            cadre.max - vec2(MARGE_DROITE, MARGE_BAS),
        ),
        x_min: fenetre.x_min,
        x_max: fenetre.x_max,
        y_min: Y_MIN,
        y_max: Y_MAX,
    };

    let visuels = ui.visuals();
    let couleur_texte = visuels.text_color();
    let couleur_grille = visuels.weak_text_color().gamma_multiply(0.5);
    let police = FontId::proportional(13.0);

    painter.rect_filled(repere.ecran, 0.0, visuels.extreme_bg_color);

    // Titre
    painter.text(
        pos2(cadre.center().x, cadre.top() + 4.0),
        Align2::CENTER_TOP,
        titre,
        FontId::proportional(18.0),
        couleur_texte,
    );

    // Grille pointillée + étiquettes
    for gx in &g.graduations_x {
        let haut = repere.vers_ecran(gx.valeur, Y_MAX);
        let bas = repere.vers_ecran(gx.valeur, Y_MIN);
        painter.extend(Shape::dashed_line(&[haut, bas], Stroke::new(1.0, couleur_grille), 4.0, 4.0));
        painter.text(bas + vec2(0.0, 4.0), Align2::CENTER_TOP, &gx.etiquette, police.clone(), couleur_texte);
    }
    for gy in &g.graduations_y {
        let gauche = repere.vers_ecran(fenetre.x_min, gy.valeur);
        let droite = repere.vers_ecran(fenetre.x_max, gy.valeur);
        painter.extend(Shape::dashed_line(&[gauche, droite], Stroke::new(1.0, couleur_grille), 4.0, 4.0));
        painter.text(gauche - vec2(6.0, 0.0), Align2::RIGHT_CENTER, &gy.etiquette, police.clone(), couleur_texte);
    }

    // Courbes + axes, coupées au cadre
    let dedans = painter.with_clip_rect(repere.ecran);

    let axe = Stroke::new(1.2, couleur_texte);
    dedans.line_segment([repere.vers_ecran(fenetre.x_min, 0.0), repere.vers_ecran(fenetre.x_max, 0.0)], axe);
    dedans.line_segment([repere.vers_ecran(0.0, Y_MIN), repere.vers_ecran(0.0, Y_MAX)], axe);

    let courbes = [
        (&g.courbe_fonction, Stroke::new(EPAISSEUR_FONCTION, COULEUR_FONCTION)),
        (&g.courbe_taylor, Stroke::new(EPAISSEUR_TAYLOR, COULEUR_TAYLOR)),
    ];
    for (courbe, trait_) in &courbes {
        tracer_courbe(&dedans, &repere, courbe, *trait_);
    }

    legende(&dedans, repere.ecran, &courbes, couleur_texte, visuels.window_fill);

    // Lecture du curseur
    if let Some(p) = reponse.hover_pos().filter(|p| repere.ecran.contains(*p)) {
        let (x, y) = repere.depuis_ecran(p);
        dedans.text(
            repere.ecran.right_bottom() - vec2(6.0, 6.0),
            Align2::RIGHT_BOTTOM,
            format!("x = {x:.3}   y = {y:.3}"),
            police,
            couleur_texte,
        );
    }
}

fn legende(
    painter: &egui::Painter,
    ecran: Rect,
    courbes: &[(&Courbe, Stroke)],
    couleur_texte: Color32,
    fond: Color32,
) {
    let police = FontId::proportional(13.0);
    let ligne = 18.0;
    let origine = ecran.left_top() + vec2(10.0, 10.0);

    let boite = Rect::from_min_size(origine, vec2(210.0, ligne * courbes.len() as f32 + 8.0));
    painter.rect_filled(boite, 4.0, fond.gamma_multiply(0.9));

    for (k, (courbe, trait_)) in courbes.iter().enumerate() {
        let y = origine.y + 4.0 + ligne * (k as f32 + 0.5);
        painter.line_segment([pos2(origine.x + 6.0, y), pos2(origine.x + 30.0, y)], *trait_);
        painter.text(pos2(origine.x + 38.0, y), Align2::LEFT_CENTER, &courbe.etiquette, police.clone(), couleur_texte);
    }
}
