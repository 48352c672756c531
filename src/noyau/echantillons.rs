//! Échantillonnage : fenêtre d’affichage + courbes (x, y) étiquetées.
//!
//! Une courbe = une étiquette + une suite ordonnée de points. Le rendu (app/trace.rs)
//! ne connaît que ça : pas de hiérarchie “trig / exp / Taylor”, juste des producteurs
//! de données par famille de fonctions.

use std::f64::consts::PI;

use super::erreur::ErreurNoyau;
use super::serie::Fonction;

/// Intervalle affiché [x_min, x_max].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fenetre {
    pub x_min: f64,
    pub x_max: f64,
}

impl Fenetre {
    /// Fenêtre d’affichage pour une fonction.
    ///
    /// `intervalle` est la longueur totale :
    /// - trig : en multiples de π (6 -> [-3π, 3π]) ; doit être pair et > 0
    /// - exp  : ±2·intervalle (6 -> [-12, 12])
    pub fn pour(fonction: Fonction, intervalle: u32) -> Result<Self, ErreurNoyau> {
        if fonction.est_trig() {
            let demi = f64::from(demi_intervalle_trig(intervalle)?);
            Ok(Self {
                x_min: -demi * PI,
                x_max: demi * PI,
            })
        } else {
            let borne = 2.0 * f64::from(intervalle);
            Ok(Self {
                x_min: -borne,
                x_max: borne,
            })
        }
    }

    pub fn largeur(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// `n` abscisses régulièrement espacées, bornes incluses.
    pub fn abscisses(&self, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.x_min],
            _ => {
                let pas = self.largeur() / (n - 1) as f64;
                (0..n)
                    .map(|k| {
                        if k == n - 1 {
                            self.x_max
                        } else {
                            self.x_min + pas * k as f64
                        }
                    })
                    .collect()
            }
        }
    }
}

/// intervalle/2 pour la fenêtre trig (pair et > 0, sinon erreur).
pub fn demi_intervalle_trig(intervalle: u32) -> Result<u32, ErreurNoyau> {
    if intervalle == 0 || intervalle % 2 == 1 {
        return Err(ErreurNoyau::IntervalleInvalide(intervalle));
    }
    Ok(intervalle / 2)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Courbe {
    pub etiquette: String,
    pub points: Vec<[f64; 2]>,
}

/// Producteur générique : un appel de `f` par abscisse, dans l’ordre.
pub fn echantillonner(abscisses: &[f64], f: impl Fn(f64) -> f64, etiquette: impl Into<String>) -> Courbe {
    Courbe {
        etiquette: etiquette.into(),
        points: abscisses.iter().map(|&x| [x, f(x)]).collect(),
    }
}

/// Courbe de référence (sin, cos, exp de la bibliothèque standard).
pub fn courbe_exacte(fonction: Fonction, fenetre: &Fenetre, n: usize) -> Courbe {
    echantillonner(&fenetre.abscisses(n), |x| fonction.exacte(x), fonction.etiquette())
}

/// Polynôme de Taylor de degré `degre`, un appel à l’évaluateur par point.
pub fn courbe_taylor(fonction: Fonction, degre: u32, fenetre: &Fenetre, n: usize) -> Courbe {
    echantillonner(
        &fenetre.abscisses(n),
        |x| fonction.taylor(degre, x),
        etiquette_taylor(degre),
    )
}

pub fn etiquette_taylor(degre: u32) -> String {
    format!("Série de Taylor degré {degre}")
}
