// src/noyau/graduations.rs
//
// Graduations des axes
// --------------------
// - trig : tous les π/2 sur [-kπ, kπ] => 2·intervalle + 1 graduations (-3π, -5π/2, …, 3π)
// - exp  : entiers pairs sur la fenêtre
// - y    : entiers -5..=5 (c’est aussi la plage visible)

use num_bigint::BigInt;
use num_rational::BigRational;
use std::f64::consts::FRAC_PI_2;

use super::echantillons::{demi_intervalle_trig, Fenetre};
use super::erreur::ErreurNoyau;
use super::format::format_coeff_pi;
use super::serie::Fonction;

/// Plage verticale visible.
pub const Y_MIN: f64 = -5.0;
pub const Y_MAX: f64 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Graduation {
    pub valeur: f64,
    pub etiquette: String,
}

/// Graduations x selon la famille de fonction.
pub fn graduations_x(fonction: Fonction, intervalle: u32) -> Result<Vec<Graduation>, ErreurNoyau> {
    if fonction.est_trig() {
        graduations_x_trig(intervalle)
    } else {
        Ok(graduations_x_exp(&Fenetre::pour(fonction, intervalle)?))
    }
}

/// Multiples de π/2 : valeur k·π/2, étiquette “joli π” via un rationnel exact k/2.
pub fn graduations_x_trig(intervalle: u32) -> Result<Vec<Graduation>, ErreurNoyau> {
    let demi = i64::from(demi_intervalle_trig(intervalle)?);

    Ok((-2 * demi..=2 * demi)
        .map(|k| Graduation {
            valeur: k as f64 * FRAC_PI_2,
            etiquette: format_coeff_pi(&BigRational::new(BigInt::from(k), BigInt::from(2))),
        })
        .collect())
}

pub fn graduations_x_exp(fenetre: &Fenetre) -> Vec<Graduation> {
    let debut = (fenetre.x_min / 2.0).ceil() as i64;
    let fin = (fenetre.x_max / 2.0).floor() as i64;
    (debut..=fin)
        .map(|k| Graduation {
            valeur: (2 * k) as f64,
            etiquette: format!("{}", 2 * k),
        })
        .collect()
}

pub fn graduations_y() -> Vec<Graduation> {
    (Y_MIN as i64..=Y_MAX as i64)
        .map(|k| Graduation {
            valeur: k as f64,
            etiquette: format!("{k}"),
        })
        .collect()
}
