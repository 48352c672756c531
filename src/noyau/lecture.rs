// src/noyau/lecture.rs
//
// ΣLocal : lecture décimale TRONQUÉE d’un rationnel exact.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive};

use super::factorielle::vers_f64;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// r -> entier “scalé” = r · 10^digits, tronqué vers zéro.
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/// Lecture ΣLocal d’un rationnel (troncature, pas d’arrondi).
pub fn lecture_decimale(r: &BigRational, digits: usize) -> String {
    scaled_to_decimal(rational_scaled(r, digits), digits)
}

/// Rationnel -> f64 le plus proche (±inf / 0 hors domaine).
pub fn rationnel_vers_f64(r: &BigRational) -> f64 {
    r.to_f64()
        .unwrap_or_else(|| vers_f64(r.numer()) / vers_f64(r.denom()))
}
