// src/noyau/factorielle.rs
//
// Factorielle EXACTE (BigInt), convertie en f64 seulement au moment de la division.
// - n! reste exact quel que soit n
// - en f64 : 170! est la dernière factorielle finie ; au-delà => +inf

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

/// n! exact, calculé depuis 1 (référence des tests).
#[cfg(test)]
pub fn factorielle(n: u64) -> BigInt {
    let mut acc = BigInt::one();
    for k in 2..=n {
        acc *= k;
    }
    acc
}

/// Conversion “dernière minute” vers f64 (+inf si hors domaine).
pub fn vers_f64(n: &BigInt) -> f64 {
    n.to_f64().unwrap_or(f64::INFINITY)
}

/// p! pour p croissant, en f64, sans recalculer depuis 1 à chaque terme.
///
/// Le produit reste exact (BigInt) tant que sa conversion est finie ; une fois
/// +inf atteint, toutes les factorielles suivantes valent +inf aussi.
pub struct Factorielles {
    p: u64,
    exacte: BigInt,
    valeur: f64,
}

impl Factorielles {
    pub fn new() -> Self {
        Self {
            p: 0,
            exacte: BigInt::one(),
            valeur: 1.0,
        }
    }

    /// Avance jusqu’à q! (q ≥ dernier q demandé) et renvoie sa conversion f64.
    pub fn jusqua(&mut self, q: u64) -> f64 {
        while self.p < q && self.valeur.is_finite() {
            self.p += 1;
            self.exacte *= self.p;
            self.valeur = vers_f64(&self.exacte);
        }
        self.valeur
    }
}

impl Default for Factorielles {
    fn default() -> Self {
        Self::new()
    }
}
