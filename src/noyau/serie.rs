//! Noyau — polynômes de Taylor (Maclaurin) tronqués
//!
//! - exp : T_n(x) = Σ_{i=0}^{n} x^i / i!
//! - sin : T_n(x) = Σ_{i=0}^{⌊n/2⌋} (-1)^i · x^(2i+1) / (2i+1)!
//! - cos : T_n(x) = Σ_{i=0}^{⌊n/2⌋} (-1)^i · x^(2i) / (2i)!
//!
//! Contrats :
//! - fonctions pures (aucun état partagé) => appelables depuis n’importe quel thread
//! - sin/cos : ⌊n/2⌋ + 1 termes (n et n+1 donnent le même polynôme quand n est pair)
//! - factorielle calculée exactement (BigInt) puis convertie en f64 pour la division
//! - factorielle entretenue d’un terme à l’autre : coût linéaire en n
//! - somme par puissances croissantes
//!
//! Domaine pratique (f64) : 170! est la dernière factorielle finie. Au-delà, les termes
//! valent x^p/inf = 0, ou NaN si x^p déborde aussi. Ce n’est pas une erreur.

use super::erreur::ErreurNoyau;
use super::factorielle::Factorielles;

/// Les trois fonctions cibles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Fonction {
    #[default]
    Sinus,
    Cosinus,
    Exponentielle,
}

impl Fonction {
    /// Ordre d’affichage des boutons radio.
    pub const TOUTES: [Fonction; 3] = [Fonction::Sinus, Fonction::Cosinus, Fonction::Exponentielle];

    pub fn etiquette(self) -> &'static str {
        match self {
            Fonction::Sinus => "sin(x)",
            Fonction::Cosinus => "cos(x)",
            Fonction::Exponentielle => "e^(x)",
        }
    }

    pub fn est_trig(self) -> bool {
        matches!(self, Fonction::Sinus | Fonction::Cosinus)
    }

    /// Valeur “vraie” (bibliothèque standard), pour la courbe de référence.
    pub fn exacte(self, x: f64) -> f64 {
        match self {
            Fonction::Sinus => x.sin(),
            Fonction::Cosinus => x.cos(),
            Fonction::Exponentielle => x.exp(),
        }
    }

    /// T_n(x) pour la fonction choisie.
    pub fn taylor(self, degre: u32, x: f64) -> f64 {
        match self {
            Fonction::Sinus => sinus_taylor(degre, x),
            Fonction::Cosinus => cosinus_taylor(degre, x),
            Fonction::Exponentielle => exp_taylor(degre, x),
        }
    }
}

/// Entrée “vérifiée” : un degré signé devient u32, ou erreur si négatif.
pub fn degre_valide(n: i64) -> Result<u32, ErreurNoyau> {
    if n < 0 {
        return Err(ErreurNoyau::DegreNegatif(n));
    }
    u32::try_from(n).map_err(|_| ErreurNoyau::DegreTropGrand(n))
}

/// Nombre de termes pour sin/cos : ⌊n/2⌋ + 1.
pub fn nb_termes_trig(degre: u32) -> u64 {
    u64::from(degre / 2) + 1
}

/// e^x tronquée : Σ_{i=0}^{n} x^i / i!
pub fn exp_taylor(degre: u32, x: f64) -> f64 {
    let mut fact = Factorielles::new();
    let mut valeur = 0.0;
    for i in 0..=u64::from(degre) {
        valeur += puissance(x, i) / fact.jusqua(i);
    }
    valeur
}

/// sin(x) tronquée : puissances impaires seulement.
pub fn sinus_taylor(degre: u32, x: f64) -> f64 {
    let mut fact = Factorielles::new();
    let mut valeur = 0.0;
    for i in 0..nb_termes_trig(degre) {
        let p = 2 * i + 1;
        valeur += (signe(i) / fact.jusqua(p)) * puissance(x, p);
    }
    valeur
}

/// cos(x) tronquée : puissances paires seulement.
pub fn cosinus_taylor(degre: u32, x: f64) -> f64 {
    let mut fact = Factorielles::new();
    let mut valeur = 0.0;
    for i in 0..nb_termes_trig(degre) {
        let p = 2 * i;
        valeur += (signe(i) / fact.jusqua(p)) * puissance(x, p);
    }
    valeur
}

/* ------------------------ Outils ------------------------ */

/// (-1)^i
fn signe(i: u64) -> f64 {
    if i % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// x^p, p entier (powi tant que p tient dans un i32).
fn puissance(x: f64, p: u64) -> f64 {
    match i32::try_from(p) {
        Ok(p) => x.powi(p),
        Err(_) => x.powf(p as f64),
    }
}
