// src/noyau/exact.rs
//
// Évaluation EXACTE (rationnels) des mêmes polynômes que serie.rs
// ---------------------------------------------------------------
// - même ensemble de termes (⌊n/2⌋+1 pour sin/cos, n+1 pour exp)
// - chaque terme se déduit du précédent par un facteur rationnel exact
//   exp : t_i = t_{i-1} · x / i
//   sin : t_i = t_{i-1} · (-x²) / ((2i)(2i+1))
//   cos : t_i = t_{i-1} · (-x²) / ((2i-1)(2i))
// - lire_rationnel : "3", "-1/2", "0.25", "+7" (pas de π : x doit être rationnel)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::ErreurNoyau;
use super::serie::{nb_termes_trig, Fonction};

/// T_n(x) exact pour x rationnel.
pub fn taylor_exact(fonction: Fonction, degre: u32, x: &BigRational) -> BigRational {
    match fonction {
        Fonction::Exponentielle => {
            let mut terme = BigRational::one();
            let mut somme = terme.clone();
            for i in 1..=u64::from(degre) {
                terme = terme * x / entier(i);
                somme += &terme;
            }
            somme
        }
        Fonction::Sinus | Fonction::Cosinus => {
            let moins_x2 = -(x * x);
            let (mut terme, decalage) = match fonction {
                Fonction::Sinus => (x.clone(), 1),
                _ => (BigRational::one(), 0),
            };
            let mut somme = terme.clone();
            for i in 1..nb_termes_trig(degre) {
                // p = 2i + decalage ; facteur (p-1)·p
                let p = 2 * i + decalage;
                terme = terme * &moins_x2 / (entier(p - 1) * entier(p));
                somme += &terme;
            }
            somme
        }
    }
}

fn entier(k: u64) -> BigRational {
    BigRational::from_integer(BigInt::from(k))
}

/* ------------------------ Lecture d’un rationnel ------------------------ */

/// Lit un rationnel écrit en entier, fraction (a/b) ou décimal (a.b).
pub fn lire_rationnel(texte: &str) -> Result<BigRational, ErreurNoyau> {
    let s: String = texte.chars().filter(|c| !c.is_whitespace()).collect();
    if s.is_empty() {
        return Err(ErreurNoyau::EntreeVide);
    }

    if let Some((num, den)) = s.split_once('/') {
        let n = lire_decimal(num, texte)?;
        let d = lire_decimal(den, texte)?;
        if d.is_zero() {
            return Err(ErreurNoyau::DivisionParZero);
        }
        return Ok(n / d);
    }

    lire_decimal(&s, texte)
}

/// "[-+]chiffres[.chiffres]" -> rationnel exact.
fn lire_decimal(s: &str, original: &str) -> Result<BigRational, ErreurNoyau> {
    let invalide = || ErreurNoyau::NombreInvalide(original.to_string());

    let (negatif, corps) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (ent, frac) = corps.split_once('.').unwrap_or((corps, ""));
    if ent.is_empty() && frac.is_empty() {
        return Err(invalide());
    }
    if !ent.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalide());
    }

    // "12.345" -> 12345 / 10^3
    let chiffres = format!("{ent}{frac}");
    let numer: BigInt = chiffres.parse().map_err(|_| invalide())?;
    let denom = BigInt::from(10).pow(frac.len() as u32);

    let r = BigRational::new(numer, denom);
    Ok(if negatif { -r } else { r })
}
