// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/* ------------------------ Helpers rationnels ------------------------ */

/// "n" si entier, sinon "n/d".
pub fn format_rat_pretty(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/* ------------------------ π “joli” ------------------------ */

/// coeff*π : affichage joli (π/2, 3π/2, -2π, etc.)
pub fn format_coeff_pi(coeff: &BigRational) -> String {
    let n = coeff.numer();
    let d = coeff.denom();

    if coeff.is_zero() {
        return "0".to_string();
    }

    let un = BigInt::one();
    let moins_un = BigInt::from(-1);

    // ±π, kπ
    if d.is_one() {
        return if n == &un {
            "π".to_string()
        } else if n == &moins_un {
            "-π".to_string()
        } else {
            format!("{n}π")
        };
    }

    // ±π/d
    if n == &un {
        return format!("π/{d}");
    }
    if n == &moins_un {
        return format!("-π/{d}");
    }

    // kπ/d
    format!("{n}π/{d}")
}
