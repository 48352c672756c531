//! Tests fuzz safe : robustesse + déterminisme + réentrance, limites contrôlées.
//!
//! But : marteler l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - degrés et |x| bornés, sauf une campagne “extrêmes” (débordement accepté)
//! - budget temps global
//! - invariant clé : mêmes (n, x) => même résultat, quel que soit le thread

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;

use super::exact::taylor_exact;
use super::lecture::rationnel_vers_f64;
use super::echantillons::{courbe_taylor, Fenetre};
use super::serie::{cosinus_taylor, exp_taylor, sinus_taylor, Fonction};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    /// Réel uniforme dans [-borne, borne].
    fn reel(&mut self, borne: f64) -> f64 {
        let u = f64::from(self.next_u32()) / f64::from(u32::MAX);
        (2.0 * u - 1.0) * borne
    }
    fn fonction(&mut self) -> Fonction {
        Fonction::TOUTES[self.pick(3) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn memes_bits(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2_000 {
        let f = rng.fonction();
        let n = rng.pick(21);
        let x = rng.reel(4.0 * std::f64::consts::PI);

        let a = f.taylor(n, x);
        let b = f.taylor(n, x);
        assert!(memes_bits(a, b), "{f:?} n={n} x={x}: {a} != {b}");
        assert!(a.is_finite(), "{f:?} n={n} x={x}: {a}");
        budget(t0, max);
    }
}

#[test]
fn fuzz_reentrance_threads() {
    // Mêmes échantillons évalués sur 4 threads : bits identiques au calcul séquentiel.
    let mut rng = Rng::new(42);
    let cas: Vec<(Fonction, u32, f64)> = (0..400)
        .map(|_| (rng.fonction(), rng.pick(21), rng.reel(10.0)))
        .collect();

    let reference: Vec<f64> = cas.iter().map(|&(f, n, x)| f.taylor(n, x)).collect();

    std::thread::scope(|s| {
        let poignees: Vec<_> = (0..4)
            .map(|_| s.spawn(|| cas.iter().map(|&(f, n, x)| f.taylor(n, x)).collect::<Vec<f64>>()))
            .collect();

        for p in poignees {
            let obtenu = p.join().expect("thread évaluateur");
            assert_eq!(obtenu.len(), reference.len());
            for (k, (a, b)) in obtenu.iter().zip(&reference).enumerate() {
                assert!(memes_bits(*a, *b), "cas {k}: {a} != {b}");
            }
        }
    });
}

#[test]
fn fuzz_regle_des_paires() {
    let mut rng = Rng::new(7);
    for _ in 0..1_000 {
        let n = 2 * rng.pick(15);
        let x = rng.reel(20.0);
        for f in [Fonction::Sinus, Fonction::Cosinus] {
            assert!(memes_bits(f.taylor(n, x), f.taylor(n + 1, x)), "{f:?} n={n} x={x}");
        }
    }
}

#[test]
fn fuzz_exact_contre_flottant() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(2024);

    for _ in 0..300 {
        // x = p/q petit rationnel
        let p = i64::from(rng.pick(81)) - 40;
        let q = i64::from(rng.pick(12)) + 1;
        let x = BigRational::new(BigInt::from(p), BigInt::from(q));
        let xf = rationnel_vers_f64(&x);

        let f = rng.fonction();
        let n = rng.pick(21);

        let exact = rationnel_vers_f64(&taylor_exact(f, n, &x));
        let flottant = f.taylor(n, xf);

        // |x| ≤ 40 : termes intermédiaires énormes possibles => tolérance relative à la taille des termes
        let echelle = xf.abs().max(1.0).powi(n as i32).max(exact.abs()).max(1.0);
        assert!(
            (exact - flottant).abs() <= 1e-12 * echelle,
            "{f:?} n={n} x={p}/{q}: exact={exact} flottant={flottant}"
        );
        budget(t0, max);
    }
}

#[test]
fn fuzz_extremes_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(99);

    for _ in 0..60 {
        let f = rng.fonction();
        let n = rng.pick(200);
        let x = match rng.pick(4) {
            0 => rng.reel(1e6),
            1 => rng.reel(1e300),
            2 => rng.reel(1e-300),
            _ => rng.reel(50.0),
        };
        // débordement accepté : on vérifie seulement l’absence de panique et le déterminisme
        let a = f.taylor(n, x);
        assert!(memes_bits(a, f.taylor(n, x)));
        budget(t0, max);
    }
}

#[test]
fn fuzz_grand_degre_cout_lineaire() {
    // degré 2000 : une évaluation et une courbe de 100 points restent rapides
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    assert!((exp_taylor(2000, 1.0) - std::f64::consts::E).abs() < 1e-14);
    budget(t0, max);
    assert!(sinus_taylor(2000, 1.0).is_finite());
    assert!(cosinus_taylor(2000, 1.0).is_finite());
    budget(t0, max);

    let mut rng = Rng::new(2000);
    for _ in 0..20 {
        let _ = exp_taylor(2000, rng.reel(10.0));
    }
    budget(t0, max);

    let fenetre = Fenetre::pour(Fonction::Exponentielle, 6).unwrap();
    let courbe = courbe_taylor(Fonction::Exponentielle, 2000, &fenetre, 100);
    assert_eq!(courbe.points.len(), 100);
    budget(t0, max);
}
