//! Noyau Taylor
//!
//! Organisation interne :
//! - serie.rs        : évaluateur (sin/cos/exp tronquées, f64) + Fonction
//! - factorielle.rs  : n! exact (BigInt)
//! - exact.rs        : mêmes polynômes en rationnels exacts + lecture d’un rationnel
//! - lecture.rs      : ΣLocal (décimal tronqué)
//! - format.rs       : affichage rationnel / coeff·π
//! - echantillons.rs : fenêtre + courbes échantillonnées
//! - graduations.rs  : graduations des axes
//! - erreur.rs       : erreurs typées

pub mod echantillons;
pub mod erreur;
pub mod exact;
pub mod factorielle;
pub mod format;
pub mod graduations;
pub mod lecture;
pub mod serie;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurNoyau;
pub use serie::Fonction;
