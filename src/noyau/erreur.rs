// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Un débordement flottant (±inf, NaN) n’est PAS une erreur : c’est un résultat.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// Degré < 0 : seule entrée invalide pour l’évaluateur.
    #[error("degré invalide : {0} (le degré doit être ≥ 0)")]
    DegreNegatif(i64),

    #[error("degré trop grand : {0}")]
    DegreTropGrand(i64),

    /// Intervalle trig exprimé en multiples de π : pair et > 0.
    #[error("intervalle invalide : {0} (doit être un entier pair > 0)")]
    IntervalleInvalide(u32),

    #[error("nombre invalide : caractère inattendu dans {0:?}")]
    NombreInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("Entrée vide")]
    EntreeVide,
}
