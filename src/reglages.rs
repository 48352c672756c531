// src/reglages.rs
//
// Réglages (fichier TOML optionnel, natif seulement)
// --------------------------------------------------
// - fichier absent  => valeurs par défaut
// - fichier invalide => avertissement + valeurs par défaut (jamais bloquant)
// - validation : degrés dans [0, DEGRE_LIMITE] et ordonnés, intervalle pair dans ]0, INTERVALLE_LIMITE],
//   échantillons dans [2, ECHANTILLONS_LIMITE]

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::echantillons::demi_intervalle_trig;
use crate::noyau::serie::degre_valide;
use crate::noyau::ErreurNoyau;

/// Nom du fichier cherché dans le répertoire courant.
pub const FICHIER_REGLAGES: &str = "taylor.toml";

const DEGRE_MIN_DEFAUT: i64 = 1;
const DEGRE_MAX_DEFAUT: i64 = 20;
const INTERVALLE_DEFAUT: u32 = 6;
const ECHANTILLONS_DEFAUT: usize = 100;

/// 170! : dernière factorielle finie en f64.
const DEGRE_LIMITE: u32 = 170;
const INTERVALLE_LIMITE: u32 = 100;
const ECHANTILLONS_LIMITE: usize = 10_000;

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture de {chemin} impossible : {source}")]
    Lecture {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("syntaxe TOML invalide : {0}")]
    Syntaxe(#[from] toml::de::Error),

    #[error("réglage invalide : {0}")]
    Invalide(String),

    #[error(transparent)]
    Noyau(#[from] ErreurNoyau),
}

/// Forme “brute” du fichier (avant validation).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ReglagesBruts {
    degre_min: i64,
    degre_max: i64,
    intervalle: u32,
    echantillons: usize,
}

impl Default for ReglagesBruts {
    fn default() -> Self {
        Self {
            degre_min: DEGRE_MIN_DEFAUT,
            degre_max: DEGRE_MAX_DEFAUT,
            intervalle: INTERVALLE_DEFAUT,
            echantillons: ECHANTILLONS_DEFAUT,
        }
    }
}

/// Réglages validés.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reglages {
    pub degre_min: u32,
    pub degre_max: u32,
    pub intervalle: u32,
    pub echantillons: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            degre_min: DEGRE_MIN_DEFAUT as u32,
            degre_max: DEGRE_MAX_DEFAUT as u32,
            intervalle: INTERVALLE_DEFAUT,
            echantillons: ECHANTILLONS_DEFAUT,
        }
    }
}

impl Reglages {
    fn valider(b: ReglagesBruts) -> Result<Self, ErreurReglages> {
        let degre_min = degre_valide(b.degre_min)?;
        let degre_max = degre_valide(b.degre_max)?;
        if degre_max > DEGRE_LIMITE {
            return Err(ErreurReglages::Invalide(format!(
                "degre_max = {degre_max} (au plus {DEGRE_LIMITE})"
            )));
        }
        if degre_max < degre_min {
            return Err(ErreurReglages::Invalide(format!(
                "degre_max ({degre_max}) < degre_min ({degre_min})"
            )));
        }

        demi_intervalle_trig(b.intervalle)?;
        if b.intervalle > INTERVALLE_LIMITE {
            return Err(ErreurReglages::Invalide(format!(
                "intervalle = {} (au plus {INTERVALLE_LIMITE})",
                b.intervalle
            )));
        }

        if !(2..=ECHANTILLONS_LIMITE).contains(&b.echantillons) {
            return Err(ErreurReglages::Invalide(format!(
                "echantillons = {} (entre 2 et {ECHANTILLONS_LIMITE})",
                b.echantillons
            )));
        }

        Ok(Self {
            degre_min,
            degre_max,
            intervalle: b.intervalle,
            echantillons: b.echantillons,
        })
    }

    /// Parse + valide un texte TOML (clés absentes => défaut).
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        let bruts: ReglagesBruts = toml::from_str(texte)?;
        Self::valider(bruts)
    }

    /// Lit un fichier ; `Ok(None)` s’il n’existe pas.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger(chemin: &std::path::Path) -> Result<Option<Self>, ErreurReglages> {
        let texte = match std::fs::read_to_string(chemin) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ErreurReglages::Lecture {
                    chemin: chemin.display().to_string(),
                    source,
                })
            }
        };
        Self::depuis_toml(&texte).map(Some)
    }

    /// Point d’entrée de main.rs : jamais d’échec, au pire les défauts.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger_ou_defaut() -> Self {
        let chemin = std::path::Path::new(FICHIER_REGLAGES);
        match Self::charger(chemin) {
            Ok(Some(r)) => {
                tracing::info!(fichier = FICHIER_REGLAGES, ?r, "réglages chargés");
                r
            }
            Ok(None) => {
                tracing::debug!(fichier = FICHIER_REGLAGES, "pas de fichier de réglages, défauts");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(fichier = FICHIER_REGLAGES, erreur = %e, "réglages ignorés, défauts");
                Self::default()
            }
        }
    }
}
