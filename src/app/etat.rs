//! src/app/etat.rs
//!
//! État de l’application (créé une fois au démarrage, modifié à chaque événement UI).
//!
//! Rôle : fonction choisie, degré, courbes en cache, panneau “évaluation exacte”.
//!
//! Contrats :
//! - Aucun widget ici (pas d’egui).
//! - Les courbes ne sont recalculées que sur changement (fonction / degré), pas à chaque frame.
//! - Bornes : degré dans [degre_min, degre_max], digits dans [0, DIGITS_MAX].

use crate::noyau::echantillons::{courbe_exacte, courbe_taylor, Courbe, Fenetre};
use crate::noyau::exact::{lire_rationnel, taylor_exact};
use crate::noyau::format::format_rat_pretty;
use crate::noyau::graduations::{graduations_x, graduations_y, Graduation};
use crate::noyau::lecture::{lecture_decimale, rationnel_vers_f64};
use crate::noyau::{ErreurNoyau, Fonction};
use crate::reglages::Reglages;

/// Précision ΣLocal par défaut (lecture décimale tronquée).
const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
const DIGITS_MAX: usize = 200;

/// Ce que le graphique affiche (recalculé sur changement).
#[derive(Clone, Debug, Default)]
pub struct Graphique {
    pub fenetre: Option<Fenetre>,
    pub courbe_fonction: Courbe,
    pub courbe_taylor: Courbe,
    pub graduations_x: Vec<Graduation>,
    pub graduations_y: Vec<Graduation>,
}

#[derive(Clone, Debug)]
pub struct AppTaylor {
    pub reglages: Reglages,

    // --- sélection ---
    pub fonction: Fonction,
    pub degre: u32,

    // --- graphique ---
    pub graphique: Graphique,

    // --- évaluation exacte en un point ---
    pub entree_x: String,
    pub exact: String,       // T_n(x) rationnel exact
    pub lecture: String,     // ΣLocal (décimal tronqué)
    pub flottant: String,    // même T_n(x) via l’évaluateur f64
    pub erreur: String,
    pub lecture_dispo: bool,
    pub digits: usize,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppTaylor {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppTaylor {
    pub fn new(reglages: Reglages) -> Self {
        let mut app = Self {
            degre: reglages.degre_min,
            reglages,
            fonction: Fonction::default(),
            graphique: Graphique::default(),
            entree_x: String::new(),
            exact: String::new(),
            lecture: String::new(),
            flottant: String::new(),
            erreur: String::new(),
            lecture_dispo: false,
            digits: DIGITS_DEFAUT,
            focus_entree: true,
        };
        app.actualiser();
        app
    }

    /* ------------------------ Sélection ------------------------ */

    /// Radio : change de fonction et remet le degré au minimum.
    pub fn choisir_fonction(&mut self, fonction: Fonction) {
        tracing::debug!(?fonction, "choix de la fonction");
        self.fonction = fonction;
        self.degre = self.reglages.degre_min;
        self.actualiser();
    }

    /// Curseur : nouveau degré (borné).
    pub fn set_degre(&mut self, degre: u32) {
        let d = degre.clamp(self.reglages.degre_min, self.reglages.degre_max);
        if d == self.degre {
            return;
        }
        tracing::debug!(degre = d, "changement de degré");
        self.degre = d;
        self.actualiser_taylor();
    }

    /// Recalcule tout le graphique (fenêtre, graduations, deux courbes).
    fn actualiser(&mut self) {
        let intervalle = self.reglages.intervalle;
        let n = self.reglages.echantillons;

        let calcul = Fenetre::pour(self.fonction, intervalle).and_then(|fenetre| {
            Ok(Graphique {
                fenetre: Some(fenetre),
                courbe_fonction: courbe_exacte(self.fonction, &fenetre, n),
                courbe_taylor: courbe_taylor(self.fonction, self.degre, &fenetre, n),
                graduations_x: graduations_x(self.fonction, intervalle)?,
                graduations_y: graduations_y(),
            })
        });

        match calcul {
            Ok(g) => {
                tracing::debug!(fonction = ?self.fonction, degre = self.degre, echantillons = n, "graphique recalculé");
                self.graphique = g;
            }
            Err(e) => {
                tracing::warn!(erreur = %e, "graphique indisponible");
                self.graphique = Graphique::default();
                self.set_erreur(e.to_string());
            }
        }
    }

    /// Seule la courbe de Taylor dépend du degré.
    fn actualiser_taylor(&mut self) {
        if let Some(fenetre) = self.graphique.fenetre {
            self.graphique.courbe_taylor =
                courbe_taylor(self.fonction, self.degre, &fenetre, self.reglages.echantillons);
        } else {
            self.actualiser();
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (sélection + entrée + résultats + digits).
    pub fn reset_total(&mut self) {
        self.entree_x.clear();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
        self.fonction = Fonction::default();
        self.degre = self.reglages.degre_min;
        self.actualiser();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree_x.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.lecture.clear();
        self.flottant.clear();
        self.erreur.clear();
        self.lecture_dispo = false;
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `exact` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.lecture.clear();
        self.lecture_dispo = false;
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultats(&mut self, exact: impl Into<String>, lecture: Option<String>, flottant: f64) {
        self.erreur.clear();
        self.exact = exact.into();
        self.flottant = format!("{flottant}");

        if let Some(v) = lecture {
            self.lecture_dispo = true;
            self.lecture = v;
        } else {
            self.lecture_dispo = false;
            self.lecture.clear();
        }

        self.focus_entree = true;
    }

    /// Garde-fou : limite digits.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        self.focus_entree = true;
    }

    /* ------------------------ Évaluation en un point ------------------------ */

    /// T_n(x) pour le x saisi : exact (rationnel), ΣLocal, et valeur f64 de l’évaluateur.
    pub fn evaluer_point(&mut self) {
        match self.calculer_point() {
            Ok((exact, lecture, flottant)) => self.set_resultats(exact, Some(lecture), flottant),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    fn calculer_point(&self) -> Result<(String, String, f64), ErreurNoyau> {
        let x = lire_rationnel(&self.entree_x)?;
        let t = taylor_exact(self.fonction, self.degre, &x);

        // Même x en f64 : ratio exact -> f64 (peut perdre des bits, jamais d’échec)
        let xf = rationnel_vers_f64(&x);
        let flottant = self.fonction.taylor(self.degre, xf);

        tracing::debug!(fonction = ?self.fonction, degre = self.degre, x = %self.entree_x.trim(), "évaluation ponctuelle");
        Ok((format_rat_pretty(&t), lecture_decimale(&t, self.digits), flottant))
    }
}
