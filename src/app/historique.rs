//! src/app/historique.rs
//!
//! Historique circulaire à capacité fixe des réponses validées.
//! Quand il est plein, la nouvelle entrée écrase la plus ancienne.

use crate::noyau::format::format_nombre;

/// Capacité par défaut (surchargée par `--historique`).
pub const HISTORIQUE_MAX: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoEntree {
    pub entree: String,
    pub reponse: f64,
}

#[derive(Clone, Debug)]
pub struct Historique {
    capacite: usize,
    entrees: Vec<HistoEntree>,
    // index de la prochaine écriture (= plus ancienne entrée quand plein)
    prochain: usize,
}

impl Default for Historique {
    fn default() -> Self {
        Self::new(HISTORIQUE_MAX)
    }
}

impl Historique {
    pub fn new(capacite: usize) -> Self {
        let capacite = capacite.max(1);
        Self {
            capacite,
            entrees: Vec::with_capacity(capacite),
            prochain: 0,
        }
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn ajouter(&mut self, entree: impl Into<String>, reponse: f64) {
        let e = HistoEntree {
            entree: entree.into(),
            reponse,
        };
        if self.entrees.len() < self.capacite {
            self.entrees.push(e);
        } else {
            self.entrees[self.prochain] = e;
        }
        self.prochain = (self.prochain + 1) % self.capacite;
    }

    /// Entrée la plus récente.
    pub fn derniere(&self) -> Option<&HistoEntree> {
        self.iter_recentes().next()
    }

    /// Parcours de la plus récente à la plus ancienne.
    pub fn iter_recentes(&self) -> impl Iterator<Item = &HistoEntree> + '_ {
        let n = self.entrees.len();
        (0..n).map(move |i| {
            let idx = (self.prochain + self.capacite - 1 - i) % self.capacite;
            &self.entrees[idx]
        })
    }

    /// Une ligne par entrée, plus récente d'abord (journal debug).
    pub fn resume(&self) -> String {
        let mut s = String::from("historique:");
        for e in self.iter_recentes() {
            s.push_str(&format!("\n{} = {},", e.entree, format_nombre(e.reponse)));
        }
        s
    }
}
