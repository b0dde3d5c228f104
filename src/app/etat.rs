//! src/app/etat.rs
//!
//! État UI (sans vue) : entrée + curseur, zone de sortie, historique.
//!
//! Rôle : offrir les actions de la calculatrice (saisie au curseur, DEL, CLEAR,
//! =, ANS, flèches) sans aucune logique d'affichage.
//!
//! Contrats :
//! - Le noyau n'est appelé qu'à travers `noyau::parse`.
//! - Le curseur compte des caractères (pas des octets) et reste dans 0..=len.
//! - Toute modification de l'entrée relance l'aperçu ("soft submit").
//! - Seules les réponses valides (NaN compris) entrent dans l'historique.

use crate::noyau::format::{format_nombre, format_resultat, format_saisie};
use crate::noyau::jetons::{format_tokens, tokenize};
use crate::noyau::parse;

use super::historique::{Historique, HISTORIQUE_MAX};

/// Caractères acceptés depuis le clavier physique.
pub fn caractere_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')' | '^' | ' ')
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    pub curseur: usize, // position en caractères

    // --- sortie ---
    pub sortie: String,
    pub sortie_douce: bool, // true = aperçu (non validé)

    // --- mémoire ---
    pub historique: Historique,
    pub derniere_entree: Option<String>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_historique(HISTORIQUE_MAX)
    }
}

impl AppCalc {
    pub fn avec_historique(capacite: usize) -> Self {
        Self {
            entree: String::new(),
            curseur: 0,
            sortie: String::new(),
            sortie_douce: true, // au démarrage : rien de validé
            historique: Historique::new(capacite),
            derniere_entree: None,
        }
    }

    fn nb_car(&self) -> usize {
        self.entree.chars().count()
    }

    /// Position en caractères -> index en octets.
    fn octet(&self, pos: usize) -> usize {
        self.entree
            .char_indices()
            .nth(pos)
            .map(|(i, _)| i)
            .unwrap_or(self.entree.len())
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn inserer_car(&mut self, c: char) {
        tracing::trace!(caractere = %c, curseur = self.curseur, "saisie");
        let i = self.octet(self.curseur);
        self.entree.insert(i, c);
        self.curseur += 1;
        self.apercu();
    }

    pub fn inserer_texte(&mut self, s: &str) {
        tracing::trace!(texte = s, curseur = self.curseur, "saisie");
        let i = self.octet(self.curseur);
        self.entree.insert_str(i, s);
        self.curseur += s.chars().count();
        self.apercu();
    }

    /// DEL : efface le caractère avant le curseur.
    pub fn retour_arriere(&mut self) {
        if self.curseur == 0 {
            return;
        }
        let i = self.octet(self.curseur - 1);
        self.entree.remove(i);
        self.curseur -= 1;
        self.apercu();
    }

    /// Suppr : efface le caractère sous le curseur.
    pub fn supprimer(&mut self) {
        if self.curseur >= self.nb_car() {
            return;
        }
        let i = self.octet(self.curseur);
        self.entree.remove(i);
        self.apercu();
    }

    /* ------------------------ Curseur ------------------------ */

    pub fn curseur_gauche(&mut self) {
        self.curseur = self.curseur.saturating_sub(1);
    }

    pub fn curseur_droite(&mut self) {
        self.curseur = (self.curseur + 1).min(self.nb_car());
    }

    pub fn curseur_debut(&mut self) {
        self.curseur = 0;
    }

    pub fn curseur_fin(&mut self) {
        self.curseur = self.nb_car();
    }

    /* ------------------------ Effacements ------------------------ */

    pub fn effacer_entree(&mut self) {
        self.entree.clear();
        self.curseur = 0;
        self.apercu();
    }

    pub fn effacer_sortie(&mut self) {
        self.sortie.clear();
    }

    /// CLEAR : entrée + sortie.
    pub fn tout_effacer(&mut self) {
        self.effacer_entree();
        self.effacer_sortie();
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Aperçu à chaque modification : affiche la valeur si l'entrée est valide,
    /// sinon garde la dernière sortie (marquée "douce").
    pub fn apercu(&mut self) {
        if let Ok(v) = parse(&self.entree) {
            self.sortie = format_nombre(v);
        }
        self.sortie_douce = true;
    }

    /// "=" : affiche le résultat ou "Erreur" ; une réponse valide entre dans l'historique.
    pub fn soumettre(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        let r = parse(&self.entree);
        self.sortie = format_resultat(&r);

        if let Ok(v) = r {
            self.historique.ajouter(self.entree.clone(), v);
            tracing::debug!("{}", self.historique.resume());
            self.derniere_entree = Some(self.entree.clone());
            self.sortie_douce = false;
        }
    }

    /// ANS : insère la dernière réponse au curseur (si elle est finie).
    pub fn inserer_derniere_reponse(&mut self) {
        let Some(texte) = self
            .historique
            .derniere()
            .and_then(|e| format_saisie(e.reponse))
        else {
            return;
        };
        self.inserer_texte(&texte);
    }

    /// Clic sur la sortie : remet la dernière entrée validée dans le champ.
    pub fn rappeler_derniere_entree(&mut self) {
        let Some(e) = self.derniere_entree.clone() else {
            return;
        };
        self.effacer_sortie();
        self.entree = e;
        self.curseur_fin();
    }

    /// Ligne "Jetons" de la vue.
    pub fn jetons_courants(&self) -> String {
        format_tokens(&tokenize(&self.entree))
    }
}
