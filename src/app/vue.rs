// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : saisie filtrée, Enter / "=" valident, Backspace / Suppr, flèches, Début / Fin
// - Tactile : pavé complet (chiffres, opérateurs, DEL, CLEAR, ANS, ←, →, =)
// - Sortie "douce" (aperçu) grisée tant que rien n'est validé
//
// Note :
// - Pas de TextEdit : le curseur appartient à l'état (etat.rs), la vue le dessine.
// - Escape est géré dans app.rs (raccourci global).

use eframe::egui;

use super::etat::{caractere_autorise, AppCalc};
use crate::noyau::format::format_nombre;

/// Marque du curseur dans l'affichage de l'entrée.
const CARET: char = '▏';

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_clavier(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(crate::TITRE_APP);
                ui.add_space(6.0);

                self.ui_entree(ui);
                ui.add_space(6.0);
                self.ui_sortie(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(t) => {
                    for c in t.chars() {
                        if c == '=' {
                            self.soumettre();
                        } else if caractere_autorise(c) {
                            self.inserer_car(c);
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.soumettre(),
                    egui::Key::Backspace => self.retour_arriere(),
                    egui::Key::Delete => self.supprimer(),
                    egui::Key::ArrowLeft => self.curseur_gauche(),
                    egui::Key::ArrowRight => self.curseur_droite(),
                    egui::Key::Home => self.curseur_debut(),
                    egui::Key::End => self.curseur_fin(),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let avant: String = self.entree.chars().take(self.curseur).collect();
        let apres: String = self.entree.chars().skip(self.curseur).collect();
        let texte = egui::RichText::new(format!("{avant}{CARET}{apres}"))
            .monospace()
            .size(20.0);

        Self::cadre(ui, |ui| {
            ui.label(texte);
        });

        ui.horizontal(|ui| {
            ui.label("Jetons :");
            ui.monospace(self.jetons_courants());
        });
    }

    fn ui_sortie(&mut self, ui: &mut egui::Ui) {
        let mut texte = egui::RichText::new(&self.sortie).monospace().size(24.0);
        if self.sortie_douce {
            texte = texte.weak();
        }

        let resp = Self::cadre(ui, |ui| {
            ui.add(egui::Label::new(texte).sense(egui::Sense::click()))
        });

        if resp
            .on_hover_text("Clic : rappeler la dernière entrée")
            .clicked()
        {
            self.rappeler_derniere_entree();
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7");
                self.bouton_insert(ui, "8");
                self.bouton_insert(ui, "9");
                self.bouton_action(ui, "DEL", "Efface le caractère avant le curseur", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4");
                self.bouton_insert(ui, "5");
                self.bouton_insert(ui, "6");
                self.bouton_insert(ui, "/");
                ui.end_row();

                self.bouton_insert(ui, "1");
                self.bouton_insert(ui, "2");
                self.bouton_insert(ui, "3");
                self.bouton_insert(ui, "*");
                ui.end_row();

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                self.bouton_insert(ui, "^");
                self.bouton_insert(ui, "-");
                ui.end_row();

                self.bouton_insert(ui, "(");
                self.bouton_insert(ui, ")");
                self.bouton_action(ui, "ANS", "Insère la dernière réponse", Action::Ans);
                self.bouton_insert(ui, "+");
                ui.end_row();

                self.bouton_action(ui, "←", "Curseur à gauche", Action::Gauche);
                self.bouton_action(ui, "→", "Curseur à droite", Action::Droite);
                self.bouton_action(ui, "CLEAR", "Efface entrée + sortie", Action::ToutEffacer);
                self.bouton_action(ui, "=", "Évaluer", Action::Soumettre);
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new(format!(
            "Historique ({}/{})",
            self.historique.len(),
            self.historique.capacite()
        ))
        .default_open(true)
        .show(ui, |ui| {
            if self.historique.is_empty() {
                ui.weak("vide");
            }
            for e in self.historique.iter_recentes() {
                ui.monospace(format!("{} = {}", e.entree, format_nombre(e.reponse)));
            }
        });
    }

    fn cadre<R>(ui: &mut egui::Ui, contenu: impl FnOnce(&mut egui::Ui) -> R) -> R {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                contenu(ui)
            })
            .inner
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([64.0, 36.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Backspace => self.retour_arriere(),
                Action::ToutEffacer => self.tout_effacer(),
                Action::Soumettre => self.soumettre(),
                Action::Ans => self.inserer_derniere_reponse(),
                Action::Gauche => self.curseur_gauche(),
                Action::Droite => self.curseur_droite(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str) {
        let resp = ui.add_sized([64.0, 36.0], egui::Button::new(texte));
        if resp.clicked() {
            self.inserer_texte(texte);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Backspace,
    ToutEffacer,
    Soumettre,
    Ans,
    Gauche,
    Droite,
}
