// src/main.rs
//
// Calculatrice — point d'entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : ligne de commande (clap) + journal (tracing)
//     - sans option          : fenêtre eframe
//     - --expr "<EXPR>"      : évaluation sans fenêtre, code de sortie 0/1
//     - --auto-test          : batterie de régression, code de sortie 0/1
// - WEB  (wasm32)            : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::process::ExitCode;

    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use crate::app::historique::HISTORIQUE_MAX;
    use crate::noyau::banc::{batterie_maths, executer_batterie};
    use crate::noyau::format::format_resultat;
    use crate::noyau::parse;

    /// Filtre de journal par défaut (si ni --log ni RUST_LOG).
    const LOG_DEFAUT: &str = "warn";

    #[derive(Parser, Debug)]
    #[command(version, about = "Calculatrice : + - * / ^ ( ), décimaux, multiplication implicite")]
    pub struct Args {
        /// Évalue une expression et affiche le résultat (pas de fenêtre)
        #[arg(short, long, value_name = "EXPR", allow_hyphen_values = true)]
        pub expr: Option<String>,

        /// Lance la batterie de tests maths intégrée (pas de fenêtre)
        #[arg(long, conflicts_with = "expr")]
        pub auto_test: bool,

        /// Avec --auto-test : un échec attendu doit réellement échouer
        #[arg(long, requires = "auto_test")]
        pub strict: bool,

        /// Nombre de réponses conservées dans l'historique
        #[arg(long, value_name = "N", default_value_t = HISTORIQUE_MAX)]
        pub historique: usize,

        /// Filtre tracing (ex: "debug", "calculatrice_rd=trace") ; prioritaire sur RUST_LOG
        #[arg(long, value_name = "FILTRE")]
        pub log: Option<String>,
    }

    pub fn installer_journal(filtre: Option<&str>) {
        let filtre = match filtre {
            Some(f) => EnvFilter::new(f),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LOG_DEFAUT)),
        };
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Mode sans fenêtre. None => ouvrir la fenêtre.
    pub fn executer_sans_fenetre(args: &Args) -> Option<ExitCode> {
        if let Some(expr) = &args.expr {
            let r = parse(expr);
            println!("{}", format_resultat(&r));
            if let Err(e) = &r {
                tracing::info!(%e, "échec");
            }
            return Some(if r.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }

        if args.auto_test {
            let rapport = executer_batterie(&batterie_maths(), args.strict);
            println!(
                "{}/{} tests réussis",
                rapport.total - rapport.echecs.len(),
                rapport.total
            );
            for c in &rapport.echecs {
                println!(
                    "  échec: {:?} -> {}",
                    c.expression,
                    format_resultat(&c.obtenu)
                );
            }
            return Some(if rapport.tout_reussi() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }

        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<std::process::ExitCode> {
    use clap::Parser;

    let args = natif::Args::parse();
    natif::installer_journal(args.log.as_deref());

    if let Some(code) = natif::executer_sans_fenetre(&args) {
        return Ok(code);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([360.0, 640.0])
            .with_min_inner_size([320.0, 520.0]),
        ..Default::default()
    };

    let capacite = args.historique;
    tracing::info!(capacite, "ouverture de la fenêtre");

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::avec_historique(capacite)))),
    )?;
    Ok(std::process::ExitCode::SUCCESS)
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};
    use crate::noyau::banc::{batterie_maths, executer_batterie};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d'entrée automatique au chargement de la page.
    /// - Fixe le titre de l'onglet
    /// - Passe la batterie de régression (le noyau doit être sain avant d'ouvrir l'UI)
    /// - Démarre eframe WebRunner sur le <canvas>
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;
        d.set_title(TITRE_APP);

        let rapport = executer_batterie(&batterie_maths(), false);
        if !rapport.tout_reussi() {
            return Err(js_err("batterie de tests maths en échec"));
        }

        let canvas: HtmlCanvasElement = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l'élément trouvé n'est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
