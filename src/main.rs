// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//   + mode sans fenêtre : `--eval <EXPR>` (même noyau, une ligne par expression)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d’entrée seulement (natif + web)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice moderne";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "calculatrice", version, about = TITRE_APP)]
struct Options {
    /// Évalue EXPR, affiche le résultat et quitte (répétable : une ligne par expression)
    #[arg(short = 'e', long = "eval", value_name = "EXPR")]
    eval: Vec<String>,

    /// Filtre du journal (ex: "debug"), prioritaire sur RUST_LOG
    #[arg(long, value_name = "FILTRE")]
    log: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    let options = Options::parse();
    installer_journal(options.log.as_deref());

    // Mode sans fenêtre
    if !options.eval.is_empty() {
        let tout_ok = evaluer_en_ligne(&options.eval);
        std::process::exit(if tout_ok { 0 } else { 1 });
    }

    tracing::info!(titre = TITRE_APP, "démarrage de l’interface");

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([400.0, 560.0])
            .with_min_inner_size([300.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        native,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

/// Journal sur stderr (stdout reste propre pour `--eval`).
/// Filtre : --log, sinon RUST_LOG, sinon "warn".
#[cfg(not(target_arch = "wasm32"))]
fn installer_journal(filtre: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    let filter = match filtre {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}

/// Évalue chaque expression, imprime le texte affiché (résultat OU message d’erreur).
/// Retourne false si au moins une évaluation a échoué.
#[cfg(not(target_arch = "wasm32"))]
fn evaluer_en_ligne(expressions: &[String]) -> bool {
    let mut tout_ok = true;
    for expr in expressions {
        match noyau::evaluer(expr) {
            Ok(r) => println!("{r}"),
            Err(e) => {
                tout_ok = false;
                println!("{e}");
            }
        }
    }
    tout_ok
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

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
