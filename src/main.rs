use quizzical::{QuizApp, TriviaConfig};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = TriviaConfig::from_env();
    log::info!("starting quizzical against {}", config.endpoint);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Quizzical")
            .with_inner_size([720.0, 860.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Quizzical",
        options,
        Box::new(move |_cc| Ok(Box::new(QuizApp::new(config)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            log::error!("canvas #the_canvas_id not found");
            return;
        };

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(QuizApp::new(TriviaConfig::from_env())))),
            )
            .await;
        if let Err(err) = started {
            log::error!("failed to start eframe: {err:?}");
        }
    });
}
