use super::*;
use std::sync::mpsc::{self, TryRecvError};

impl QuizApp {
    /// Lanza la petición de preguntas. Solo hay una en vuelo a la vez.
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn spawn_load(&mut self, ctx: &egui::Context) {
        let (tx, rx) = mpsc::channel::<LoadResult>();
        let config = self.config.clone();
        let loader = Arc::clone(&self.loader);
        let ctx = ctx.clone();

        // Hilo que hace la petición bloqueante y avisa para repintar
        std::thread::spawn(move || {
            let result = loader(&config);
            let _ = tx.send(result);
            ctx.request_repaint();
        });

        self.pending_load = Some(rx);
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn spawn_load(&mut self, ctx: &egui::Context) {
        let (tx, rx) = mpsc::channel::<LoadResult>();
        let config = self.config.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::data::load_questions(&config).await;
            let _ = tx.send(result);
            ctx.request_repaint();
        });

        self.pending_load = Some(rx);
    }

    /// Recoge el resultado de la carga si ya ha llegado.
    pub fn poll_load_result(&mut self) {
        let received = match self.pending_load.as_ref().map(Receiver::try_recv) {
            None | Some(Err(TryRecvError::Empty)) => return,
            Some(Ok(result)) => result,
            Some(Err(TryRecvError::Disconnected)) => Err(LoadError::Network(
                "question loader stopped without a result".into(),
            )),
        };

        self.pending_load = None;
        self.apply_load_result(received);
    }

    pub fn is_load_pending(&self) -> bool {
        self.pending_load.is_some()
    }
}
