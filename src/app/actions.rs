use super::*;
use crate::error::SessionError;
use crate::model::QUIZ_LENGTH;

impl QuizApp {
    /// Botón "Start quiz". Ignorado si ya hay una partida o una carga en curso.
    pub fn start_quiz(&mut self, ctx: &egui::Context) {
        if let Err(err) = self.session.start() {
            log::debug!("start ignored: {err}");
            return;
        }
        self.message.clear();
        self.warning.dismiss();
        self.spawn_load(ctx);
    }

    pub fn select_option(&mut self, index: usize, value: &str) {
        if let Err(err) = self.session.select_option(index, value) {
            log::warn!("selection rejected: {err}");
        }
    }

    /// Botón "Check answers". Con preguntas sin responder solo muestra el aviso.
    pub fn check_answers(&mut self, now: f64) {
        match self.session.grade() {
            Ok(score) => {
                log::info!("quiz graded: {score}/{QUIZ_LENGTH}");
                self.warning.dismiss();
            }
            Err(SessionError::Incomplete { answered, required }) => {
                log::debug!("grading blocked: {answered}/{required} answered");
                self.warning.raise(now);
            }
            Err(err) => log::warn!("grading rejected: {err}"),
        }
    }

    /// Botón "Play again": descarta el lote y pide uno nuevo.
    pub fn play_again(&mut self, ctx: &egui::Context) {
        if let Err(err) = self.session.replay() {
            log::warn!("replay rejected: {err}");
            return;
        }
        self.warning.dismiss();
        self.spawn_load(ctx);
    }

    pub fn apply_load_result(&mut self, result: LoadResult) {
        match self.session.finish_loading(result) {
            Ok(()) => {
                log::info!("loaded {} questions", self.session.batch().map_or(0, |b| b.len()));
                self.message.clear();
            }
            Err(err) => {
                log::warn!("could not load questions: {err}");
                self.message = format!("Could not load questions: {err}");
            }
        }
    }

    pub fn warning_visible(&self, now: f64) -> bool {
        self.warning.is_visible(now) && !self.session.can_grade()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Phase;
    use crate::model::fixtures;

    fn loaded_app() -> QuizApp {
        let mut app = QuizApp::default();
        app.session.start().unwrap();
        app.apply_load_result(Ok(fixtures::batch(["A", "B", "C", "D", "E"])));
        app
    }

    #[test]
    fn early_check_raises_the_warning_without_grading() {
        let mut app = loaded_app();
        app.select_option(0, "A");

        app.check_answers(3.0);
        assert_eq!(app.session.phase(), Phase::Answering);
        assert!(app.warning_visible(4.0));
        assert!(!app.warning_visible(5.5));
    }

    #[test]
    fn warning_hides_once_everything_is_answered() {
        let mut app = loaded_app();
        app.check_answers(0.0);
        for (i, c) in ["A", "B", "C", "D", "E"].iter().enumerate() {
            app.select_option(i, c);
        }
        assert!(!app.warning_visible(0.5));

        app.check_answers(0.6);
        assert_eq!(app.session.score(), Some(5));
    }

    #[test]
    fn failed_load_sets_a_message_and_goes_idle() {
        let mut app = QuizApp::default();
        app.session.start().unwrap();
        app.apply_load_result(Err(LoadError::NoResults));

        assert_eq!(app.session.phase(), Phase::Idle);
        assert!(app.session.batch().is_none());
        assert!(app.message.starts_with("Could not load questions"));
    }

    #[test]
    fn poll_without_pending_load_does_nothing() {
        let mut app = QuizApp::default();
        app.poll_load_result();
        assert!(!app.is_load_pending());
        assert_eq!(app.session.phase(), Phase::Idle);
    }
}
