use crate::ui::layout::{LOADING_PANEL, centered_panel};
use egui::{Context, Spinner};

pub fn ui_loading(ctx: &Context) {
    // Sin controles mientras llega el lote
    centered_panel(ctx, LOADING_PANEL, |ui| {
        ui.add(Spinner::new().size(48.0));
    });
}
