use egui::{CentralPanel, Context, Frame, ScrollArea, Ui};

/// Tamaño estimado del bloque que se centra en pantalla.
#[derive(Clone, Copy)]
pub struct PanelSize {
    pub height: f32,
    pub max_width: f32,
}

pub const WELCOME_PANEL: PanelSize = PanelSize { height: 220.0, max_width: 480.0 };
pub const LOADING_PANEL: PanelSize = PanelSize { height: 120.0, max_width: 200.0 };

/// Anchura máxima de la columna de preguntas.
pub const QUIZ_COLUMN_WIDTH: f32 = 640.0;

/// Portada y carga: un bloque fijo centrado en ambos ejes.
pub fn centered_panel(ctx: &Context, size: PanelSize, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - size.height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width().min(size.max_width));
                    inner(ui);
                });
        });
    });
}

/// Las cinco preguntas no caben siempre: columna centrada con scroll.
pub fn quiz_column(ctx: &Context, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(QUIZ_COLUMN_WIDTH);
                inner(ui);
                ui.add_space(16.0);
            });
        });
    });
}
