// src/app/warning.rs

/// Segundos que se muestra el aviso de "responde todo primero".
pub const WARNING_SECONDS: f64 = 2.0;

/// Aviso que se oculta solo. El tiempo viene del reloj de frames de egui.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransientWarning {
    visible_until: Option<f64>,
}

impl TransientWarning {
    /// Volver a lanzarlo reemplaza el plazo anterior.
    pub fn raise(&mut self, now: f64) {
        self.visible_until = Some(now + WARNING_SECONDS);
    }

    pub fn is_visible(&self, now: f64) -> bool {
        self.remaining(now).is_some()
    }

    /// Tiempo hasta ocultarse, para pedir el repintado.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.visible_until
            .map(|until| until - now)
            .filter(|left| *left > 0.0)
    }

    pub fn dismiss(&mut self) {
        self.visible_until = None;
    }
}
