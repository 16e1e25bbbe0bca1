// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::Route;
use crate::views::{render_confirmation, render_home};

/// Aplicación principal
pub struct App {
    root: Element,
}

impl App {
    /// Crear nueva aplicación. Falla si no existe el punto de montaje #app
    /// (precondición de entorno, no recuperable).
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        Ok(Self { root })
    }

    /// Renderizar la vista que corresponde a la ruta actual
    pub fn render(&self) -> Result<(), JsValue> {
        let route = Route::current();
        log::info!("🧭 [APP] Renderizando ruta: {:?}", route);

        let view = match &route {
            Route::Home => render_home()?,
            Route::Confirm { token } => render_confirmation(token)?,
        };

        set_inner_html(&self.root, "");
        append_child(&self.root, &view)?;

        Ok(())
    }
}
