// ============================================================================
// GOSOCIAL CONFIRM APP - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica del workflow de confirmación
// - Services: SOLO comunicación API
// - Models: Resultado y efecto de la activación
// - Router: Tabla de rutas "/" y "/confirm/:token"
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod router;
mod services;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 GoSocial Confirm App - Rust Puro + MVVM");

    // Crear y renderizar app (falla si no existe el punto de montaje #app)
    let app = App::new()?;
    app.render()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Escuchar popstate para re-renderizar en back/forward del navegador.
    // Nota: Este listener global solo se registra UNA VEZ en el arranque.
    if let Some(win) = web_sys::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::Event| {
            log::info!("🔄 [MAIN] popstate recibido, re-renderizando app...");
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);

        win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM.
        closure.forget();
    }

    Ok(())
}

/// Función pública para re-renderizar la app según la ruta actual
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
        }
    });
}
