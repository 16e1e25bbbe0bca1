// ============================================================================
// CONFIRMATION VIEW - Confirmación de cuenta vía token de la URL
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, on_click, window, ElementBuilder};
use crate::models::ActivationEffect;
use crate::router::{navigate, Route};
use crate::services::ApiClient;
use crate::viewmodels::ConfirmationViewModel;

/// Renderizar vista de confirmación con el token ligado de la ruta
pub fn render_confirmation(token: &str) -> Result<Element, JsValue> {
    log::info!("🎬 [CONFIRM] render_confirmation() llamado");

    let screen = ElementBuilder::new("div")?
        .class("confirmation-screen")
        .build();

    let title = ElementBuilder::new("h1")?
        .text("Confirmation Page")
        .build();

    let button = ElementBuilder::new("button")?
        .class("confirm-button")
        .id("confirm-button")?
        .attr("type", "button")?
        .text("Click to confirm")
        .build();

    // El click dispara el workflow. El botón no se deshabilita mientras hay
    // una petición en vuelo: clicks repetidos pueden emitir peticiones
    // solapadas con el mismo token.
    let token = token.to_string();
    on_click(&button, move |_e| {
        let token = token.clone();

        spawn_local(async move {
            let api = ApiClient::new(CONFIG.backend_url());
            let viewmodel = ConfirmationViewModel::new(api);

            // El efecto se ejecuta estrictamente después de observar la respuesta
            match viewmodel.confirm(&token).await {
                ActivationEffect::NavigateHome => {
                    navigate(&Route::Home);
                }
                ActivationEffect::NotifyFailure => {
                    if let Some(win) = window() {
                        win.alert_with_message("Failed to confirm").ok();
                    }
                }
            }
        });
    })?;

    append_child(&screen, &title)?;
    append_child(&screen, &button)?;

    Ok(screen)
}
