// ============================================================================
// HOME VIEW - Vista raíz
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};

/// Renderizar vista raíz
pub fn render_home() -> Result<Element, JsValue> {
    log::info!("🎬 [HOME] render_home() llamado");

    let screen = ElementBuilder::new("div")?
        .class("home-screen")
        .build();

    let container = ElementBuilder::new("div")?
        .class("home-container")
        .build();

    let logo = ElementBuilder::new("div")?
        .class("home-logo")
        .text("💬")
        .build();

    let title = ElementBuilder::new("h1")?
        .text("GoSocial")
        .build();

    append_child(&container, &logo)?;
    append_child(&container, &title)?;
    append_child(&screen, &container)?;

    Ok(screen)
}
