// ============================================================================
// ROUTER - Tabla de rutas de la aplicación
// ============================================================================
// Dos rutas, construidas una vez a partir del pathname actual:
//   "/"                -> vista raíz
//   "/confirm/:token"  -> vista de confirmación
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;

use crate::dom::window;

/// Ruta de la aplicación con sus parámetros ligados
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Confirm { token: String },
}

impl Route {
    /// Parsea un pathname comparando en orden de declaración.
    /// El segmento `:token` se liga verbatim; vacío si falta.
    /// No hay vista 404: los paths no contemplados caen en la raíz.
    pub fn from_path(path: &str) -> Route {
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        match segments.next() {
            None => Route::Home,
            Some("confirm") => Route::Confirm {
                token: segments.next().unwrap_or("").to_string(),
            },
            Some(_) => Route::Home,
        }
    }

    /// Pathname canónico de la ruta
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Confirm { token } => format!("/confirm/{}", token),
        }
    }

    /// Ruta que corresponde a la ubicación actual del navegador
    pub fn current() -> Route {
        let path = window()
            .and_then(|win| win.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string());

        Route::from_path(&path)
    }
}

/// Navegación client-side: pushState + re-render, sin recarga completa.
/// Best-effort: no se espera confirmación del entorno.
pub fn navigate(route: &Route) {
    if let Some(win) = window() {
        match win.history() {
            Ok(history) => {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&route.to_path())) {
                    log::error!("❌ [ROUTER] Error en pushState: {:?}", e);
                    return;
                }
                log::info!("🧭 [ROUTER] Navegando a: {}", route.to_path());
            }
            Err(e) => {
                log::error!("❌ [ROUTER] History API no disponible: {:?}", e);
                return;
            }
        }
    }

    // Re-render diferido al siguiente macrotask
    Timeout::new(0, || crate::rerender_app()).forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruta_raiz() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn test_ruta_confirmacion_liga_token() {
        assert_eq!(
            Route::from_path("/confirm/abc123"),
            Route::Confirm { token: "abc123".to_string() }
        );
    }

    #[test]
    fn test_token_vacio_si_falta_segmento() {
        // "/confirm/" y "/confirm" no deben fallar: token por defecto ""
        assert_eq!(
            Route::from_path("/confirm/"),
            Route::Confirm { token: String::new() }
        );
        assert_eq!(
            Route::from_path("/confirm"),
            Route::Confirm { token: String::new() }
        );
    }

    #[test]
    fn test_paths_desconocidos_caen_en_raiz() {
        assert_eq!(Route::from_path("/otra-cosa"), Route::Home);
    }

    #[test]
    fn test_to_path_canonico() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(
            Route::Confirm { token: "xyz".to_string() }.to_path(),
            "/confirm/xyz"
        );
    }
}
