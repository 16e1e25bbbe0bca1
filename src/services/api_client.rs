// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// La URL base se inyecta desde la raíz de composición (ver CONFIG.backend_url())
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Activar la cuenta identificada por el token.
    /// PUT sin body; devuelve el status HTTP tal cual (el body de la
    /// respuesta se ignora). Err solo en fallo de transporte.
    pub async fn activate_account(&self, token: &str) -> Result<u16, String> {
        let url = activation_url(&self.base_url, token);

        log::info!("🔐 Activando cuenta: PUT {}", url);

        let response = Request::put(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Ok(response.status())
    }
}

/// Construye la URL del endpoint de activación.
/// El token viaja verbatim en el path, incluso vacío.
pub fn activation_url(base_url: &str, token: &str) -> String {
    format!("{}/users/activate/{}", base_url, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_url_con_token() {
        assert_eq!(
            activation_url("http://localhost:8080/v1", "xyz"),
            "http://localhost:8080/v1/users/activate/xyz"
        );
    }

    #[test]
    fn test_activation_url_token_verbatim() {
        // Sin transformación del token más allá del transporte
        let url = activation_url("https://api.gosocial.app/v1", "abc123-DEF.456");
        assert!(url.ends_with("/users/activate/abc123-DEF.456"));
    }

    #[test]
    fn test_activation_url_token_vacio() {
        assert_eq!(
            activation_url("http://localhost:8080/v1", ""),
            "http://localhost:8080/v1/users/activate/"
        );
    }
}
