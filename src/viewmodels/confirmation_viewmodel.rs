// ============================================================================
// CONFIRMATION VIEWMODEL - LÓGICA DE CONFIRMACIÓN DE CUENTA
// ============================================================================
// Lógica del workflow - devuelve el efecto a ejecutar, la vista lo ejecuta
// ============================================================================

use crate::models::{effect_for, ActivationEffect, ActivationOutcome};
use crate::services::ApiClient;

/// ViewModel de confirmación - SOLO lógica de negocio
pub struct ConfirmationViewModel {
    api_client: ApiClient,
}

impl ConfirmationViewModel {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    /// Confirmar la cuenta identificada por `token`.
    /// Emite exactamente una petición por invocación; el token viaja verbatim
    /// (incluso vacío, en cuyo caso el backend la rechazará). Todos los fallos
    /// colapsan en el mismo efecto de notificación, sin distinguir causas.
    pub async fn confirm(&self, token: &str) -> ActivationEffect {
        let outcome = match self.api_client.activate_account(token).await {
            Ok(status) => {
                let outcome = ActivationOutcome::from_status(status);
                match outcome {
                    ActivationOutcome::Confirmed => {
                        log::info!("✅ Cuenta confirmada (HTTP {})", status);
                    }
                    ActivationOutcome::Failed => {
                        log::warn!("⚠️ Activación rechazada: HTTP {}", status);
                    }
                }
                outcome
            }
            Err(e) => {
                // Fallo de transporte: mismo tratamiento que un status de error
                log::error!("❌ Error de red activando cuenta: {}", e);
                ActivationOutcome::Failed
            }
        };

        effect_for(outcome)
    }
}
