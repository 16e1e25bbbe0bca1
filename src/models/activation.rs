// ============================================================================
// ACTIVATION - Resultado y efecto del workflow de confirmación
// ============================================================================

/// Resultado binario de la petición de activación.
/// Se deriva únicamente de la clase del status HTTP; el body se ignora.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    Confirmed,
    Failed,
}

impl ActivationOutcome {
    /// Clasifica un status HTTP: 2xx confirma, cualquier otro falla
    pub fn from_status(status: u16) -> Self {
        if (200..=299).contains(&status) {
            ActivationOutcome::Confirmed
        } else {
            ActivationOutcome::Failed
        }
    }
}

/// Efecto a ejecutar tras observar el resultado.
/// La vista lo ejecuta (navegar o notificar); el workflow solo lo decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationEffect {
    NavigateHome,
    NotifyFailure,
}

/// Decide el efecto para un resultado
pub fn effect_for(outcome: ActivationOutcome) -> ActivationEffect {
    match outcome {
        ActivationOutcome::Confirmed => ActivationEffect::NavigateHome,
        ActivationOutcome::Failed => ActivationEffect::NotifyFailure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clasificacion_por_clase_de_status() {
        assert_eq!(ActivationOutcome::from_status(200), ActivationOutcome::Confirmed);
        assert_eq!(ActivationOutcome::from_status(204), ActivationOutcome::Confirmed);
        assert_eq!(ActivationOutcome::from_status(299), ActivationOutcome::Confirmed);

        // Bordes de la clase 2xx
        assert_eq!(ActivationOutcome::from_status(199), ActivationOutcome::Failed);
        assert_eq!(ActivationOutcome::from_status(300), ActivationOutcome::Failed);

        // Errores típicos colapsan en el mismo resultado
        assert_eq!(ActivationOutcome::from_status(400), ActivationOutcome::Failed);
        assert_eq!(ActivationOutcome::from_status(404), ActivationOutcome::Failed);
        assert_eq!(ActivationOutcome::from_status(410), ActivationOutcome::Failed);
        assert_eq!(ActivationOutcome::from_status(500), ActivationOutcome::Failed);
    }

    #[test]
    fn test_efecto_por_resultado() {
        assert_eq!(effect_for(ActivationOutcome::Confirmed), ActivationEffect::NavigateHome);
        assert_eq!(effect_for(ActivationOutcome::Failed), ActivationEffect::NotifyFailure);
    }
}
