// ============================================================================
// DISPLAY - Cálculos puros de presentación del countdown
// ============================================================================

use crate::utils::constants::{
    DANGER_THRESHOLD_SECONDS, RESERVATION_WINDOW_SECONDS, WARNING_THRESHOLD_SECONDS,
};

/// Nivel de urgencia visual: puramente cosmético, se recalcula en cada
/// render (no es sticky)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrgencyTier {
    Normal,
    Warning,
    Danger,
}

impl UrgencyTier {
    pub fn for_remaining(seconds: u32) -> Self {
        if seconds <= DANGER_THRESHOLD_SECONDS {
            UrgencyTier::Danger
        } else if seconds <= WARNING_THRESHOLD_SECONDS {
            UrgencyTier::Warning
        } else {
            UrgencyTier::Normal
        }
    }

    /// Clases CSS de la barra de progreso para este nivel
    pub fn progress_bar_class(&self) -> &'static str {
        match self {
            UrgencyTier::Danger => "progress-bar bg-danger",
            UrgencyTier::Warning => "progress-bar bg-warning",
            UrgencyTier::Normal => "progress-bar",
        }
    }

    /// Solo el nivel danger marca el timer como "urgent"
    pub fn is_urgent(&self) -> bool {
        matches!(self, UrgencyTier::Danger)
    }
}

/// Dígitos MM / SS con padding a 2 cifras
pub fn format_clock(seconds: u32) -> (String, String) {
    (format!("{:02}", seconds / 60), format!("{:02}", seconds % 60))
}

/// Porcentaje de la barra de progreso, normalizado a la ventana de 30 min
/// Sin clamp: presupuestos mayores a 30 min superan el 100%
pub fn progress_percent(seconds: u32) -> f64 {
    seconds as f64 / RESERVATION_WINDOW_SECONDS as f64 * 100.0
}
