// ============================================================================
// STATUS VIEW - Rendering de los desenlaces terminales
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{get_element_by_id, set_disabled, set_inner_html, set_style_property};
use crate::state::machine::TerminalOutcome;

const PAID_INDICATOR_HTML: &str = r#"<i class="fas fa-check-circle text-success me-2"></i><span class="text-success">Payment successful! Redirecting...</span>"#;

const EXPIRED_INDICATOR_HTML: &str = r#"<i class="fas fa-exclamation-triangle text-danger me-2"></i><span class="text-danger">Reservation expired</span>"#;

const CANCELLED_INDICATOR_HTML: &str = r#"<i class="fas fa-times-circle text-danger me-2"></i><span class="text-danger">Booking cancelled</span>"#;

/// Display congelado "00:00" que sustituye al timer al expirar
const EXPIRED_TIMER_HTML: &str = r#"<div class="timer-display text-danger">00:00</div><p class="timer-label">Time expired</p>"#;

/// Renderizar el desenlace terminal de la sesión
/// Igual que el countdown: cada target ausente se salta en silencio
pub fn render_terminal(outcome: TerminalOutcome) -> Result<(), JsValue> {
    let indicator_html = match outcome {
        TerminalOutcome::Paid => PAID_INDICATOR_HTML,
        TerminalOutcome::Cancelled => CANCELLED_INDICATOR_HTML,
        TerminalOutcome::Expired => EXPIRED_INDICATOR_HTML,
    };

    if let Some(indicator) = get_element_by_id("statusIndicator") {
        set_inner_html(&indicator, indicator_html);
    }

    if let Some(timer) = get_element_by_id("countdownTimer") {
        match outcome {
            // Paid/Cancelled ocultan el countdown
            TerminalOutcome::Paid | TerminalOutcome::Cancelled => {
                set_style_property(&timer, "display", "none")?;
            }
            // Expired lo congela en 00:00
            TerminalOutcome::Expired => {
                set_inner_html(&timer, EXPIRED_TIMER_HTML);
            }
        }
    }

    // Desactivar ambas acciones en cualquier desenlace
    if let Some(cancel_btn) = get_element_by_id("cancelBtn") {
        set_disabled(&cancel_btn, true);
    }
    if let Some(payment_btn) = get_element_by_id("paymentBtn") {
        set_disabled(&payment_btn, true);
    }

    Ok(())
}
