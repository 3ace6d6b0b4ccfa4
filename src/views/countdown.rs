// ============================================================================
// COUNTDOWN VIEW - Dígitos, barra de progreso y nivel de urgencia
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{add_class, get_element_by_id, set_class_name, set_style_property, set_text_content};
use crate::state::display::{format_clock, progress_percent, UrgencyTier};

/// Renderizar el countdown con los segundos restantes
/// Todos los targets del DOM son opcionales: si falta alguno se salta
pub fn render_countdown(time_remaining: u32) -> Result<(), JsValue> {
    let (minutes, seconds) = format_clock(time_remaining);

    if let Some(el) = get_element_by_id("minutes") {
        set_text_content(&el, &minutes);
    }
    if let Some(el) = get_element_by_id("seconds") {
        set_text_content(&el, &seconds);
    }

    // El nivel de urgencia se recalcula en cada render, no es sticky
    let tier = UrgencyTier::for_remaining(time_remaining);

    if let Some(bar) = get_element_by_id("progressBar") {
        set_style_property(&bar, "width", &format!("{}%", progress_percent(time_remaining)))?;
        set_class_name(&bar, tier.progress_bar_class());
    }

    if tier.is_urgent() {
        if let Some(timer) = get_element_by_id("countdownTimer") {
            add_class(&timer, "urgent")?;
        }
    }

    Ok(())
}
