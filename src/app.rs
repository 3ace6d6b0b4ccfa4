// ============================================================================
// APP - Boot de la página de pago de la reserva
// ============================================================================
// Lee bookingId / initialTimeRemaining inyectados por el template en window,
// crea el controller y registra los handlers de las acciones.
// Los handlers capturan un handle explícito (Rc) al controller: no hay
// instancia global mutable.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::{self, on_click};
use crate::viewmodels::ReservationController;

/// Leer un valor inyectado por el template en window
fn page_value(name: &str) -> Option<JsValue> {
    let window = dom::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Arrancar la página
pub fn boot() -> Result<(), JsValue> {
    // bookingId puede llegar como string o como número desde el template
    let booking_id = page_value("bookingId").and_then(|v| {
        v.as_string()
            .or_else(|| v.as_f64().map(|n| (n as i64).to_string()))
    });

    let booking_id = match booking_id {
        Some(id) => id,
        None => {
            log::warn!("⚠️ bookingId no definido en la página, no se inicia la sesión");
            return Ok(());
        }
    };

    // Presupuesto inicial en segundos; valores ausentes o no numéricos se
    // tratan como 0 (= expiración inmediata, nunca un error)
    let initial_time = page_value("initialTimeRemaining")
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    let controller = ReservationController::new(booking_id, initial_time);

    wire_action_handlers(&controller);
    wire_unload_teardown(&controller);

    ReservationController::start(&controller);
    Ok(())
}

/// Registrar los handlers de click de las dos acciones
/// Cada closure captura su propio Rc al controller
fn wire_action_handlers(controller: &Rc<ReservationController>) {
    if let Some(payment_btn) = dom::get_element_by_id("paymentBtn") {
        let handle = Rc::clone(controller);
        if let Err(e) = on_click(&payment_btn, move |_| handle.proceed_to_payment()) {
            log::warn!("⚠️ No se pudo registrar el handler de pago: {:?}", e);
        }
    }

    if let Some(cancel_btn) = dom::get_element_by_id("cancelBtn") {
        let handle = Rc::clone(controller);
        if let Err(e) = on_click(&cancel_btn, move |_| handle.cancel_booking()) {
            log::warn!("⚠️ No se pudo registrar el handler de cancelación: {:?}", e);
        }
    }
}

/// Teardown al salir de la página, en cualquier estado de la sesión
/// Nota: listener global en window, se registra UNA sola vez en el boot
fn wire_unload_teardown(controller: &Rc<ReservationController>) {
    let window = match dom::window() {
        Some(w) => w,
        None => return,
    };

    let handle = Rc::clone(controller);
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::Event| {
        handle.teardown();
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(e) =
        window.add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())
    {
        log::warn!("⚠️ No se pudo registrar el teardown en beforeunload: {:?}", e);
    }
    // closure.forget() necesario para mantener el closure vivo en Rust WASM;
    // el listener global persiste toda la vida de la página
    closure.forget();
}
