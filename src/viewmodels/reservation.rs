// ============================================================================
// RESERVATION CONTROLLER - ViewModel de la sesión de reserva
// ============================================================================
// Posee los dos timers (countdown 1 s, poll 5 s), drena la cola de eventos
// a través de la máquina de estados y ejecuta los efectos resultantes.
// Los dos loops comparten estado vía Rc<RefCell>: el event loop del
// navegador garantiza que cada callback corre completo antes del siguiente.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::dom;
use crate::services::BookingApi;
use crate::state::machine::{Effect, ReservationState, SessionEvent, TerminalOutcome};
use crate::state::queue::EventQueue;
use crate::utils::constants::{COUNTDOWN_TICK_MS, STATUS_POLL_MS};
use crate::views;

/// Controller de la sesión de reserva
pub struct ReservationController {
    booking_id: String,
    state: RefCell<ReservationState>,
    queue: EventQueue,
    countdown_handle: RefCell<Option<Interval>>,
    poll_handle: RefCell<Option<Interval>>,
    api: BookingApi,
}

impl ReservationController {
    /// Crear controller; el presupuesto inicial se clampea a >= 0
    pub fn new(booking_id: String, initial_time_remaining: f64) -> Rc<Self> {
        Rc::new(Self {
            booking_id,
            state: RefCell::new(ReservationState::new(initial_time_remaining)),
            queue: EventQueue::new(),
            countdown_handle: RefCell::new(None),
            poll_handle: RefCell::new(None),
            api: BookingApi::new(),
        })
    }

    pub fn booking_id(&self) -> &str {
        &self.booking_id
    }

    /// Arrancar la sesión: render inicial + ambos loops
    /// Presupuesto 0 => expiración inmediata, sin arrancar ningún timer
    pub fn start(controller: &Rc<Self>) {
        let initial = controller.state.borrow().time_remaining();

        if initial == 0 {
            log::warn!(
                "⏰ Presupuesto inicial agotado, expirando reserva {} sin timers",
                controller.booking_id
            );
            let effect = controller.state.borrow_mut().expire_immediately();
            if let Some(effect) = effect {
                controller.execute(effect);
            }
            return;
        }

        // Render inicial antes del primer tick
        if let Err(e) = views::render_countdown(initial) {
            log::warn!("⚠️ Error en render inicial del countdown: {:?}", e);
        }

        Self::start_countdown(controller);
        Self::start_status_poll(controller);

        log::info!(
            "🚀 Sesión de reserva {} iniciada: {} segundos restantes",
            controller.booking_id,
            initial
        );
    }

    fn start_countdown(controller: &Rc<Self>) {
        let handle = Rc::clone(controller);
        let interval = Interval::new(COUNTDOWN_TICK_MS, move || {
            handle.queue.push(SessionEvent::Tick);
            handle.dispatch();
        });
        *controller.countdown_handle.borrow_mut() = Some(interval);
    }

    fn start_status_poll(controller: &Rc<Self>) {
        let handle = Rc::clone(controller);
        let interval = Interval::new(STATUS_POLL_MS, move || {
            let handle = Rc::clone(&handle);
            spawn_local(async move {
                match handle.api.fetch_status(&handle.booking_id).await {
                    Ok(snapshot) => {
                        handle.queue.push(SessionEvent::Status(snapshot));
                        handle.dispatch();
                    }
                    Err(e) => {
                        // Fallo de red: se loguea y el loop continúa, no se
                        // muestra nada al usuario
                        log::error!("❌ Error consultando estado de la reserva: {}", e);
                    }
                }
            });
        });
        *controller.poll_handle.borrow_mut() = Some(interval);
    }

    /// Drenar la cola y ejecutar los efectos en orden de llegada
    fn dispatch(&self) {
        let effects = {
            let mut state = self.state.borrow_mut();
            self.queue.drain(&mut state)
        };

        for effect in effects {
            self.execute(effect);
        }
    }

    fn execute(&self, effect: Effect) {
        match effect {
            Effect::Render(time_remaining) => {
                if let Err(e) = views::render_countdown(time_remaining) {
                    log::warn!("⚠️ Error renderizando countdown: {:?}", e);
                }
            }
            Effect::EnterTerminal(outcome) => self.enter_terminal(outcome),
        }
    }

    /// Entrada a estado terminal: parar ambos loops, renderizar el desenlace
    /// y programar el redirect una sola vez
    /// El guard de la máquina garantiza que solo se llega aquí una vez
    fn enter_terminal(&self, outcome: TerminalOutcome) {
        log::info!("🏁 Estado terminal alcanzado: {:?}", outcome);

        self.teardown();

        if let Err(e) = views::render_terminal(outcome) {
            log::warn!("⚠️ Error renderizando estado terminal: {:?}", e);
        }

        Timeout::new(outcome.redirect_delay_ms(), move || {
            redirect_to_dashboard();
        })
        .forget();
    }

    /// Parar ambos loops
    /// Seguro de llamar varias veces y desde varios sitios (entrada a
    /// terminal, unload de la página): drop del Interval cancela el timer
    pub fn teardown(&self) {
        if self.countdown_handle.borrow_mut().take().is_some() {
            log::info!("🛑 Countdown detenido");
        }
        if self.poll_handle.borrow_mut().take().is_some() {
            log::info!("🛑 Poll de estado detenido");
        }
    }

    /// Acción: continuar al pago
    /// En fallo se avisa al usuario y la sesión sigue interactiva, sin retry
    pub fn proceed_to_payment(&self) {
        let api = self.api.clone();
        let booking_id = self.booking_id.clone();

        spawn_local(async move {
            match api.fetch_payment_session(&booking_id).await {
                Ok(response) => match response.url {
                    Some(url) if !url.is_empty() => {
                        log::info!("💳 Redirigiendo a la pasarela de pago");
                        navigate_to(&url);
                    }
                    _ => {
                        log::error!("❌ Respuesta de sesión de pago sin URL");
                        show_payment_error();
                    }
                },
                Err(e) => {
                    log::error!("❌ Error obteniendo URL de pago: {}", e);
                    show_payment_error();
                }
            }
        });
    }

    /// Acción: cancelar la reserva
    /// Requiere confirmación interactiva; si el usuario declina no pasa nada
    pub fn cancel_booking(&self) {
        let confirmed = dom::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to cancel this booking?")
                    .ok()
            })
            .unwrap_or(false);

        if !confirmed {
            log::info!("ℹ️ Cancelación descartada por el usuario");
            return;
        }

        if let Some(form) = dom::get_element_by_id("cancelForm") {
            match form.dyn_into::<web_sys::HtmlFormElement>() {
                Ok(form) => {
                    if let Err(e) = form.submit() {
                        log::error!("❌ Error enviando formulario de cancelación: {:?}", e);
                    }
                }
                Err(_) => log::error!("❌ cancelForm no es un formulario"),
            }
        }
    }
}

fn navigate_to(url: &str) {
    if let Some(window) = dom::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("❌ Error navegando a {}: {:?}", url, e);
        }
    }
}

fn redirect_to_dashboard() {
    log::info!("➡️ Redirigiendo al dashboard");
    navigate_to(&CONFIG.dashboard_route);
}

fn show_payment_error() {
    if let Some(window) = dom::window() {
        let _ = window.alert_with_message("Error: Unable to proceed to payment. Please try again.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teardown_twice_is_noop() {
        // Sin timers arrancados: ambos handles ya son None y take() no
        // tiene efectos secundarios la segunda vez
        let controller = ReservationController::new("booking-1".to_string(), 60.0);
        controller.teardown();
        controller.teardown();
        assert_eq!(controller.booking_id(), "booking-1");
    }
}
