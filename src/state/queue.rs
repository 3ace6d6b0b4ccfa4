// ============================================================================
// EVENT QUEUE - Cola FIFO de eventos de sesión
// ============================================================================
// Todos los ticks del countdown y las respuestas del poll pasan por aquí y
// se aplican en orden de llegada. Eso hace determinista la carrera entre
// ambos loops: un terminal del poll ya encolado gana al tick que expiraría
// la reserva en el mismo drenado.
// ============================================================================

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::state::machine::{Effect, ReservationState, SessionEvent};

/// Cola compartida de eventos (Rc para poder clonarla hacia los closures
/// de los timers sin instancia global)
#[derive(Clone)]
pub struct EventQueue {
    events: Rc<RefCell<VecDeque<SessionEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Encolar un evento; se aplicará en el próximo drenado
    pub fn push(&self, event: SessionEvent) {
        self.events.borrow_mut().push_back(event);
    }

    /// Drenar la cola aplicando cada evento a la máquina en orden FIFO
    /// Los eventos posteriores a un terminal quedan absorbidos por el guard
    pub fn drain(&self, state: &mut ReservationState) -> Vec<Effect> {
        let mut effects = Vec::new();

        loop {
            // pop antes de aplicar: no mantener el borrow de la cola
            // mientras corre la máquina
            let next = self.events.borrow_mut().pop_front();
            match next {
                Some(event) => {
                    if let Some(effect) = state.apply(event) {
                        effects.push(effect);
                    }
                }
                None => break,
            }
        }

        effects
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingStatusSnapshot;
    use crate::state::machine::TerminalOutcome;

    fn paid_snapshot() -> BookingStatusSnapshot {
        BookingStatusSnapshot {
            success: true,
            status: "confirmed".to_string(),
            payment_status: "paid".to_string(),
            is_expired: false,
        }
    }

    #[test]
    fn test_drain_applies_in_arrival_order() {
        let queue = EventQueue::new();
        let mut state = ReservationState::new(10.0);

        queue.push(SessionEvent::Tick);
        queue.push(SessionEvent::Tick);

        let effects = queue.drain(&mut state);
        assert_eq!(effects, vec![Effect::Render(9), Effect::Render(8)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_enqueued_poll_terminal_beats_tick() {
        // Carrera poll/countdown con t=1: el snapshot "paid" llegó antes del
        // tick que expiraría la reserva, así que Paid gana y el tick es inerte
        let queue = EventQueue::new();
        let mut state = ReservationState::new(1.0);

        queue.push(SessionEvent::Status(paid_snapshot()));
        queue.push(SessionEvent::Tick);

        let effects = queue.drain(&mut state);
        assert_eq!(effects, vec![Effect::EnterTerminal(TerminalOutcome::Paid)]);
    }

    #[test]
    fn test_tick_first_wins_over_later_snapshot() {
        // Orden inverso: el tick expira primero y el snapshot se descarta
        let queue = EventQueue::new();
        let mut state = ReservationState::new(1.0);

        queue.push(SessionEvent::Tick);
        queue.push(SessionEvent::Status(paid_snapshot()));

        let effects = queue.drain(&mut state);
        assert_eq!(effects, vec![Effect::EnterTerminal(TerminalOutcome::Expired)]);
    }

    #[test]
    fn test_drain_on_empty_queue_is_noop() {
        let queue = EventQueue::new();
        let mut state = ReservationState::new(10.0);

        assert!(queue.drain(&mut state).is_empty());
        assert_eq!(state.time_remaining(), 10);
    }
}
