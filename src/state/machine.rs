// ============================================================================
// RESERVATION STATE MACHINE - Máquina de estados pura de la reserva
// ============================================================================
// Mapea eventos (tick del countdown, respuesta del poll) a efectos que
// ejecuta el controller. No toca el DOM ni programa timers: eso permite
// testear todas las transiciones sin esperas de reloj real.
// ============================================================================

use crate::models::booking::BookingStatusSnapshot;

/// Fase del ciclo de vida de la reserva
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecyclePhase {
    Pending,
    Paid,
    Cancelled,
    Expired,
}

/// Desenlace terminal: mutuamente excluyente, se entra una sola vez
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalOutcome {
    Paid,
    Cancelled,
    Expired,
}

impl TerminalOutcome {
    /// Delay del redirect al dashboard tras renderizar el desenlace
    pub fn redirect_delay_ms(&self) -> u32 {
        match self {
            TerminalOutcome::Paid | TerminalOutcome::Cancelled => 2_000,
            TerminalOutcome::Expired => 3_000,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        match self {
            TerminalOutcome::Paid => LifecyclePhase::Paid,
            TerminalOutcome::Cancelled => LifecyclePhase::Cancelled,
            TerminalOutcome::Expired => LifecyclePhase::Expired,
        }
    }
}

/// Evento de sesión: tick del countdown o snapshot del poll de estado
#[derive(Clone, Debug)]
pub enum SessionEvent {
    Tick,
    Status(BookingStatusSnapshot),
}

/// Efecto a ejecutar por el controller como resultado de un evento
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Re-renderizar el countdown con los segundos restantes
    Render(u32),
    /// Parar ambos loops, renderizar el desenlace y programar el redirect
    EnterTerminal(TerminalOutcome),
}

/// Estado de la sesión de reserva
pub struct ReservationState {
    time_remaining: u32,
    phase: LifecyclePhase,
    // Guard: una vez true, ningún evento posterior produce efectos
    terminal_reached: bool,
}

impl ReservationState {
    /// Crear estado inicial
    /// El presupuesto llega del template como f64: valores negativos o no
    /// numéricos se clampean a 0 (= expiración inmediata, sin error)
    pub fn new(initial_time_remaining: f64) -> Self {
        let clamped = if initial_time_remaining.is_finite() && initial_time_remaining > 0.0 {
            initial_time_remaining as u32
        } else {
            0
        };

        Self {
            time_remaining: clamped,
            phase: LifecyclePhase::Pending,
            terminal_reached: false,
        }
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal_reached
    }

    /// Aplicar un evento y obtener el efecto resultante (None = sin cambios)
    pub fn apply(&mut self, event: SessionEvent) -> Option<Effect> {
        if self.terminal_reached {
            return None;
        }

        match event {
            SessionEvent::Tick => {
                self.time_remaining = self.time_remaining.saturating_sub(1);

                if self.time_remaining == 0 {
                    Some(self.enter_terminal(TerminalOutcome::Expired))
                } else {
                    Some(Effect::Render(self.time_remaining))
                }
            }
            SessionEvent::Status(snapshot) => {
                // success == false se ignora: el loop de poll continúa
                if !snapshot.success {
                    return None;
                }

                if snapshot.is_paid() {
                    Some(self.enter_terminal(TerminalOutcome::Paid))
                } else if snapshot.is_cancelled() {
                    Some(self.enter_terminal(TerminalOutcome::Cancelled))
                } else if snapshot.is_expired {
                    Some(self.enter_terminal(TerminalOutcome::Expired))
                } else {
                    None
                }
            }
        }
    }

    /// Expiración inmediata: presupuesto inicial ya agotado en el boot
    pub fn expire_immediately(&mut self) -> Option<Effect> {
        if self.terminal_reached {
            return None;
        }
        Some(self.enter_terminal(TerminalOutcome::Expired))
    }

    fn enter_terminal(&mut self, outcome: TerminalOutcome) -> Effect {
        self.terminal_reached = true;
        self.phase = outcome.phase();
        Effect::EnterTerminal(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(success: bool, status: &str, payment_status: &str, is_expired: bool) -> BookingStatusSnapshot {
        BookingStatusSnapshot {
            success,
            status: status.to_string(),
            payment_status: payment_status.to_string(),
            is_expired,
        }
    }

    #[test]
    fn test_initial_budget_is_clamped() {
        assert_eq!(ReservationState::new(120.0).time_remaining(), 120);
        assert_eq!(ReservationState::new(-5.0).time_remaining(), 0);
        assert_eq!(ReservationState::new(f64::NAN).time_remaining(), 0);
        assert_eq!(ReservationState::new(0.0).time_remaining(), 0);
    }

    #[test]
    fn test_countdown_expires_exactly_once() {
        // Desde t=3: dos renders y un único terminal al llegar a 0
        let mut state = ReservationState::new(3.0);

        assert_eq!(state.apply(SessionEvent::Tick), Some(Effect::Render(2)));
        assert_eq!(state.apply(SessionEvent::Tick), Some(Effect::Render(1)));
        assert_eq!(
            state.apply(SessionEvent::Tick),
            Some(Effect::EnterTerminal(TerminalOutcome::Expired))
        );
        assert_eq!(state.phase(), LifecyclePhase::Expired);

        // Ticks posteriores no decrementan ni producen efectos
        assert_eq!(state.apply(SessionEvent::Tick), None);
        assert_eq!(state.time_remaining(), 0);
    }

    #[test]
    fn test_paid_snapshot_transitions_to_paid() {
        let mut state = ReservationState::new(600.0);
        let effect = state.apply(SessionEvent::Status(snapshot(true, "confirmed", "paid", false)));

        assert_eq!(effect, Some(Effect::EnterTerminal(TerminalOutcome::Paid)));
        assert_eq!(state.phase(), LifecyclePhase::Paid);
        assert_eq!(TerminalOutcome::Paid.redirect_delay_ms(), 2_000);
    }

    #[test]
    fn test_cancelled_snapshot_transitions_to_cancelled() {
        let mut state = ReservationState::new(600.0);
        let effect = state.apply(SessionEvent::Status(snapshot(true, "cancelled", "unpaid", false)));

        assert_eq!(effect, Some(Effect::EnterTerminal(TerminalOutcome::Cancelled)));
        assert_eq!(TerminalOutcome::Cancelled.redirect_delay_ms(), 2_000);
    }

    #[test]
    fn test_expired_snapshot_transitions_to_expired() {
        let mut state = ReservationState::new(600.0);
        let effect = state.apply(SessionEvent::Status(snapshot(true, "pending", "unpaid", true)));

        assert_eq!(effect, Some(Effect::EnterTerminal(TerminalOutcome::Expired)));
        assert_eq!(TerminalOutcome::Expired.redirect_delay_ms(), 3_000);
    }

    #[test]
    fn test_non_terminal_snapshots_are_ignored() {
        let mut state = ReservationState::new(600.0);

        // success == false nunca transiciona, aunque el body diga cancelled
        assert_eq!(
            state.apply(SessionEvent::Status(snapshot(false, "cancelled", "unpaid", true))),
            None
        );
        // pending + unpaid: seguir esperando
        assert_eq!(
            state.apply(SessionEvent::Status(snapshot(true, "pending", "unpaid", false))),
            None
        );
        assert_eq!(state.phase(), LifecyclePhase::Pending);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_events_after_terminal_are_inert() {
        let mut state = ReservationState::new(600.0);
        state.apply(SessionEvent::Status(snapshot(true, "confirmed", "paid", false)));
        assert!(state.is_terminal());

        // Ni un tick ni otro snapshot (incluso contradictorio) tienen efecto
        assert_eq!(state.apply(SessionEvent::Tick), None);
        assert_eq!(
            state.apply(SessionEvent::Status(snapshot(true, "cancelled", "unpaid", false))),
            None
        );
        assert_eq!(state.phase(), LifecyclePhase::Paid);
    }

    #[test]
    fn test_immediate_expiration_is_guarded() {
        let mut state = ReservationState::new(0.0);

        assert_eq!(
            state.expire_immediately(),
            Some(Effect::EnterTerminal(TerminalOutcome::Expired))
        );
        // Segunda llamada: no-op
        assert_eq!(state.expire_immediately(), None);
    }
}
