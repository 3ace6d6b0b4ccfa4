// ============================================================================
// STATE - Núcleo puro de la sesión de reserva (sin DOM, sin timers)
// ============================================================================

pub mod display;
pub mod machine;
pub mod queue;
