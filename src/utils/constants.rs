/// Cadencia del countdown visual (1 tick por segundo)
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

/// Cadencia del poll de estado contra el backend
pub const STATUS_POLL_MS: u32 = 5_000;

/// Ventana de reserva que normaliza la barra de progreso (30 minutos)
/// Presupuestos mayores producen porcentajes > 100, sin clamp
pub const RESERVATION_WINDOW_SECONDS: u32 = 30 * 60;

/// Umbral del nivel "danger" (5 minutos restantes)
pub const DANGER_THRESHOLD_SECONDS: u32 = 300;

/// Umbral del nivel "warning" (10 minutos restantes)
pub const WARNING_THRESHOLD_SECONDS: u32 = 600;
