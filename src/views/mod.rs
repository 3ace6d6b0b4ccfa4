// ============================================================================
// VIEWS - Rendering del countdown y de los desenlaces terminales
// ============================================================================

pub mod countdown;
pub mod status;

pub use countdown::render_countdown;
pub use status::render_terminal;
