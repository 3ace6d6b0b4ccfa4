// ============================================================================
// DOM - Helpers defensivos de manipulación del DOM
// ============================================================================

pub mod element;
pub mod events;

pub use element::*;
pub use events::*;
