// ============================================================================
// BOOKING PAYMENT PAGE - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Controller con timers + ejecución de efectos
// - Services: SOLO comunicación API
// - State: Máquina de estados pura + cola de eventos (sin DOM)
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    if config::CONFIG.enable_logging {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 Booking Payment Page - Rust Puro + MVVM");

    // Boot de la página: lee los valores inyectados por el template, crea el
    // controller y registra los handlers con un handle explícito (sin global)
    app::boot()
}
