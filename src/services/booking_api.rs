// ============================================================================
// BOOKING API - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::booking::{BookingStatusSnapshot, PaymentSessionResponse};

/// Cliente API de la reserva - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct BookingApi {
    base_url: String,
}

impl BookingApi {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
        }
    }

    /// Consultar el estado actual de la reserva
    pub async fn fetch_status(&self, booking_id: &str) -> Result<BookingStatusSnapshot, String> {
        let url = format!("{}/api/booking/{}/status/", self.base_url, booking_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<BookingStatusSnapshot>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Pedir la URL de la sesión de pago para esta reserva
    pub async fn fetch_payment_session(
        &self,
        booking_id: &str,
    ) -> Result<PaymentSessionResponse, String> {
        let url = format!("{}/api/booking/{}/stripe-session/", self.base_url, booking_id);

        log::info!("💳 Solicitando sesión de pago para reserva: {}", booking_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<PaymentSessionResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for BookingApi {
    fn default() -> Self {
        Self::new()
    }
}
