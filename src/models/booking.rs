// ============================================================================
// MODELS - Estructuras compartidas con el backend de reservas
// ============================================================================

use serde::Deserialize;

/// Snapshot del estado de la reserva devuelto por el poll
/// Cada respuesta se evalúa una vez y se descarta, no se persiste
#[derive(Deserialize, Clone, Debug)]
pub struct BookingStatusSnapshot {
    pub success: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub is_expired: bool,
}

impl BookingStatusSnapshot {
    /// La reserva está confirmada y pagada
    pub fn is_paid(&self) -> bool {
        self.status == "confirmed" && self.payment_status == "paid"
    }

    /// La reserva fue cancelada en el backend
    pub fn is_cancelled(&self) -> bool {
        self.status == "cancelled"
    }
}

/// Respuesta del endpoint de sesión de pago
/// Un body sin `url` cuenta como fallo: se avisa al usuario y no se navega
#[derive(Deserialize, Debug)]
pub struct PaymentSessionResponse {
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_snapshot_wire_format() {
        let body = r#"{"success":true,"status":"confirmed","payment_status":"paid","is_expired":false}"#;
        let snapshot: BookingStatusSnapshot = serde_json::from_str(body).unwrap();

        assert!(snapshot.success);
        assert!(snapshot.is_paid());
        assert!(!snapshot.is_cancelled());
    }

    #[test]
    fn test_status_snapshot_missing_fields_default() {
        // El backend puede responder solo con success en caso de error
        let body = r#"{"success":false}"#;
        let snapshot: BookingStatusSnapshot = serde_json::from_str(body).unwrap();

        assert!(!snapshot.success);
        assert!(!snapshot.is_paid());
        assert!(!snapshot.is_expired);
    }

    #[test]
    fn test_payment_session_without_url_is_none() {
        let response: PaymentSessionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.url.is_none());

        let response: PaymentSessionResponse =
            serde_json::from_str(r#"{"url":"https://checkout.stripe.com/c/pay/cs_test"}"#).unwrap();
        assert_eq!(response.url.as_deref(), Some("https://checkout.stripe.com/c/pay/cs_test"));
    }
}
