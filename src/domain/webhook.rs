use {serde_json::Value, uuid::Uuid};

pub const CHARGE_COMPLETED: &str = "OPENPIX:CHARGE_COMPLETED";

/// Decoded webhook body.
///
/// Kept untyped: OpenPix sends many event shapes and only
/// `CHARGE_COMPLETED` is ever looked into.
#[derive(Debug)]
pub struct WebhookEvent(Value);

impl WebhookEvent {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body).map(Self)
    }

    /// Event name, if the body carries a string `event` field.
    pub fn name(&self) -> Option<&str> {
        self.0.get("event")?.as_str()
    }

    pub fn is_charge_completed(&self) -> bool {
        self.name() == Some(CHARGE_COMPLETED)
    }

    /// `charge.correlationID`; anything but a string counts as absent.
    pub fn correlation_id(&self) -> Option<&str> {
        self.0.get("charge")?.get("correlationID")?.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// Order was marked complete.
    Completed(Uuid),
    /// Event type we do not handle.
    Ignored,
}
