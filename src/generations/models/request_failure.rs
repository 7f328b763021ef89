pub const FALLBACK_ERROR_MESSAGE: &str = "มีบางอย่างผิดพลาด";

/// A generation call that did not produce an artifact. The message is
/// always non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestFailure {
    pub message: String,
}

impl RequestFailure {
    pub fn new(message: &str) -> Self {
        let message = message.trim();

        if message.is_empty() {
            return Self::fallback();
        }

        Self {
            message: message.to_string(),
        }
    }

    pub fn fallback() -> Self {
        Self {
            message: FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}
