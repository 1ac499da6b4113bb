//! The uniform response envelope returned by every endpoint

use serde::{Deserialize, Serialize};

/// Wire shape of every server response.
///
/// `success` discriminates which optional fields are meaningful, so
/// callers should collapse the raw shape with [`Envelope::into_result`]
/// right after parsing instead of reading fields directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Collapse into a result.
    ///
    /// On failure the server's human-readable detail is returned when
    /// present, `message` winning over `error`. A successful envelope
    /// yields its payload as-is; whether an absent payload is legal is
    /// the operation's call, not the envelope's.
    pub fn into_result(self) -> Result<Option<T>, Option<String>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.message.or(self.error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_data() {
        let envelope: Envelope<bool> =
            serde_json::from_str(r#"{"success":true,"data":false}"#).unwrap();
        assert_eq!(envelope.into_result(), Ok(Some(false)));
    }

    #[test]
    fn test_success_without_data_is_not_a_failure() {
        let envelope: Envelope<bool> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(envelope.into_result(), Ok(None));
    }

    #[test]
    fn test_failure_prefers_message_over_error() {
        let envelope: Envelope<()> = serde_json::from_str(
            r#"{"success":false,"error":"NOT_FOUND","message":"no such entry"}"#,
        )
        .unwrap();
        assert_eq!(envelope.into_result(), Err(Some("no such entry".into())));
    }

    #[test]
    fn test_failure_falls_back_to_error() {
        let envelope: Envelope<()> =
            serde_json::from_str(r#"{"success":false,"error":"NOT_FOUND"}"#).unwrap();
        assert_eq!(envelope.into_result(), Err(Some("NOT_FOUND".into())));
    }

    #[test]
    fn test_failure_without_detail() {
        let envelope: Envelope<()> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(envelope.into_result(), Err(None));
    }
}
