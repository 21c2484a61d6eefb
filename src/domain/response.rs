use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
/// Normalized result of one send operation.
///
/// The send operation never returns `Err`: validation failures, transport
/// failures, and vendor-reported errors all come back as `success: false`
/// with a populated `reason`, so calling code has one branch to check and
/// one field to log.
pub struct SendOutcome {
    /// Whether Aligo accepted the message (`result_code >= 0`).
    pub success: bool,
    /// Empty on success; otherwise a human-readable cause.
    pub reason: String,
    /// Parsed vendor response body, or whatever diagnostic was available
    /// when the request never produced one.
    pub detail: Option<Value>,
}

impl SendOutcome {
    /// A successful outcome with the parsed vendor body.
    pub fn ok(detail: Option<Value>) -> Self {
        Self {
            success: true,
            reason: String::new(),
            detail,
        }
    }

    /// A failed outcome.
    pub fn fail(reason: impl Into<String>, detail: Option<Value>) -> Self {
        Self {
            success: false,
            reason: reason.into(),
            detail,
        }
    }

    /// Whether the send succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_the_uniform_shape() {
        let ok = SendOutcome::ok(None);
        assert!(ok.is_success());
        assert_eq!(ok.reason, "");
        assert!(ok.detail.is_none());

        let fail = SendOutcome::fail("unknown error", Some(Value::Null));
        assert!(!fail.is_success());
        assert_eq!(fail.reason, "unknown error");
        assert_eq!(fail.detail, Some(Value::Null));
    }
}
