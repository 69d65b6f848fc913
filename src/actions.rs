//! Row Action Dispatcher
//!
//! Pure decision helpers behind the per-row delete/status/edit actions.
//! Every mutation resolves to one `ActionOutcome`; the components only
//! translate outcomes into toasts and modal state.

use crate::api::MutationResult;
use crate::store::ToastLevel;

/// Normalized result of one mutating call
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

impl ActionOutcome {
    /// Fold transport errors and the backend envelope into one shape.
    /// `fallback` fills in when a successful response carries no message.
    pub fn from_result(result: MutationResult, fallback: &str) -> Self {
        match result {
            Ok(res) => Self {
                success: res.success,
                message: res
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
            },
            Err(e) => Self {
                success: false,
                message: e.to_string(),
            },
        }
    }

    pub fn toast_level(&self) -> ToastLevel {
        if self.success {
            ToastLevel::Success
        } else {
            ToastLevel::Error
        }
    }
}

/// The confirmation modal closes on success only; a failure keeps it open
/// so the user can retry or cancel.
pub fn modal_stays_open(outcome: &ActionOutcome) -> bool {
    !outcome.success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::models::ApiResponse;

    fn envelope(success: bool, message: Option<&str>) -> MutationResult {
        Ok(ApiResponse {
            success,
            message: message.map(str::to_string),
            data: None,
        })
    }

    #[test]
    fn test_failed_delete_keeps_modal_open() {
        // Backend answered, but refused: surface its message verbatim
        let outcome = ActionOutcome::from_result(envelope(false, Some("not found")), "Deleted");
        assert!(!outcome.success);
        assert_eq!(outcome.message, "not found");
        assert_eq!(outcome.toast_level(), ToastLevel::Error);
        assert!(modal_stays_open(&outcome));
    }

    #[test]
    fn test_successful_delete_closes_modal() {
        let outcome = ActionOutcome::from_result(envelope(true, Some("Project deleted")), "Deleted");
        assert!(outcome.success);
        assert_eq!(outcome.message, "Project deleted");
        assert!(!modal_stays_open(&outcome));
    }

    #[test]
    fn test_missing_message_uses_fallback() {
        let outcome = ActionOutcome::from_result(envelope(true, None), "Saved");
        assert_eq!(outcome.message, "Saved");
        let outcome = ActionOutcome::from_result(envelope(true, Some("")), "Saved");
        assert_eq!(outcome.message, "Saved");
    }

    #[test]
    fn test_transport_failure_is_an_error_outcome() {
        let outcome = ActionOutcome::from_result(Err(ApiError::Status(502)), "Deleted");
        assert!(!outcome.success);
        assert!(outcome.message.contains("502"));
        assert_eq!(outcome.toast_level(), ToastLevel::Error);
    }
}
