//! Lead capture form state and wire encoding.
//!
//! The submission state machine is deliberately two-valued: a lead is
//! either not yet captured or captured for good. Delivery failures keep
//! the form open for another attempt and are only surfaced in the
//! console, never to the visitor.

use serde::Deserialize;

/// Hidden relay fields sent alongside the address.
pub const FORM_SUBJECT: &str = "New Copy Capture Lead";
pub const FORM_CAPTCHA: &str = "false";
pub const FORM_TEMPLATE: &str = "table";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub email: String,
}

impl LeadFields {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// True when there is nothing worth submitting.
    pub fn is_blank(&self) -> bool {
        self.email.trim().is_empty()
    }

    /// Form-encoded request body, relay fields included.
    pub fn form_body(&self) -> String {
        let pairs = [
            ("_subject", FORM_SUBJECT),
            ("_captcha", FORM_CAPTCHA),
            ("_template", FORM_TEMPLATE),
            ("email", self.email.trim()),
        ];
        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Result of one delivery attempt, as seen by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The relay answered with a 2xx.
    Accepted,
    /// The relay answered, but not with a 2xx.
    Rejected(u16),
    /// The request never got an answer.
    ConnectionFailed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitted,
}

impl SubmitState {
    /// Apply one delivery outcome. `Submitted` is absorbing; a failed
    /// attempt leaves the form idle and re-submittable.
    pub fn next(self, outcome: SubmitOutcome) -> Self {
        match (self, outcome) {
            (Self::Idle, SubmitOutcome::Accepted) => Self::Submitted,
            (Self::Idle, _) => Self::Idle,
            (Self::Submitted, _) => Self::Submitted,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Book a Call",
            Self::Submitted => "Notified",
        }
    }

    /// Once captured, the input and button are disabled.
    pub fn is_locked(self) -> bool {
        self == Self::Submitted
    }
}

/// Acknowledgement body the relay returns on an ajax submission.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FormAck {
    pub success: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_relay_fields_and_the_address() {
        let body = LeadFields::new("visitor@example.com").form_body();
        assert_eq!(
            body,
            "_subject=New%20Copy%20Capture%20Lead&_captcha=false&_template=table&email=visitor%40example.com"
        );
    }

    #[test]
    fn body_escapes_reserved_characters() {
        let body = LeadFields::new("a+b@example.com").form_body();
        assert!(body.ends_with("email=a%2Bb%40example.com"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let fields = LeadFields::new("  visitor@example.com ");
        assert!(!fields.is_blank());
        assert!(fields.form_body().ends_with("email=visitor%40example.com"));
    }

    #[test]
    fn blank_addresses_are_detected() {
        assert!(LeadFields::default().is_blank());
        assert!(LeadFields::new("   ").is_blank());
        assert!(!LeadFields::new("x@y.z").is_blank());
    }

    #[test]
    fn acceptance_is_absorbing() {
        let state = SubmitState::Idle.next(SubmitOutcome::Accepted);
        assert_eq!(state, SubmitState::Submitted);
        assert_eq!(state.next(SubmitOutcome::Rejected(500)), SubmitState::Submitted);
        assert_eq!(state.next(SubmitOutcome::ConnectionFailed), SubmitState::Submitted);
        assert!(state.is_locked());
        assert_eq!(state.button_label(), "Notified");
    }

    #[test]
    fn failures_leave_the_form_open() {
        assert_eq!(
            SubmitState::Idle.next(SubmitOutcome::Rejected(422)),
            SubmitState::Idle
        );
        assert_eq!(
            SubmitState::Idle.next(SubmitOutcome::ConnectionFailed),
            SubmitState::Idle
        );
        assert!(!SubmitState::Idle.is_locked());
        assert_eq!(SubmitState::Idle.button_label(), "Book a Call");
    }

    #[test]
    fn ack_parses_the_relay_shape() {
        let ack: FormAck =
            serde_json::from_str(r#"{"success":"true","message":"The form was submitted."}"#)
                .unwrap();
        assert_eq!(ack.success, "true");
        assert_eq!(ack.message, "The form was submitted.");

        let bare: FormAck = serde_json::from_str(r#"{"success":"false"}"#).unwrap();
        assert_eq!(bare.message, "");
    }
}
