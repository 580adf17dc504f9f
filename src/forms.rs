use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const SUCCESS_MESSAGE: &str = "Thank you! We'll be in touch soon.";
pub const SENDING_LABEL: &str = "Sending...";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Demo,
}

impl FormKind {
    pub fn class(self) -> &'static str {
        match self {
            FormKind::Contact => "contact-form",
            FormKind::Demo => "demo-form",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Contact => "Send Message",
            FormKind::Demo => "Request Demo",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

impl MessageKind {
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Error => "error",
            MessageKind::Success => "success",
        }
    }
}

/// Feedback shown above a form. `id` increases with every message so a newer
/// message is never removed by an older message's timer.
#[derive(Clone, Debug, PartialEq)]
pub struct FormMessage {
    pub id: u32,
    pub kind: MessageKind,
    pub text: &'static str,
}

impl FormMessage {
    pub fn next(previous: Option<&FormMessage>, kind: MessageKind, text: &'static str) -> Self {
        Self {
            id: previous.map(|m| m.id + 1).unwrap_or(0),
            kind,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "jane", "jane@example", "@example.com", "jane doe@example.com", "jane@@example.com"] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn message_ids_increase() {
        let first = FormMessage::next(None, MessageKind::Error, INVALID_EMAIL_MESSAGE);
        let second = FormMessage::next(Some(&first), MessageKind::Success, SUCCESS_MESSAGE);
        assert_eq!(first.id, 0);
        assert_eq!(second.id, 1);
        assert_eq!(second.kind.class(), "success");
    }
}
