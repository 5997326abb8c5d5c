//! Request handling policy
//!
//! Controls how tolerant handlers are of bad input and whether an order
//! and its items are written atomically.

use serde::Deserialize;

/// What to do with an unparseable path id or JSON body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Substitute zero values (id 0, default-valued body) and carry on
    #[default]
    Lenient,

    /// Reject the request with an error envelope
    Strict,
}

/// Runtime switches consulted by extractors and handlers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestPolicy {
    pub input: InputPolicy,

    /// Write `POST /orders` in one transaction instead of row by row
    pub atomic_orders: bool,
}

impl RequestPolicy {
    pub fn strict() -> Self {
        Self {
            input: InputPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn is_lenient(&self) -> bool {
        self.input == InputPolicy::Lenient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        input: InputPolicy,
    }

    #[test]
    fn default_is_lenient_and_non_atomic() {
        let policy = RequestPolicy::default();
        assert!(policy.is_lenient());
        assert!(!policy.atomic_orders);
        assert!(!RequestPolicy::strict().is_lenient());
    }

    #[test]
    fn deserializes_lowercase() {
        let w: Wrapper = serde_json::from_str(r#"{"input":"strict"}"#).unwrap();
        assert_eq!(w.input, InputPolicy::Strict);
        assert!(serde_json::from_str::<Wrapper>(r#"{"input":"Strict"}"#).is_err());
    }
}
