use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Response body of a content endpoint.
///
/// The backend answers either `{"success": true, "data": ...}` or the payload
/// on its own. Both shapes are resolved here, once, so callers never sniff the
/// body themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEnvelope<T> {
    /// `{"success": true, "data": T}`
    Enveloped(T),
    /// The body itself is a `T`.
    Bare(T),
    /// Anything else, including `{"success": false, ...}`. Carries the
    /// reason the body was rejected.
    Malformed(String),
}

impl<T: DeserializeOwned> ApiEnvelope<T> {
    pub fn from_value(value: Value) -> Self {
        let value = match value {
            Value::Object(mut map) if map.get("success").and_then(Value::as_bool) == Some(true) => {
                match map.remove("data") {
                    Some(data) => {
                        return serde_json::from_value(data)
                            .map(Self::Enveloped)
                            .unwrap_or_else(|e| Self::Malformed(format!("data: {e}")));
                    }
                    None => Value::Object(map),
                }
            }
            other => other,
        };

        serde_json::from_value(value)
            .map(Self::Bare)
            .unwrap_or_else(|e| Self::Malformed(e.to_string()))
    }
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Enveloped(data) | Self::Bare(data) => Some(data),
            Self::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    /// Why the body was rejected, if it was.
    pub fn malformed_reason(&self) -> Option<&str> {
        match self {
            Self::Malformed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl<T> ApiEnvelope<Vec<T>> {
    /// List payload, empty when the body was malformed.
    pub fn into_items(self) -> Vec<T> {
        self.into_data().unwrap_or_default()
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiEnvelope<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// Response of a call whose body carries nothing the caller needs.
///
/// Accepts an empty body (`204`) as well as any JSON document, such as
/// `{"success": true, "message": "Project deleted"}`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgement;

impl<'de> Deserialize<'de> for Acknowledgement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // An empty body ends the input before any value; that is still a success.
        let _ = IgnoredAny::deserialize(deserializer);
        Ok(Self)
    }
}
