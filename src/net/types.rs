//! Wire DTOs for the chat backend's JSON API.
//!
//! DESIGN
//! ======
//! Incoming types are lenient (`#[serde(default)]` on everything the server
//! may omit) so older backends that only send `message` still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use ciphers::CipherMethod;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated user as returned by `auth/me` and `auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Login identifier shown in the header.
    pub login: String,
}

/// Body of `POST auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// A chat message as stored by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Server-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Sender login.
    #[serde(default)]
    pub login: String,
    /// Message text; ciphertext when `method` is set.
    pub message: String,
    /// Cipher used to produce `message`, if any.
    #[serde(default)]
    pub method: Option<CipherMethod>,
    /// Milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub timestamp: i64,
}

/// Body of `POST messages`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    /// Idempotency key generated once per send (UUID string).
    pub client_id: String,
    /// Encrypted message text.
    pub message: String,
    pub method: CipherMethod,
}

/// Accept integer timestamps that some backends emit as floats (`1.7e12`).
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
