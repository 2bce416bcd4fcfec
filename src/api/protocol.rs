//! Animal API Protocol
//!
//! Route paths and the request payloads accepted by the HTTP handlers.

use crate::registry::types::AnimalId;

use regex::Regex;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::sync::OnceLock;

// --- API Endpoints ---

/// Collection endpoint: list (GET) and create (POST).
pub const ENDPOINT_ANIMALS: &str = "/animals";
/// Single animal endpoint: delete (DELETE).
pub const ENDPOINT_ANIMAL: &str = "/animals/:id";

/// Body of the 400 response for a path id that is not a number.
pub const INVALID_ID_MESSAGE: &str = "Invalid ID";

// --- Data Transfer Objects ---

/// Payload for creating an animal.
///
/// Must be a JSON object. Keys are matched without regard to ASCII case and the last
/// matching key holding a string wins; matching keys with any other value are skipped.
/// Anything missing decodes to its default. Unknown fields, including a client supplied
/// `id`, are ignored.
#[derive(Debug, Default)]
pub struct CreateAnimalRequest {
    pub name: String,
}

impl<'de> Deserialize<'de> for CreateAnimalRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CreateAnimalRequestVisitor)
    }
}

struct CreateAnimalRequestVisitor;

impl<'de> Visitor<'de> for CreateAnimalRequestVisitor {
    type Value = CreateAnimalRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an animal object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut req = CreateAnimalRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            if !key.eq_ignore_ascii_case("name") {
                continue;
            }
            if let serde_json::Value::String(name) = value {
                req.name = name;
            }
        }

        Ok(req)
    }
}

impl CreateAnimalRequest {
    /// Decodes the first JSON value in `body`.
    ///
    /// Never fails: an empty body, malformed JSON or wrongly typed fields all yield the
    /// default payload. Anything after the first value is ignored.
    pub fn decode_lenient(body: &[u8]) -> Self {
        match serde_json::Deserializer::from_slice(body)
            .into_iter::<Self>()
            .next()
        {
            Some(Ok(req)) => req,
            Some(Err(e)) => {
                tracing::debug!("Undecodable create payload, using defaults: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }
}

/// Parses a path id. Only plain ASCII digits that fit an `AnimalId` are accepted.
pub fn parse_animal_id(raw: &str) -> Option<AnimalId> {
    static ID_PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = ID_PATTERN.get_or_init(|| Regex::new(r"^[0-9]+$").expect("valid id pattern"));

    if !pattern.is_match(raw) {
        return None;
    }
    raw.parse().ok()
}
