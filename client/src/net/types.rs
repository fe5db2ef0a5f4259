//! Wire DTOs for the products API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON exactly (Mongo-style `_id`, reserved
//! word `type`) so list responses deserialize without a mapping layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A catalog product as returned by `GET /api/products`.
///
/// Read-only on the client: every change is a create or delete followed by a
/// full list re-fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier (opaque string).
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// List price. Transmitted as text, but the server sometimes responds
    /// with a JSON number, so deserialization accepts both.
    #[serde(deserialize_with = "deserialize_string_from_value")]
    pub price: String,
    /// Vehicle category label.
    #[serde(rename = "type")]
    pub vehicle_type: String,
    /// Free-form description.
    pub description: String,
    /// Base64-encoded JPEG payload for slot 1, if populated.
    #[serde(default)]
    pub image1: Option<String>,
    /// Base64-encoded JPEG payload for slot 2, if populated.
    #[serde(default)]
    pub image2: Option<String>,
    /// Base64-encoded JPEG payload for slot 3, if populated.
    #[serde(default)]
    pub image3: Option<String>,
    /// Base64-encoded JPEG payload for slot 4, if populated.
    #[serde(default)]
    pub image4: Option<String>,
}

impl Product {
    /// Populated image payloads in slot order.
    pub fn images(&self) -> impl Iterator<Item = &String> {
        [&self.image1, &self.image2, &self.image3, &self.image4]
            .into_iter()
            .filter_map(|slot| slot.as_ref())
    }
}

fn deserialize_string_from_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
