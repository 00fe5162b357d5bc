//! Fields that backends spell more than one way.
//!
//! A plain `alias` fails with "duplicate field" once two spellings arrive in
//! the same object, so these fields are flattened and resolved here instead.

use serde::{Serializer, ser::SerializeMap};

fn serialize_as<S>(name: &'static str, value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(name, value)?;
    map.end()
}

/// `_id` wins over `id` when both are present.
pub mod document_id {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use super::serialize_as;

    #[derive(Deserialize)]
    struct Spellings {
        #[serde(rename = "_id", default)]
        stored: Option<String>,
        #[serde(default)]
        id: Option<String>,
    }

    pub fn serialize<S: Serializer>(id: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_as("id", id, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let spellings = Spellings::deserialize(deserializer)?;
        spellings
            .stored
            .or(spellings.id)
            .ok_or_else(|| D::Error::missing_field("id"))
    }
}

/// Preference order: `image_url`, `imageUrl`, then the legacy `image`.
pub mod image_url {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use super::serialize_as;

    #[derive(Deserialize)]
    struct Spellings {
        #[serde(default)]
        image_url: Option<String>,
        #[serde(rename = "imageUrl", default)]
        camel: Option<String>,
        #[serde(default)]
        image: Option<String>,
    }

    pub fn serialize<S: Serializer>(url: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_as("image_url", url, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let spellings = Spellings::deserialize(deserializer)?;
        spellings
            .image_url
            .or(spellings.camel)
            .or(spellings.image)
            .ok_or_else(|| D::Error::missing_field("image_url"))
    }
}
