//! Wire types for the labelsite content API.
//!
//! Every list endpoint answers `GET /{resource}?page={n}&limit={m}` with a
//! [`ListEnvelope`]. Item identifiers accept both `id` and the document-store
//! `_id` spelling, also when a backend sends both at once. Unknown fields are
//! ignored so backend additions do not break older clients.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

mod spelling;

/// One page of a resource listing as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Page count as computed by the backend.
    #[serde(default)]
    pub pages: u64,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,
}

/// Query string of a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u64,
    pub limit: u64,
}

impl ListQuery {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Key/value pairs in the order the backend documents them.
    pub fn pairs(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(flatten, with = "spelling::document_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "createdAt", with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(flatten, with = "spelling::document_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(flatten, with = "spelling::document_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten, with = "spelling::image_url")]
    pub image_url: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(flatten, with = "spelling::document_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(alias = "message")]
    pub quote: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

/// Lifecycle of a quote request in the admin inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Contacted,
    Closed,
}

/// A quote request submitted through the contact and export pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(flatten, with = "spelling::document_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: QuoteStatus,
    #[serde(default, alias = "createdAt", with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_defaults_missing_counts() {
        let envelope: ListEnvelope<Service> =
            serde_json::from_str(r#"{"data":[{"_id":"s1","title":"Flexo printing"}]}"#)
                .expect("envelope");

        assert_eq!(envelope.pages, 0);
        assert_eq!(envelope.total, 0);
        assert_eq!(envelope.data[0].id, "s1");
        assert!(envelope.data[0].features.is_empty());
    }

    #[test]
    fn blog_post_accepts_document_store_fields() {
        let post: BlogPost = serde_json::from_str(
            r#"{
                "_id": "66a1",
                "title": "Choosing label stock",
                "createdAt": "2024-03-01T10:00:00.000Z",
                "views": 42
            }"#,
        )
        .expect("blog post");

        assert_eq!(post.id, "66a1");
        let created = post.created_at.expect("created_at parsed");
        assert_eq!(created.year(), 2024);
    }

    #[test]
    fn quote_status_defaults_to_pending() {
        let quote: Quote =
            serde_json::from_str(r#"{"id":"q1","name":"Ana","email":"ana@example.com"}"#)
                .expect("quote");
        assert_eq!(quote.status, QuoteStatus::Pending);
    }

    #[test]
    fn list_query_pairs_follow_contract() {
        let pairs = ListQuery::new(3, 25).pairs();
        assert_eq!(pairs[0], ("page", "3".to_string()));
        assert_eq!(pairs[1], ("limit", "25".to_string()));
    }

    #[test]
    fn items_with_both_id_spellings_decode() {
        let envelope: ListEnvelope<BlogPost> = serde_json::from_str(
            r#"{"data":[{"_id":"b1","id":"b1","title":"Thermal labels"}],"pages":1,"total":1}"#,
        )
        .expect("envelope");
        assert_eq!(envelope.data[0].id, "b1");

        let quote: Quote = serde_json::from_str(
            r#"{"id":"virtual","_id":"stored","name":"Ana","email":"ana@example.com"}"#,
        )
        .expect("quote");
        assert_eq!(quote.id, "stored");
    }

    #[test]
    fn gallery_item_tolerates_every_image_spelling() {
        let item: GalleryItem = serde_json::from_str(
            r#"{"_id":"g1","image":"/img/roll.jpg","imageUrl":"https://cdn.example.com/roll.jpg"}"#,
        )
        .expect("gallery item");
        assert_eq!(item.id, "g1");
        assert_eq!(item.image_url, "https://cdn.example.com/roll.jpg");

        let legacy: GalleryItem =
            serde_json::from_str(r#"{"id":"g2","image":"/img/core.jpg"}"#).expect("legacy item");
        assert_eq!(legacy.image_url, "/img/core.jpg");
    }

    #[test]
    fn missing_identifier_is_rejected() {
        let err = serde_json::from_str::<Service>(r#"{"title":"Die cutting"}"#)
            .expect_err("id is required");
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn identifiers_serialize_under_one_name() {
        let service = Service {
            id: "s1".into(),
            title: "Die cutting".into(),
            description: None,
            icon: None,
            image: None,
            features: Vec::new(),
        };
        let value = serde_json::to_value(&service).expect("serialize");
        assert_eq!(value["id"], "s1");
        assert!(value.get("_id").is_none());
    }
}
