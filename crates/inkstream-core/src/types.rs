//! Core types for the Inkstream client
//!
//! Domain records live in submodules; this module holds the generic
//! document-service wire types shared by all repositories.

use serde::Deserialize;

pub mod comment;
pub mod post;
pub mod profile;
pub mod session;

pub use comment::Comment;
pub use post::{Post, PostDraft, PostStatus, SaveRecord};
pub use profile::UserProfile;
pub use session::{Identity, Session};

/// One page of results from a document list call
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList {
    /// Total number of matching documents on the server
    pub total: u64,
    /// The documents themselves, as raw JSON payloads
    pub documents: Vec<serde_json::Value>,
}

impl DocumentList {
    /// An empty result page
    pub fn empty() -> Self {
        Self {
            total: 0,
            documents: Vec::new(),
        }
    }
}

/// Filter/ordering directive for a document list call
///
/// Serialized as a JSON object in the querystring, the wire format the
/// hosted document API expects.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Attribute equals one of the given values
    Equal {
        /// Attribute name in the document payload
        attribute: String,
        /// Accepted values
        values: Vec<String>,
    },
    /// Newest-first ordering on the given attribute
    OrderDesc {
        /// Attribute name to order by
        attribute: String,
    },
    /// Cap the number of returned documents
    Limit(u32),
}

impl Query {
    /// Equality filter on a single value
    pub fn equal(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equal {
            attribute: attribute.into(),
            values: vec![value.into()],
        }
    }

    /// Newest-first ordering
    pub fn order_desc(attribute: impl Into<String>) -> Self {
        Self::OrderDesc {
            attribute: attribute.into(),
        }
    }

    /// Result count cap
    pub fn limit(count: u32) -> Self {
        Self::Limit(count)
    }

    /// Encode as the JSON query object the service parses
    pub fn to_wire(&self) -> String {
        let value = match self {
            Self::Equal { attribute, values } => serde_json::json!({
                "method": "equal",
                "attribute": attribute,
                "values": values,
            }),
            Self::OrderDesc { attribute } => serde_json::json!({
                "method": "orderDesc",
                "attribute": attribute,
            }),
            Self::Limit(count) => serde_json::json!({
                "method": "limit",
                "values": [count],
            }),
        };
        value.to_string()
    }
}

/// Reference to a file stored in a service bucket
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileRef {
    /// Server-assigned file id
    #[serde(rename = "$id")]
    pub id: String,
    /// Original file name
    #[serde(default)]
    pub name: String,
    /// MIME type reported by the service
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,
    /// Size in bytes
    #[serde(rename = "sizeOriginal", default)]
    pub size: u64,
}
