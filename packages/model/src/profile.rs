//! Owner data consumed by section renderers.
//!
//! Identity is resolved by an external collaborator; the engine only ever
//! receives this already-assembled profile and never performs auth.

use serde::{Deserialize, Serialize};

/// Resolved media reference. Upload mechanics live elsewhere; the engine
/// only stores and renders the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaRef {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerReview {
    pub author: String,
    /// 1–5 stars.
    pub rating: u8,
    pub comment: String,
}

/// The professional who owns the portfolio being composed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerProfile {
    pub id: String,
    pub name: String,
    pub headline: String,
    pub bio: String,
    pub avatar: String,
    pub skills: Vec<String>,
    pub media: Vec<MediaRef>,
    pub reviews: Vec<OwnerReview>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_from_partial_json() {
        let profile: OwnerProfile =
            serde_json::from_str(r#"{"id": "pro-7", "name": "Ada"}"#).unwrap();
        assert_eq!(profile.name, "Ada");
        assert!(profile.reviews.is_empty());
    }
}
