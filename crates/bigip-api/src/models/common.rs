// Envelopes shared by every tm endpoint

use serde::{Deserialize, Serialize};

/// Collection response: `{ "kind": "...collectionstate", "items": [...] }`.
///
/// Empty collections omit `items` entirely.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection<T> {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub self_link: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Error body returned with non-2xx statuses.
///
/// ```json
/// { "code": 404, "message": "01020036:3: The requested ... was not found.", "errorStack": [] }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_stack: Vec<String>,
}

/// An expanded subcollection: `{ "link": "...", "isSubcollection": true, "items": [...] }`.
///
/// Policies carry rules this way, and rules carry their actions and
/// conditions the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcollection<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subcollection: Option<bool>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Subcollection<T> {
    /// Wrap items for sending; `None` when there is nothing to send.
    pub fn from_items(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self {
                link: None,
                is_subcollection: None,
                items,
            })
        }
    }

    /// Unwrap the items of an optional subcollection.
    pub fn into_items(collection: Option<Self>) -> Vec<T> {
        collection.map(|c| c.items).unwrap_or_default()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
