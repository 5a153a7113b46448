use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use validator::Validate;

/// Order in which a collection is listed on the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Most recently created first.
    NewestFirst,
    /// The order records were inserted in.
    Insertion,
}

/// A content collection whose records the admin dashboard edits.
///
/// Implementors are the collection's field set. The store wraps them in a [`Document`]
/// carrying the server-assigned id and creation time.
pub trait Content:
    Serialize + DeserializeOwned + Validate + Clone + Send + Sync + Unpin + 'static
{
    /// Partial update; fields that are present overwrite the stored value.
    type Patch: DeserializeOwned + Send + 'static;

    /// Collection name, also the route segment under `/api`.
    const COLLECTION: &'static str;
    /// Singular display name used in response messages.
    const LABEL: &'static str;
    const ORDER: ListOrder;

    fn apply(&mut self, patch: Self::Patch);
}

/// A stored record as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: T,
    pub created_at: DateTime<Utc>,
}

/// Overwrites `slot` when the patch carries a value.
pub(crate) fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
