use serde::de::DeserializeOwned;
use serde::Serialize;

/// Contract every API-backed entity implements.
///
/// A resource maps to one REST collection: `GET {BASE_PATH}` lists it,
/// `POST {BASE_PATH}` creates from a draft, `PUT/DELETE {BASE_PATH}/{id}`
/// replace and remove single records. Identifiers are server-assigned
/// integers carried under the `ID` wire key.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Payload posted when creating a record, and the editable part of an
    /// existing one. Has no identifier.
    type Draft: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Collection path on the API, e.g. `/bank`.
    const BASE_PATH: &'static str;

    fn id(&self) -> i32;

    /// Singular display name, e.g. "Bank".
    fn element_name() -> &'static str;

    /// Plural display name used for tabs and list headers, e.g. "Banks".
    fn list_name() -> &'static str;
}
