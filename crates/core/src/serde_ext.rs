//! Serde helpers for partial-update DTOs.

use serde::{Deserialize, Deserializer};

/// Distinguish an absent key from an explicit `null`.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]` on an
/// `Option<Option<T>>` field: a missing key stays `None` (leave unchanged),
/// `null` becomes `Some(None)` (clear), and a value becomes `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
