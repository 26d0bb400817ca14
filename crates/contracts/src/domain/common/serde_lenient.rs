//! Lenient field decoding.
//!
//! The collection service does not guarantee element shape. A field that is
//! missing (`#[serde(default)]`) or `null` decodes to its default instead of
//! failing the whole collection.

use serde::{Deserialize, Deserializer};

pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
