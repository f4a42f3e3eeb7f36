//! Lenient decoding of nullable text columns.
//!
//! Joined or optional columns (`uom_name`, `datetime`...) come back as `null`
//! when the row has no value; those read as an empty string.

use serde::{Deserialize, Deserializer};

pub fn de_string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
