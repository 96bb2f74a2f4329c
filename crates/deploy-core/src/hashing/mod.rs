pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::hash_str;

use serde::Serialize;

/// Serializa un valor, lo canonicaliza y devuelve su hash hex.
pub fn hash_value<T: Serialize>(value: &T) -> String {
    let v = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
    hash_str(&to_canonical_json(&v))
}
