//! Persisted Layout
//!
//! JSON array of items, the value stored under the persistence key.

use crate::domain::{DomainResult, Item};

/// Serialize the list to the stored JSON text
pub fn encode(items: &[Item]) -> DomainResult<String> {
    Ok(serde_json::to_string(items)?)
}

/// Parse stored JSON text back into a list
///
/// No repair happens here; invariant fixes are applied when the store
/// restores the list.
pub fn decode(raw: &str) -> DomainResult<Vec<Item>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_decode_legacy_array() {
        let raw = r#"[
            {"description":"B","completed":false},
            {"description":"A","completed":true,"completedDate":"19/10/2026, 14:03:22"}
        ]"#;
        let items = decode(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "B");
        assert_eq!(items[1].completed_at.as_deref(), Some("19/10/2026, 14:03:22"));
        assert_ne!(items[0].id, items[1].id);
    }

    #[test]
    fn test_encode_keeps_order_and_ids() {
        let items = vec![Item::new("first"), Item::new("second")];
        let raw = encode(&items).unwrap();
        assert!(raw.find("first").unwrap() < raw.find("second").unwrap());
        assert_eq!(decode(&raw).unwrap(), items);
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(decode("{oops"), Err(DomainError::Codec(_))));
        // Valid JSON, wrong shape
        assert!(matches!(
            decode(r#"{"description":"not a list"}"#),
            Err(DomainError::Codec(_))
        ));
        assert!(matches!(
            decode(r#"[{"completed":true}]"#),
            Err(DomainError::Codec(_))
        ));
    }
}
