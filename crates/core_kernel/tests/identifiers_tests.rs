//! Unit tests for the Identifiers module
//!
//! Tests cover identifier creation, parsing, conversion, and display
//! formatting, plus the string-backed party member identifier.

use core_kernel::{MemberId, ReceiptId, SplitId};
use uuid::Uuid;

mod receipt_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = ReceiptId::new();
        let id2 = ReceiptId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_display_has_prefix() {
        let id = ReceiptId::new();
        assert!(id.to_string().starts_with("RCT-"));
        assert_eq!(ReceiptId::prefix(), "RCT");
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let uuid = Uuid::new_v4();
        let with_prefix: ReceiptId = format!("RCT-{uuid}").parse().unwrap();
        let without_prefix: ReceiptId = uuid.to_string().parse().unwrap();
        assert_eq!(with_prefix, without_prefix);
        assert_eq!(*with_prefix.as_uuid(), uuid);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("RCT-not-a-uuid".parse::<ReceiptId>().is_err());
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let uuid = Uuid::new_v4();
        let id = ReceiptId::from(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));
    }
}

mod split_id_tests {
    use super::*;

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = SplitId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = SplitId::new_v7();
        assert!(id1 < id2);
    }

    #[test]
    fn test_uuid_round_trip() {
        let uuid = Uuid::new_v4();
        let back: Uuid = SplitId::from(uuid).into();
        assert_eq!(uuid, back);
    }
}

mod member_id_tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let id: MemberId = " Bob ".parse().unwrap();
        assert_eq!(id.as_str(), "Bob");
        assert_eq!(id.to_string(), "Bob");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(MemberId::parse("").is_err());
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let alice = MemberId::parse("Alice").unwrap();
        let bob = MemberId::parse("Bob").unwrap();
        assert!(alice < bob);
    }

    #[test]
    fn test_serializes_transparently() {
        let id = MemberId::parse("Alice").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"Alice\"");
    }
}
