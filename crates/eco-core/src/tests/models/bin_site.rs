use crate::{BinSite, BinStatus, WasteKind};

fn derby_square() -> BinSite {
    BinSite {
        id: 1,
        location: "Praça do Derby".to_string(),
        kind: WasteKind::Recyclable,
        status: BinStatus::Active,
        capacity_pct: 75,
        distance_km: 0.3,
        latitude: -8.0522,
        longitude: -34.8956,
    }
}

#[test]
fn test_matches_no_filter() {
    assert!(derby_square().matches(None));
}

#[test]
fn test_matches_same_kind() {
    assert!(derby_square().matches(Some(WasteKind::Recyclable)));
}

#[test]
fn test_does_not_match_other_kind() {
    assert!(!derby_square().matches(Some(WasteKind::Organic)));
}

#[test]
fn test_status_is_active() {
    assert!(BinStatus::Active.is_active());
    assert!(!BinStatus::Full.is_active());
    assert!(!BinStatus::Offline.is_active());
}
