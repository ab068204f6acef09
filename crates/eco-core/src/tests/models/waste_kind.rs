use crate::{CoreError, WasteKind};

use std::str::FromStr;

#[test]
fn test_round_trip_all_kinds() {
    for kind in WasteKind::ALL {
        assert_eq!(WasteKind::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn test_from_str_rejects_unknown_kind() {
    let result = WasteKind::from_str("plastico");
    assert!(matches!(
        result,
        Err(CoreError::InvalidWasteKind { .. })
    ));
}

#[test]
fn test_capivara_award_per_kind() {
    assert_eq!(WasteKind::Electronic.capivaras(), 50);
    assert_eq!(WasteKind::Metal.capivaras(), 30);
    assert_eq!(WasteKind::Organic.capivaras(), 20);
    assert_eq!(WasteKind::Recyclable.capivaras(), 20);
    assert_eq!(WasteKind::Glass.capivaras(), 20);
}

#[test]
fn test_labels_are_localized() {
    assert_eq!(WasteKind::Organic.label(), "Orgânico");
    assert_eq!(WasteKind::Glass.label(), "Vidro");
}
