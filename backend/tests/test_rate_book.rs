//! Tests for rate book loading, validation, and lookups

use court_booking_core_rs::{
    Coach, Court, CourtType, EquipmentItem, PeakSurcharge, PricingRules, RateBook, RateBookError,
};

/// Helper to create a small valid catalog
fn sample_book() -> RateBook {
    RateBook {
        courts: vec![
            Court {
                id: "court-1".to_string(),
                name: "Court 1".to_string(),
                kind: CourtType::Indoor,
                base_rate: 2000,
            },
            Court {
                id: "court-2".to_string(),
                name: "Court 2".to_string(),
                kind: CourtType::Outdoor,
                base_rate: 1500,
            },
        ],
        equipment: vec![EquipmentItem {
            id: "racket".to_string(),
            name: "Racket".to_string(),
            price: 500,
        }],
        coaches: vec![Coach {
            id: "coach-1".to_string(),
            name: "Ava".to_string(),
            hourly_rate: 1500,
        }],
        rules: PricingRules::default(),
    }
}

#[test]
fn test_valid_book_passes_validation() {
    assert_eq!(sample_book().validate(), Ok(()));
}

#[test]
fn test_lookup_by_id() {
    let book = sample_book();
    assert_eq!(book.court("court-2").unwrap().base_rate, 1500);
    assert_eq!(book.equipment_item("racket").unwrap().price, 500);
    assert_eq!(book.coach("coach-1").unwrap().name, "Ava");
    assert!(book.court("court-9").is_none());
}

#[test]
fn test_duplicate_court_id_rejected() {
    let mut book = sample_book();
    book.courts.push(book.courts[0].clone());
    assert_eq!(
        book.validate(),
        Err(RateBookError::DuplicateId {
            kind: "court",
            id: "court-1".to_string()
        })
    );
}

#[test]
fn test_negative_price_rejected() {
    let mut book = sample_book();
    book.equipment[0].price = -500;
    assert_eq!(
        book.validate(),
        Err(RateBookError::NegativeAmount {
            kind: "equipment",
            id: "racket".to_string()
        })
    );
}

#[test]
fn test_negative_flat_surcharge_rejected() {
    let mut book = sample_book();
    book.rules
        .surcharges
        .insert(CourtType::Indoor, PeakSurcharge::Flat(-100));
    assert!(matches!(
        book.validate(),
        Err(RateBookError::NegativeAmount {
            kind: "surcharge",
            ..
        })
    ));
}

#[test]
fn test_from_json_round_trip() {
    let book = sample_book();
    let json = serde_json::to_string(&book).unwrap();
    let loaded = RateBook::from_json(&json).unwrap();
    assert_eq!(loaded, book);
}

#[test]
fn test_from_json_defaults_rules_when_absent() {
    let book = RateBook::from_json(
        r#"{
            "courts": [
                { "id": "court-1", "name": "Court 1", "kind": "indoor", "base_rate": 2000 }
            ],
            "equipment": [],
            "coaches": []
        }"#,
    )
    .unwrap();
    assert_eq!(book.rules, PricingRules::default());
}

#[test]
fn test_from_json_rejects_garbage() {
    assert!(matches!(
        RateBook::from_json("not json"),
        Err(RateBookError::Parse(_))
    ));
}

#[test]
fn test_from_json_runs_validation() {
    let mut book = sample_book();
    book.coaches[0].hourly_rate = -1;
    let json = serde_json::to_string(&book).unwrap();
    assert_eq!(
        RateBook::from_json(&json),
        Err(RateBookError::NegativeAmount {
            kind: "coach",
            id: "coach-1".to_string()
        })
    );
}

#[test]
fn test_empty_window_rejected_by_validation() {
    let mut book = sample_book();
    // Bypass the panicking constructor: hand the validator a start >= end
    // window the way a JSON config could.
    let mut window = book.rules.peak_windows[0];
    std::mem::swap(&mut window.start, &mut window.end);
    book.rules.peak_windows[0] = window;
    assert!(matches!(
        book.validate(),
        Err(RateBookError::EmptyWindow { .. })
    ));
}
