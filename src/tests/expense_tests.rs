use super::dec;
use crate::core::errors::SplitviewError;
use crate::core::models::{Category, ExpenseDraft, SplitMode};
use serde_json::json;

fn draft(split_mode: SplitMode, split_with: Option<&str>) -> ExpenseDraft {
    ExpenseDraft {
        name: "  Dinner at Olive  ".to_string(),
        amount: "85.50".to_string(),
        category: Some(Category::Food),
        split_mode: Some(split_mode),
        split_with: split_with.map(String::from),
    }
}

fn invalid_field(result: Result<impl std::fmt::Debug, SplitviewError>) -> String {
    match result {
        Err(SplitviewError::InvalidInput(field, _)) => field,
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_valid_draft_builds_request_body() {
    let expense = draft(SplitMode::User1PaidSplitEqual, Some(" alice ")).validate().unwrap();
    assert_eq!(expense.name, "Dinner at Olive");
    assert_eq!(expense.amount, dec("85.50"));
    assert_eq!(expense.split_with.as_deref(), Some("alice"));

    let body = serde_json::to_value(&expense).unwrap();
    assert_eq!(
        body,
        json!({
            "name": "Dinner at Olive",
            "amount": 85.5,
            "category": "food",
            "split_mode": "user1_paid_split_equal",
            "split_with": "alice"
        })
    );
}

#[test]
fn test_self_paid_no_split_needs_no_counterparty() {
    let expense = draft(SplitMode::User1PaidNoSplit, Some("   ")).validate().unwrap();
    assert_eq!(expense.split_with, None);
    assert_eq!(serde_json::to_value(&expense).unwrap()["split_with"], json!(null));
}

#[test]
fn test_counterparty_required_for_shared_modes() {
    for mode in [
        SplitMode::User1PaidSplitEqual,
        SplitMode::User2PaidSplitEqual,
        SplitMode::User2PaidNoSplit,
    ] {
        assert_eq!(invalid_field(draft(mode, None).validate()), "split_with");
    }
}

#[test]
fn test_name_validation() {
    let mut blank = draft(SplitMode::User1PaidNoSplit, None);
    blank.name = "   ".to_string();
    assert_eq!(invalid_field(blank.validate()), "name");

    let mut long = draft(SplitMode::User1PaidNoSplit, None);
    long.name = "x".repeat(256);
    assert_eq!(invalid_field(long.validate()), "name");

    let mut control = draft(SplitMode::User1PaidNoSplit, None);
    control.name = "Din\u{7}ner".to_string();
    assert_eq!(invalid_field(control.validate()), "name");
}

#[test]
fn test_amount_validation() {
    for bad in ["", "abc", "0", "-5", "12.345"] {
        let mut d = draft(SplitMode::User1PaidNoSplit, None);
        d.amount = bad.to_string();
        assert_eq!(invalid_field(d.validate()), "amount", "amount {:?} should be rejected", bad);
    }

    let mut trailing_zero = draft(SplitMode::User1PaidNoSplit, None);
    trailing_zero.amount = "12.500".to_string();
    assert!(trailing_zero.validate().is_ok());
}

#[test]
fn test_category_and_mode_must_be_known() {
    let mut no_category = draft(SplitMode::User1PaidNoSplit, None);
    no_category.category = None;
    assert_eq!(invalid_field(no_category.validate()), "category");

    let mut odd_category = draft(SplitMode::User1PaidNoSplit, None);
    odd_category.category = Some(Category::from("pets"));
    assert_eq!(invalid_field(odd_category.validate()), "category");

    let mut no_mode = draft(SplitMode::User1PaidNoSplit, None);
    no_mode.split_mode = None;
    assert_eq!(invalid_field(no_mode.validate()), "split_mode");

    let odd_mode = draft(SplitMode::from("user3_paid"), Some("alice"));
    assert_eq!(invalid_field(odd_mode.validate()), "split_mode");
}
