//! End-to-end happy path test.
//!
//! This test validates the complete identifier flow, verifying:
//!
//! 1. Building a format through editing operations
//! 2. Fixing validation errors surfaced by the validator
//! 3. Preview composition on a fixed date
//! 4. Saving the format and minting real identifiers against a mock backend
//! 5. Sequence values advancing across consecutive mints
//!
//! ## Running
//!
//! ```bash
//! cargo test -p shelfmark-e2e --test happy_path
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shelfmark_client::ApiClient;
use shelfmark_compose::{compose, ComposeContext};
use shelfmark_format::{
    validate, IdentifierFormat, InventoryId, TokenKind, TokenParams, ValidationReason,
};

/// Builds the INV-date-sequence format the way an editor session would:
/// add three tokens, then configure each one.
fn build_format() -> IdentifierFormat {
    let format = IdentifierFormat::new("-")
        .add_element(TokenKind::FixedText)
        .add_element(TokenKind::Date)
        .add_element(TokenKind::Sequence);

    // A freshly added fixedText token is unconfigured and must be flagged.
    let draft_errors = validate(&format);
    assert_eq!(draft_errors.len(), 1);
    assert_eq!(draft_errors[0].position, 1);
    assert_eq!(draft_errors[0].reason, ValidationReason::EmptyFixedText);

    let prefix_id = format.elements[0].id;
    let sequence_id = format.elements[2].id;

    let format = format
        .update_element(
            &prefix_id,
            TokenParams::FixedText {
                value: Some("INV".to_string()),
            },
        )
        .unwrap();
    let mut format = format
        .update_element(
            &sequence_id,
            TokenParams::Sequence {
                pad: 4,
                scope: shelfmark_format::SequenceScope::PerInventory,
            },
        )
        .unwrap();
    format.enabled = true;

    assert!(validate(&format).is_empty());
    format
}

#[test]
fn editing_preview_pipeline() {
    let format = build_format();

    // Preview on a fixed date with the synthetic sequence value.
    let ctx = ComposeContext::preview().with_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert_eq!(compose(&format, &ctx), "INV-20240305-0001");

    // Reordering keeps the same tokens and changes only their order.
    let date_id = format.elements[1].id;
    let reordered = format.move_element(&date_id, 0);
    assert_eq!(compose(&reordered, &ctx), "20240305-INV-0001");

    // The original value is untouched; previews are side-effect free.
    assert_eq!(compose(&format, &ctx), "INV-20240305-0001");
}

#[tokio::test]
async fn save_and_mint_against_backend() {
    let server = MockServer::start().await;
    let inventory = InventoryId::new();
    let format = build_format();

    Mock::given(method("PUT"))
        .and(path(format!("/v1/inventories/{inventory}/custom-id")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    // Counter at 41; the backend's increment-and-read hands out 42 then 43.
    Mock::given(method("POST"))
        .and(path("/v1/sequences/allocate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": 42})))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/sequences/allocate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": 43})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri(), Some("token")).unwrap();
    client.save_format(&inventory, &format).await.unwrap();

    let today = chrono::Utc::now().format("%Y%m%d").to_string();

    let first = client
        .mint_identifier(&inventory, &format, BTreeMap::new())
        .await
        .unwrap();
    assert_eq!(first, format!("INV-{today}-0042"));

    let second = client
        .mint_identifier(&inventory, &format, BTreeMap::new())
        .await
        .unwrap();
    assert_eq!(second, format!("INV-{today}-0043"));
}

#[tokio::test]
async fn mint_with_field_reference_uses_record_values() {
    let server = MockServer::start().await;
    let inventory = InventoryId::new();

    let format = IdentifierFormat::new("-")
        .add_element(TokenKind::FieldReference)
        .add_element(TokenKind::RandomDigits6);
    let field_id = format.elements[0].id;
    let format = format
        .update_element(
            &field_id,
            TokenParams::FieldReference {
                key: "brand".to_string(),
            },
        )
        .unwrap();

    let client = ApiClient::new(&server.uri(), None).unwrap();
    let identifier = client
        .mint_identifier(
            &inventory,
            &format,
            BTreeMap::from([("brand".to_string(), "Acme".to_string())]),
        )
        .await
        .unwrap();

    let (brand, digits) = identifier.split_once('-').unwrap();
    assert_eq!(brand, "Acme");
    assert_eq!(digits.len(), 6);
    assert!(digits.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn mint_refusal_leaves_no_backend_traffic() {
    let server = MockServer::start().await;
    let inventory = InventoryId::new();

    let draft = IdentifierFormat::new("-").add_element(TokenKind::FixedText);

    let client = ApiClient::new(&server.uri(), None).unwrap();
    let err = client
        .mint_identifier(&inventory, &draft, BTreeMap::new())
        .await
        .unwrap_err();

    assert!(err.validation_errors().is_some());
    // No mocks mounted; any request would have failed the test server-side.
    assert!(server.received_requests().await.unwrap().is_empty());
}
