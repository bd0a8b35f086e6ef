//! HTTP tests for the receipt split API
//!
//! Every test builds the full router with an in-memory split store and
//! drives it through `axum-test`.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use interface_api::{adapters::InMemorySplitRepository, config::ApiConfig, create_router};
use serde_json::{json, Value};
use uuid::Uuid;

fn server() -> TestServer {
    let app = create_router(ApiConfig::default(), Arc::new(InMemorySplitRepository::new()));
    TestServer::new(app).unwrap()
}

fn steak_dinner() -> Value {
    json!({
        "items": [
            { "name": "Steak", "quantity": 1, "price": 30.0, "assigned_to": ["Alice"] },
            { "name": "Shared Appetizer", "quantity": 1, "price": 15.0 }
        ],
        "additional_charges": { "tax": 4.5, "tip": 9.0 },
        "split_method": "itemized",
        "assigned_parties": ["Alice", "Bob"]
    })
}

// ============================================================================
// Health Tests
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = server().get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
    }
}

// ============================================================================
// Process Tests
// ============================================================================

mod process_tests {
    use super::*;

    #[tokio::test]
    async fn test_equal_split() {
        let response = server()
            .post("/api/v1/receipts/process")
            .json(&json!({
                "items": [
                    { "name": "Burger", "quantity": 1, "price": 10.0 },
                    { "name": "Fries", "quantity": 1, "price": 5.0 }
                ],
                "additional_charges": { "tax": 1.5, "tip": 3.0 },
                "split_method": "equal",
                "party_size": 3
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["split_method"], "equal");
        assert_eq!(body["subtotal"], "15.00");
        assert_eq!(body["total_paid"], "19.50");
        assert_eq!(body["per_person"]["base_amount"], "5.00");
        assert_eq!(body["per_person"]["charges"]["tax"], "0.50");
        assert_eq!(body["per_person"]["charges"]["tip"], "1.00");
        assert_eq!(body["per_person"]["total"], "6.50");
    }

    #[tokio::test]
    async fn test_itemized_split() {
        let response = server()
            .post("/api/v1/receipts/process")
            .json(&steak_dinner())
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["person_totals"]["Alice"]["total"], "48.75");
        assert_eq!(body["person_totals"]["Bob"]["total"], "9.75");
        assert_eq!(body["person_totals"]["Bob"]["charges"]["tax"], "0.75");
    }

    #[tokio::test]
    async fn test_missing_split_method_defaults_to_equal() {
        let response = server()
            .post("/api/v1/receipts/process")
            .json(&json!({ "items": [{ "name": "Tea", "quantity": 2, "price": 1.25 }] }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["split_method"], "equal");
        assert_eq!(body["per_person"]["total"], "2.50");
    }

    #[tokio::test]
    async fn test_unassigned_party_is_bad_request() {
        let response = server()
            .post("/api/v1/receipts/process")
            .json(&json!({
                "items": [{ "name": "Wine", "quantity": 1, "price": 28.0, "assigned_to": ["Zed"] }],
                "split_method": "itemized",
                "assigned_parties": ["Alice"]
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "unassigned_party");
        assert_eq!(body["field"], "items[0].assigned_to");
        assert!(body["message"].as_str().unwrap().contains("Zed"));
    }

    #[tokio::test]
    async fn test_zero_party_size_is_bad_request() {
        let response = server()
            .post("/api/v1/receipts/process")
            .json(&json!({ "items": [], "party_size": 0 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "invalid_input");
        assert_eq!(body["field"], "party_size");
    }

    #[tokio::test]
    async fn test_zero_quantity_names_field() {
        let response = server()
            .post("/api/v1/receipts/process")
            .json(&json!({
                "items": [
                    { "name": "Tea", "quantity": 1, "price": 2.0 },
                    { "name": "Cake", "quantity": 0, "price": 4.0 }
                ]
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error"], "invalid_input");
        assert_eq!(body["field"], "items[1].quantity");
    }

    #[tokio::test]
    async fn test_itemized_without_items_is_bad_request() {
        let response = server()
            .post("/api/v1/receipts/process")
            .json(&json!({
                "items": [],
                "additional_charges": { "tax": 1.0 },
                "split_method": "itemized",
                "assigned_parties": ["Alice"]
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["field"], "items");
    }
}

// ============================================================================
// Breakdown and Extraction Tests
// ============================================================================

mod breakdown_tests {
    use super::*;

    #[tokio::test]
    async fn test_line_item_breakdown() {
        let response = server()
            .post("/api/v1/receipts/breakdown")
            .json(&json!({
                "items": [
                    { "name": "Pasta", "quantity": 1, "price": 30.0 },
                    { "name": "Bread", "quantity": 2, "price": 5.0 }
                ],
                "additional_charges": { "tax": 4.0, "tip": 6.0 },
                "party_size": 2
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["total_paid"], "50.00");
        assert_eq!(body["per_person_cost"], "25.00");
        assert_eq!(body["items"][0]["total_with_charges"], "37.50");
        assert_eq!(body["items"][1]["total_with_charges"], "12.50");
    }

    #[tokio::test]
    async fn test_oversized_party_is_unprocessable() {
        let response = server()
            .post("/api/v1/receipts/breakdown")
            .json(&json!({
                "items": [{ "name": "Pasta", "quantity": 1, "price": 30.0 }],
                "party_size": 1001
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["field"], "party_size");
    }

    #[tokio::test]
    async fn test_extracted_receipt_split() {
        let response = server()
            .post("/api/v1/receipts/extracted")
            .json(&json!({
                "receipt": {
                    "items": [
                        { "name": "Burger", "price": 10.0 },
                        { "name": "Fries", "quantity": 1.0, "price": 5.0 }
                    ],
                    "tax": 1.5,
                    "tip": 3.0
                },
                "split_method": "equal",
                "party_size": 3
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["per_person"]["total"], "6.50");
    }

    #[tokio::test]
    async fn test_malformed_extraction_is_unprocessable() {
        let response = server()
            .post("/api/v1/receipts/extracted")
            .json(&json!({
                "receipt": { "items": [{ "name": "Mystery" }] },
                "party_size": 2
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error"], "malformed_upstream_data");
        assert_eq!(body["field"], "items[0].price");
    }
}

// ============================================================================
// Split Record Tests
// ============================================================================

mod record_tests {
    use super::*;

    #[tokio::test]
    async fn test_record_then_list() {
        let server = server();
        let receipt = Uuid::new_v4();
        let path = format!("/api/v1/receipts/{receipt}/splits");

        let created = server.post(&path).json(&steak_dinner()).await;
        created.assert_status(StatusCode::CREATED);
        let body: Value = created.json();
        assert_eq!(body["records"].as_array().unwrap().len(), 2);
        assert_eq!(body["split"]["total_paid"], "58.50");

        let listed = server.get(&path).await;
        listed.assert_status_ok();
        let records: Value = listed.json();
        assert_eq!(records[0]["member"], "Alice");
        assert_eq!(records[0]["total"], "48.75");
        assert_eq!(records[1]["member"], "Bob");
        assert_eq!(records[1]["total"], "9.75");
    }

    #[tokio::test]
    async fn test_equal_split_records_guests() {
        let server = server();
        let path = format!("/api/v1/receipts/{}/splits", Uuid::new_v4());

        server
            .post(&path)
            .json(&json!({
                "items": [{ "name": "Pizza", "quantity": 1, "price": 20.0 }],
                "party_size": 2
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let records: Value = server.get(&path).await.json();
        assert_eq!(records[0]["member"], "guest-1");
        assert_eq!(records[1]["member"], "guest-2");
        assert_eq!(records[1]["total"], "10.00");
    }

    #[tokio::test]
    async fn test_oversized_party_stores_nothing() {
        let server = server();
        let path = format!("/api/v1/receipts/{}/splits", Uuid::new_v4());

        let response = server
            .post(&path)
            .json(&json!({
                "items": [{ "name": "Pizza", "quantity": 1, "price": 20.0 }],
                "party_size": 4_000_000_000_i64
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error"], "invalid_input");
        assert_eq!(body["field"], "party_size");

        server
            .get(&path)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_receipt_is_not_found() {
        let response = server()
            .get(&format!("/api/v1/receipts/{}/splits", Uuid::new_v4()))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["error"], "not_found");
    }
}
