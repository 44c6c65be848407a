//! HTTP surface checks against the assembled router.

#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use rejestr::server::build_router;
use serde_json::{Value, json};
use tower::util::ServiceExt;

async fn get(uri: &str) -> Response {
    build_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_raw(uri: &str, body: &str) -> Response {
    build_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn post_json(uri: &str, payload: Value) -> Response {
    post_raw(uri, &payload.to_string()).await
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn full_payload() -> Value {
    json!({
        "0": "FV/10/2025",
        "1": "2025-05-21",
        "5": "526-030-50-06",
        "6": "Hurtownia Centralna",
        "13": "1000,00",
        "14": "230,00",
        "15": "1230,00",
    })
}

// --- Service description ---

#[tokio::test]
async fn root_describes_the_service() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "XML converter API for Comarch Optima");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["status"], "active");
    assert!(body["endpoints"]["/convert/single"].is_string());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = get("/convert/batch").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// --- Self test ---

#[tokio::test]
async fn test_endpoint_converts_the_builtin_sample() {
    let response = get("/test").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Test conversion successful");
    let xml = body["xml_content"].as_str().unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<REJESTR>ZAKUP</REJESTR>"));
    assert!(xml.contains("<NIP>1234567890</NIP>"));
    assert!(body.get("processed_fields").is_none());
    assert!(body.get("missing_fields").is_none());
    assert!(body["timestamp"].is_string());
}

// --- Single conversion ---

#[tokio::test]
async fn convert_single_returns_document_and_field_lists() {
    let response = post_json("/convert/single", full_payload()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let xml = body["xml_content"].as_str().unwrap();
    assert!(xml.contains("<NUMER><![CDATA[FV/10/2025]]></NUMER>"));
    assert!(xml.contains("<NETTO>1000.00</NETTO>"));
    assert!(xml.contains("<WALUTA>PLN</WALUTA>"));

    let processed = body["processed_fields"].as_array().unwrap();
    assert_eq!(processed.len(), 7);
    assert!(processed.contains(&json!("0")));
    assert!(body["missing_fields"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn processed_fields_echo_keys_in_request_order() {
    let payload = json!({
        "6": "Hurtownia Centralna",
        "0": "FV/14/2025",
        "15": "1230,00",
        "13": "1000,00",
    });
    let response = post_json("/convert/single", payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["processed_fields"], json!(["6", "0", "15", "13"]));
}

#[tokio::test]
async fn range_limit_amounts_convert_instead_of_crashing() {
    let payload = json!({
        "0": "FV/15/2025",
        "13": "79228162514264337593543950335",
        "14": "79228162514264337593543950335",
    });
    let response = post_json("/convert/single", payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let xml = body["xml_content"].as_str().unwrap();
    assert!(xml.contains("<NETTO>999999.99</NETTO>"));
    assert!(xml.contains("<KWOTA_PLAT>999999.99</KWOTA_PLAT>"));
}

#[tokio::test]
async fn convert_single_reports_defaulted_required_fields() {
    let response = post_json("/convert/single", json!({ "0": "FV/11/2025" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let missing = body["missing_fields"].as_array().unwrap();
    assert_eq!(missing.len(), 6);
    assert!(missing.contains(&json!("sellerName")));
    assert!(missing.contains(&json!("grossAmount")));
    assert!(!missing.contains(&json!("invoiceNumber")));
}

#[tokio::test]
async fn convert_single_accepts_named_keys_with_messy_values() {
    let payload = json!({
        "invoiceNumber": "FV/12/2025",
        "issueDate": 45807,
        "sellerTaxId": "NIP 123-456-78-90",
        "sellerName": "Firma \"Krzak\" Sp. z o.o.",
        "netAmount": "500,00",
        "vatAmount": "115,00",
        "grossAmount": "615,00",
        "currency": "zł",
        "paymentMethod": "CASH",
    });
    let response = post_json("/convert/single", payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let xml = body["xml_content"].as_str().unwrap();
    assert!(xml.contains("<DATA_WYSTAWIENIA>2025-05-29</DATA_WYSTAWIENIA>"));
    assert!(xml.contains("<NIP>1234567890</NIP>"));
    assert!(xml.contains("<PODMIOT><![CDATA[Firma &quot;Krzak&quot; Sp. z o.o.]]></PODMIOT>"));
    assert!(xml.contains("<WALUTA>PLN</WALUTA>"));
    assert!(xml.contains("<FORMA_PLATNOSCI>gotówka</FORMA_PLATNOSCI>"));
}

// --- Request validation ---

#[tokio::test]
async fn empty_object_is_rejected() {
    let response = post_json("/convert/single", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "request body carries no fields");
}

#[tokio::test]
async fn non_object_body_is_rejected() {
    for raw in [json!([1, 2, 3]), json!("row"), json!(42)] {
        let response = post_json("/convert/single", raw).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "request body must be a JSON object");
    }
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let response = post_raw("/convert/single", "{\"0\": \"FV").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("invalid JSON body"));
}

// --- Strict mode ---

#[tokio::test]
async fn strict_mode_passes_clean_input() {
    let response = post_json("/convert/single?strict=true", full_payload()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn strict_mode_rejects_missing_required_fields() {
    let response = post_json("/convert/single?strict=true", json!({ "0": "FV/13/2025" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("missing required fields"));
    assert!(body["error"].as_str().unwrap().contains("sellerTaxId"));
}

#[tokio::test]
async fn strict_mode_rejects_malformed_values() {
    let mut payload = full_payload();
    payload["13"] = json!("tysiąc");
    let response = post_json("/convert/single?strict=true", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("netAmount"));
}

#[tokio::test]
async fn lenient_mode_defaults_the_same_malformed_values() {
    let mut payload = full_payload();
    payload["13"] = json!("tysiąc");
    let response = post_json("/convert/single", payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let xml = body["xml_content"].as_str().unwrap();
    assert!(xml.contains("<NETTO>1.00</NETTO>"));
}
