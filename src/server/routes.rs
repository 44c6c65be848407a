//! Route handlers.

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::core::{ConvertOptions, RawRecord};
use crate::optima;

use super::envelope::{ConvertFailure, ConvertSuccess, timestamp};

/// Query switches for conversion endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ConvertParams {
    /// Fail on malformed values and missing required fields instead of
    /// substituting defaults.
    #[serde(default)]
    pub strict: bool,
}

/// `GET /` — service description.
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "message": "XML converter API for Comarch Optima",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/test": "Test conversion with sample data",
            "/convert/single": "Convert single row (POST)",
        },
        "status": "active",
    }))
}

/// `GET /test` — run the pipeline against the built-in sample record.
pub async fn test_convert() -> Response {
    match optima::convert(&RawRecord::sample(), ConvertOptions::default()) {
        Ok(conversion) => (
            StatusCode::OK,
            Json(ConvertSuccess {
                success: true,
                message: "Test conversion successful".to_string(),
                xml_content: conversion.xml,
                processed_fields: None,
                missing_fields: None,
                timestamp: timestamp(),
            }),
        )
            .into_response(),
        Err(err) => {
            error!("test conversion failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ConvertFailure::new(err.to_string())),
            )
                .into_response()
        }
    }
}

/// `POST /convert/single` — convert one record.
///
/// The body must be a non-empty JSON object under any supported key
/// convention. `?strict=true` switches the conversion policy.
pub async fn convert_single(
    Query(params): Query<ConvertParams>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let payload = match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            warn!("rejected request body: {rejection}");
            return (
                StatusCode::BAD_REQUEST,
                Json(ConvertFailure::new(format!("invalid JSON body: {rejection}"))),
            )
                .into_response();
        }
    };

    let Some(raw) = RawRecord::from_value(payload) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ConvertFailure::new("request body must be a JSON object")),
        )
            .into_response();
    };
    if raw.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ConvertFailure::new("request body carries no fields")),
        )
            .into_response();
    }

    let options = ConvertOptions {
        strict: params.strict,
    };
    info!(
        keys = raw.keys().len(),
        strict = options.strict,
        "converting record"
    );

    match optima::convert(&raw, options) {
        Ok(conversion) => {
            if !conversion.missing_fields.is_empty() {
                warn!(missing = ?conversion.missing_fields, "required fields defaulted");
            }
            (
                StatusCode::OK,
                Json(ConvertSuccess {
                    success: true,
                    message: "Conversion successful".to_string(),
                    xml_content: conversion.xml,
                    processed_fields: Some(raw.keys()),
                    missing_fields: Some(conversion.missing_fields),
                    timestamp: timestamp(),
                }),
            )
                .into_response()
        }
        Err(err) if err.is_input() => {
            warn!("conversion rejected: {err}");
            (
                StatusCode::BAD_REQUEST,
                Json(ConvertFailure::new(err.to_string())),
            )
                .into_response()
        }
        Err(err) => {
            error!("conversion failed: {err}");
            let failure = ConvertFailure {
                success: false,
                error: err.to_string(),
                trace: Some(format!("{err:?}")),
                received_data: serde_json::to_value(&raw).ok(),
                timestamp: timestamp(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(failure)).into_response()
        }
    }
}
