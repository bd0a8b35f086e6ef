//! Receipt split handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use core_kernel::ReceiptId;
use domain_split::{
    line_item_breakdown, process_receipt, LineItemBreakdown, ReceiptRequest, SplitRecord,
    SplitResult,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::receipt::*;
use crate::{error::ApiError, AppState};

/// Splits a receipt and returns the per-person breakdown
pub async fn process(
    Json(body): Json<ProcessReceiptRequest>,
) -> Result<Json<SplitResult>, ApiError> {
    body.validate()?;
    body.params.validate()?;
    let request = ReceiptRequest::try_from(&body)?;
    Ok(Json(process_receipt(&request)?))
}

/// Spreads the receipt's charges over its line items
pub async fn breakdown(
    Json(body): Json<BreakdownRequest>,
) -> Result<Json<LineItemBreakdown>, ApiError> {
    body.validate()?;
    let (items, charges, party_size) = body.to_parts()?;
    Ok(Json(line_item_breakdown(&items, &charges, party_size)?))
}

/// Splits a receipt as reported by the extraction service
pub async fn extracted(
    Json(body): Json<ExtractedSplitRequest>,
) -> Result<Json<SplitResult>, ApiError> {
    body.params.validate()?;
    let request = ReceiptRequest::try_from(body)?;
    Ok(Json(process_receipt(&request)?))
}

/// Splits a receipt and stores one record per person
pub async fn record_splits(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ProcessReceiptRequest>,
) -> Result<(StatusCode, Json<RecordedSplitResponse>), ApiError> {
    body.validate()?;
    body.params.validate()?;
    let receipt_id = ReceiptId::from(id);
    let request = ReceiptRequest::try_from(&body)?;
    let split = process_receipt(&request)?;
    let records = SplitRecord::from_result(receipt_id, &request, &split)?;

    state
        .splits
        .replace_for_receipt(receipt_id, records.clone())
        .await?;

    info!(receipt_id = %receipt_id, records = records.len(), "Split recorded");

    Ok((
        StatusCode::CREATED,
        Json(RecordedSplitResponse {
            receipt_id,
            split,
            records,
        }),
    ))
}

/// Lists the records stored for a receipt
pub async fn list_splits(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<SplitRecord>>, ApiError> {
    let records = state.splits.list_by_receipt(ReceiptId::from(id)).await?;
    Ok(Json(records))
}
