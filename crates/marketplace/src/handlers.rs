//! Axum REST handlers for the marketplace API.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::applications::ApplicationEngine;
use crate::auth;
use crate::browse;
use crate::models::*;
use crate::store::MarketplaceStore;
use talentlink_core::MarketError;
use talentlink_media::{MediaService, RejectedUpload, UploadFile};

/// Shared marketplace state.
#[derive(Clone)]
pub struct MarketplaceState {
    pub store: Arc<MarketplaceStore>,
    pub engine: Arc<ApplicationEngine>,
    pub media: Arc<MediaService>,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn error_reply(e: MarketError) -> ErrorReply {
    let (status, code) = match &e {
        MarketError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        MarketError::InsufficientFunds { .. } => (StatusCode::CONFLICT, "insufficient_funds"),
        MarketError::InvalidTransition(_) => (StatusCode::CONFLICT, "invalid_transition"),
        MarketError::AlreadyApplied { .. } => (StatusCode::CONFLICT, "already_applied"),
        MarketError::NotAnApplicant { .. } => (StatusCode::CONFLICT, "not_an_applicant"),
        MarketError::TalentNotActive(_) => (StatusCode::FORBIDDEN, "talent_not_active"),
        MarketError::AlreadyProcessing { .. } => {
            (StatusCode::TOO_MANY_REQUESTS, "already_processing")
        }
        MarketError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    };
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: e.to_string(),
        }),
    )
}

// ─── Auth ──────────────────────────────────────────────────────────────────

pub async fn handle_login(
    State(state): State<MarketplaceState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ErrorReply> {
    match auth::authenticate(&state.store, &req) {
        Ok(resp) => Ok(Json(resp)),
        Err(msg) => Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "auth_failed".to_string(),
                message: msg,
            }),
        )),
    }
}

// ─── Campaigns ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CampaignListQuery {
    pub founder_id: Option<Uuid>,
}

pub async fn list_campaigns(
    State(state): State<MarketplaceState>,
    Query(query): Query<CampaignListQuery>,
) -> Json<Vec<Campaign>> {
    let campaigns = match query.founder_id {
        Some(founder_id) => state.store.campaigns_for_founder(founder_id),
        None => state.store.list_campaigns(),
    };
    Json(campaigns)
}

pub async fn get_campaign(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, ErrorReply> {
    state.store.get_campaign(id).map(Json).map_err(error_reply)
}

pub async fn create_campaign(
    State(state): State<MarketplaceState>,
    Json(req): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<Campaign>), ErrorReply> {
    let campaign = state.store.create_campaign(req).map_err(error_reply)?;
    metrics::counter!("marketplace.campaigns.created").increment(1);
    Ok((StatusCode::CREATED, Json(campaign)))
}

pub async fn update_campaign(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCampaignRequest>,
) -> Result<Json<Campaign>, ErrorReply> {
    state
        .store
        .update_campaign(id, req)
        .map(Json)
        .map_err(error_reply)
}

pub async fn delete_campaign(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ErrorReply> {
    state.store.delete_campaign(id).map_err(error_reply)?;
    metrics::counter!("marketplace.campaigns.deleted").increment(1);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn pause_campaign(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, ErrorReply> {
    state
        .store
        .pause_campaign(id)
        .map(Json)
        .map_err(error_reply)
}

pub async fn resume_campaign(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, ErrorReply> {
    state
        .store
        .resume_campaign(id)
        .map(Json)
        .map_err(error_reply)
}

pub async fn complete_campaign(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, ErrorReply> {
    state
        .store
        .complete_campaign(id)
        .map(Json)
        .map_err(error_reply)
}

pub async fn reject_campaign(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, ErrorReply> {
    state
        .store
        .reject_campaign(id)
        .map(Json)
        .map_err(error_reply)
}

// ─── Applications ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ApplicantQuery {
    #[serde(default)]
    pub search: String,
}

pub async fn list_applicants(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ApplicantQuery>,
) -> Result<Json<Vec<Talent>>, ErrorReply> {
    browse::search_applicants(&state.store, id, &query.search)
        .map(Json)
        .map_err(error_reply)
}

pub async fn apply_to_campaign(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<Application>), ErrorReply> {
    let application = state
        .engine
        .apply(id, req.talent_id)
        .map_err(error_reply)?;
    Ok((StatusCode::CREATED, Json(application)))
}

pub async fn approve_applicant(
    State(state): State<MarketplaceState>,
    Path((id, talent_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApprovalOutcome>, ErrorReply> {
    state
        .engine
        .approve(id, talent_id)
        .map(Json)
        .map_err(error_reply)
}

pub async fn reject_applicant(
    State(state): State<MarketplaceState>,
    Path((id, talent_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Application>, ErrorReply> {
    state
        .engine
        .reject(id, talent_id)
        .map(Json)
        .map_err(error_reply)
}

// ─── Marketplace browsing ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MarketplaceQuery {
    pub level: Option<u8>,
    #[serde(default)]
    pub search: String,
}

pub async fn marketplace_listing(
    State(state): State<MarketplaceState>,
    Path(talent_id): Path<Uuid>,
    Query(query): Query<MarketplaceQuery>,
) -> Result<Json<Vec<Campaign>>, ErrorReply> {
    browse::eligible_campaigns(&state.store, talent_id, query.level, &query.search)
        .map(Json)
        .map_err(error_reply)
}

// ─── Founders / Talents ────────────────────────────────────────────────────

pub async fn get_founder(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Founder>, ErrorReply> {
    state.store.get_founder(id).map(Json).map_err(error_reply)
}

pub async fn update_founder(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFounderRequest>,
) -> Result<Json<Founder>, ErrorReply> {
    state
        .store
        .update_founder_profile(id, req)
        .map(Json)
        .map_err(error_reply)
}

pub async fn founder_stats(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FounderStats>, ErrorReply> {
    browse::founder_stats(&state.store, id)
        .map(Json)
        .map_err(error_reply)
}

pub async fn get_talent(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Talent>, ErrorReply> {
    state.store.get_talent(id).map(Json).map_err(error_reply)
}

pub async fn update_talent(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTalentRequest>,
) -> Result<Json<Talent>, ErrorReply> {
    state
        .store
        .update_talent_profile(id, req)
        .map(Json)
        .map_err(error_reply)
}

#[derive(Debug, Deserialize)]
pub struct TalentStatusRequest {
    pub status: TalentStatus,
}

pub async fn set_talent_status(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TalentStatusRequest>,
) -> Result<Json<Talent>, ErrorReply> {
    state
        .store
        .set_talent_status(id, req.status)
        .map(Json)
        .map_err(error_reply)
}

// ─── Ledger ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    pub founder_id: Option<Uuid>,
    pub talent_id: Option<Uuid>,
}

pub async fn list_orders(
    State(state): State<MarketplaceState>,
    Query(query): Query<OrderQuery>,
) -> Json<Vec<Order>> {
    let orders = match (query.founder_id, query.talent_id) {
        (Some(founder_id), _) => state.store.orders_for_founder(founder_id),
        (None, Some(talent_id)) => state.store.orders_for_talent(talent_id),
        (None, None) => state.store.list_orders(),
    };
    Json(orders)
}

pub async fn list_transactions(
    State(state): State<MarketplaceState>,
    Path(user_id): Path<Uuid>,
) -> Json<Vec<Transaction>> {
    Json(state.store.transactions_for_user(user_id))
}

pub async fn list_earnings(
    State(state): State<MarketplaceState>,
    Path(talent_id): Path<Uuid>,
) -> Json<Vec<Earning>> {
    Json(state.store.earnings_for_talent(talent_id))
}

// ─── Campaign media ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MediaAttachResponse {
    pub campaign: Campaign,
    pub accepted: Vec<String>,
    pub rejected: Vec<RejectedUpload>,
}

pub async fn upload_campaign_media(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MediaUploadRequest>,
) -> Result<Json<MediaAttachResponse>, ErrorReply> {
    // Campaign must exist before anything is stored.
    state.store.get_campaign(id).map_err(error_reply)?;

    let mut files = Vec::new();
    let mut rejected = Vec::new();
    for payload in req.files {
        match base64::engine::general_purpose::STANDARD.decode(&payload.data) {
            Ok(bytes) => files.push(UploadFile {
                filename: payload.filename,
                content_type: payload.content_type,
                bytes,
            }),
            Err(e) => rejected.push(RejectedUpload {
                filename: payload.filename,
                reason: format!("invalid base64 payload: {}", e),
            }),
        }
    }

    let mut result = state.media.upload_batch(req.founder_id, id, files);
    result.rejected.extend(rejected);

    let campaign = state
        .store
        .attach_campaign_media(id, result.accepted.clone())
        .map_err(error_reply)?;

    Ok(Json(MediaAttachResponse {
        campaign,
        accepted: result.accepted,
        rejected: result.rejected,
    }))
}

pub async fn remove_campaign_media(
    State(state): State<MarketplaceState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MediaRemoveRequest>,
) -> Result<Json<Campaign>, ErrorReply> {
    // Best-effort object delete; the URL comes off the campaign regardless.
    state.media.remove_by_url(&req.url);
    state
        .store
        .remove_campaign_media(id, &req.url)
        .map(Json)
        .map_err(error_reply)
}

// ─── Snapshot / Audit / Health ─────────────────────────────────────────────

pub async fn snapshot(State(state): State<MarketplaceState>) -> Json<Snapshot> {
    Json(state.store.snapshot())
}

pub async fn audit_log(State(state): State<MarketplaceState>) -> Json<Vec<AuditLogEntry>> {
    Json(state.store.get_audit_log())
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
