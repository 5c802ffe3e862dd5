//! REST API router for the marketplace.

use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::auth;
use crate::handlers::{self, MarketplaceState};

/// Build the full API router. All routes except login and health sit
/// behind the bearer-token middleware.
pub fn marketplace_router(state: MarketplaceState) -> Router {
    Router::new()
        // Auth
        .route("/api/v1/auth/login", post(handlers::handle_login))
        // Campaign CRUD
        .route("/api/v1/campaigns", get(handlers::list_campaigns))
        .route("/api/v1/campaigns", post(handlers::create_campaign))
        .route("/api/v1/campaigns/{id}", get(handlers::get_campaign))
        .route("/api/v1/campaigns/{id}", put(handlers::update_campaign))
        .route("/api/v1/campaigns/{id}", delete(handlers::delete_campaign))
        // Campaign lifecycle
        .route("/api/v1/campaigns/{id}/pause", post(handlers::pause_campaign))
        .route("/api/v1/campaigns/{id}/resume", post(handlers::resume_campaign))
        .route(
            "/api/v1/campaigns/{id}/complete",
            post(handlers::complete_campaign),
        )
        .route(
            "/api/v1/campaigns/{id}/reject",
            post(handlers::reject_campaign),
        )
        // Applications
        .route(
            "/api/v1/campaigns/{id}/applicants",
            get(handlers::list_applicants),
        )
        .route(
            "/api/v1/campaigns/{id}/apply",
            post(handlers::apply_to_campaign),
        )
        .route(
            "/api/v1/campaigns/{id}/applicants/{talent_id}/approve",
            post(handlers::approve_applicant),
        )
        .route(
            "/api/v1/campaigns/{id}/applicants/{talent_id}/reject",
            post(handlers::reject_applicant),
        )
        // Campaign media
        .route(
            "/api/v1/campaigns/{id}/media",
            post(handlers::upload_campaign_media),
        )
        .route(
            "/api/v1/campaigns/{id}/media",
            delete(handlers::remove_campaign_media),
        )
        // Marketplace browsing (talent-facing)
        .route(
            "/api/v1/marketplace/{talent_id}",
            get(handlers::marketplace_listing),
        )
        // Founders
        .route("/api/v1/founders/{id}", get(handlers::get_founder))
        .route("/api/v1/founders/{id}", put(handlers::update_founder))
        .route("/api/v1/founders/{id}/stats", get(handlers::founder_stats))
        // Talents
        .route("/api/v1/talents/{id}", get(handlers::get_talent))
        .route("/api/v1/talents/{id}", put(handlers::update_talent))
        .route(
            "/api/v1/talents/{id}/status",
            put(handlers::set_talent_status),
        )
        // Ledger
        .route("/api/v1/orders", get(handlers::list_orders))
        .route(
            "/api/v1/transactions/{user_id}",
            get(handlers::list_transactions),
        )
        .route(
            "/api/v1/earnings/{talent_id}",
            get(handlers::list_earnings),
        )
        // Sync / observability
        .route("/api/v1/snapshot", get(handlers::snapshot))
        .route("/api/v1/audit-log", get(handlers::audit_log))
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(auth::auth_middleware))
        .with_state(state)
}
