//! Campaign marketplace — campaigns, applications, approvals, and the
//! founder/talent ledger.
//!
//! Provides the REST API for the marketplace UI. Data stored in DashMap
//! (development); swap to PostgreSQL for production.

pub mod applications;
pub mod auth;
pub mod browse;
pub mod display;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod router;
pub mod store;

pub use applications::ApplicationEngine;
pub use handlers::MarketplaceState;
pub use router::marketplace_router;
pub use store::MarketplaceStore;
