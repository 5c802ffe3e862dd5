//! Application lifecycle engine — apply, approve, reject.
//!
//! Wraps the store's atomic operations with a duplicate-submission guard:
//! while an (campaign, talent) pair is in flight, a second submission for
//! the same pair is refused instead of queued. This is the server-side
//! form of the review UI disabling the buttons for the applicant being
//! processed.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::warn;
use uuid::Uuid;

use crate::models::{Application, ApprovalOutcome};
use crate::store::MarketplaceStore;
use talentlink_core::{MarketError, MarketResult};

pub struct ApplicationEngine {
    store: Arc<MarketplaceStore>,
    in_flight: Arc<DashMap<(Uuid, Uuid), ()>>,
}

/// Removes the in-flight key when the operation finishes, error or not.
struct InFlightGuard {
    in_flight: Arc<DashMap<(Uuid, Uuid), ()>>,
    key: (Uuid, Uuid),
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.remove(&self.key);
    }
}

impl ApplicationEngine {
    pub fn new(store: Arc<MarketplaceStore>) -> Self {
        Self {
            store,
            in_flight: Arc::new(DashMap::new()),
        }
    }

    fn begin(&self, campaign_id: Uuid, talent_id: Uuid) -> MarketResult<InFlightGuard> {
        let key = (campaign_id, talent_id);
        if self.in_flight.insert(key, ()).is_some() {
            warn!(
                campaign_id = %campaign_id,
                talent_id = %talent_id,
                "Duplicate submission refused while in flight"
            );
            return Err(MarketError::AlreadyProcessing {
                campaign_id,
                talent_id,
            });
        }
        Ok(InFlightGuard {
            in_flight: self.in_flight.clone(),
            key,
        })
    }

    /// Talent applies to a campaign.
    pub fn apply(&self, campaign_id: Uuid, talent_id: Uuid) -> MarketResult<Application> {
        let _guard = self.begin(campaign_id, talent_id)?;
        let application = self.store.apply_to_campaign(campaign_id, talent_id)?;
        metrics::counter!("marketplace.applications.submitted").increment(1);
        Ok(application)
    }

    /// Founder approves a pending applicant. Atomic: applicant promotion,
    /// order, debit transaction, and wallet debit all land together.
    pub fn approve(&self, campaign_id: Uuid, talent_id: Uuid) -> MarketResult<ApprovalOutcome> {
        let _guard = self.begin(campaign_id, talent_id)?;
        let outcome = self.store.approve_application(campaign_id, talent_id)?;
        metrics::counter!("marketplace.applications.approved").increment(1);
        Ok(outcome)
    }

    /// Founder rejects a pending applicant.
    pub fn reject(&self, campaign_id: Uuid, talent_id: Uuid) -> MarketResult<Application> {
        let _guard = self.begin(campaign_id, talent_id)?;
        let application = self.store.reject_application(campaign_id, talent_id)?;
        metrics::counter!("marketplace.applications.rejected").increment(1);
        Ok(application)
    }
}
