//! Marketplace browsing — eligibility filtering, applicant search, and
//! founder aggregate stats. Pure predicates over store reads.

use uuid::Uuid;

use crate::models::{Campaign, CampaignStatus, FounderStats, Talent, TalentStatus};
use crate::store::MarketplaceStore;
use talentlink_core::{MarketError, MarketResult};

/// Case-insensitive substring match of `query` across the campaign's
/// searchable text fields. An empty query matches everything.
pub fn campaign_matches_search(campaign: &Campaign, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    campaign.title.to_lowercase().contains(&q)
        || campaign.description.to_lowercase().contains(&q)
        || campaign.product_name.to_lowercase().contains(&q)
        || campaign.category.to_lowercase().contains(&q)
}

/// Case-insensitive substring match across an applicant's name, email,
/// and skills.
pub fn talent_matches_search(talent: &Talent, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    talent.name.to_lowercase().contains(&q)
        || talent.email.to_lowercase().contains(&q)
        || talent.skills.iter().any(|s| s.to_lowercase().contains(&q))
}

/// Whether a campaign shows up in this talent's marketplace listing.
///
/// With no explicit level filter a talent sees campaigns at or below their
/// own rate level; with a filter only exact matches. Campaigns the talent
/// already applied to or was approved for never show again.
pub fn campaign_eligible(campaign: &Campaign, talent: &Talent, level_filter: Option<u8>) -> bool {
    if campaign.status != CampaignStatus::Active {
        return false;
    }
    let level_ok = match level_filter {
        Some(level) => campaign.rate_level == level,
        None => campaign.rate_level <= talent.rate_level,
    };
    level_ok && !campaign.is_applicant(talent.id) && !campaign.is_approved(talent.id)
}

/// The campaigns an active talent can browse and apply to.
pub fn eligible_campaigns(
    store: &MarketplaceStore,
    talent_id: Uuid,
    level_filter: Option<u8>,
    search: &str,
) -> MarketResult<Vec<Campaign>> {
    let talent = store.get_talent(talent_id)?;
    if talent.status != TalentStatus::Active {
        // Pending/suspended talents see the "awaiting approval" screen,
        // never data.
        return Err(MarketError::TalentNotActive(talent_id));
    }
    Ok(store
        .list_campaigns()
        .into_iter()
        .filter(|c| campaign_eligible(c, &talent, level_filter))
        .filter(|c| campaign_matches_search(c, search))
        .collect())
}

/// A campaign's pending applicants, optionally narrowed by a search query.
pub fn search_applicants(
    store: &MarketplaceStore,
    campaign_id: Uuid,
    query: &str,
) -> MarketResult<Vec<Talent>> {
    let campaign = store.get_campaign(campaign_id)?;
    let mut applicants: Vec<Talent> = campaign
        .applicants
        .iter()
        .filter_map(|id| store.get_talent(*id).ok())
        .filter(|t| talent_matches_search(t, query))
        .collect();
    applicants.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(applicants)
}

/// Pure reductions over one founder's campaigns.
pub fn founder_stats(store: &MarketplaceStore, founder_id: Uuid) -> MarketResult<FounderStats> {
    store.get_founder(founder_id)?;
    let mut stats = FounderStats::default();
    for campaign in store.campaigns_for_founder(founder_id) {
        stats.total_campaigns += 1;
        match campaign.status {
            CampaignStatus::Draft => stats.draft += 1,
            CampaignStatus::Active => stats.active += 1,
            CampaignStatus::Paused => stats.paused += 1,
            CampaignStatus::Completed => stats.completed += 1,
            CampaignStatus::Rejected => stats.rejected += 1,
        }
        stats.total_applicants += campaign.applicants.len() as u64;
        stats.total_approved += campaign.approved_talents.len() as u64;
        stats.total_value += campaign.price;
    }
    Ok(stats)
}
