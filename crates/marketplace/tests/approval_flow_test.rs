//! Integration test for the full application/approval flow: a founder
//! publishes a campaign, a talent finds it in the marketplace, applies,
//! and the founder approves — producing an order, a wallet debit, and
//! consistent state across every collection.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use talentlink_marketplace::models::*;
use talentlink_marketplace::{browse, ApplicationEngine, MarketplaceStore};

fn founder(wallet: f64) -> Founder {
    Founder {
        id: Uuid::new_v4(),
        name: "Ana Reyes".to_string(),
        email: "ana@glowlabs.io".to_string(),
        company: "GlowLabs".to_string(),
        wallet_balance: wallet,
        created_at: Utc::now(),
    }
}

fn talent(rate_level: u8) -> Talent {
    Talent {
        id: Uuid::new_v4(),
        name: "Mara Lindqvist".to_string(),
        email: "mara@example.com".to_string(),
        bio: String::new(),
        avatar_url: None,
        skills: vec!["Instagram Marketing".to_string()],
        social_handles: SocialHandles::default(),
        portfolio_urls: vec![],
        rate_level,
        status: TalentStatus::Active,
        created_at: Utc::now(),
    }
}

fn campaign_request(founder_id: Uuid, price: f64) -> CreateCampaignRequest {
    CreateCampaignRequest {
        founder_id,
        title: "Summer Serum Launch".to_string(),
        description: "Short-form video reviews".to_string(),
        product_name: "Glow Serum".to_string(),
        category: "Beauty".to_string(),
        duration: CampaignDuration::OneMonth,
        media_type: MediaRequirement::Video,
        rate_level: 2,
        price,
        publish: true,
    }
}

#[test]
fn test_full_approval_flow() {
    let store = Arc::new(MarketplaceStore::new());
    let engine = ApplicationEngine::new(store.clone());

    let f = founder(1000.0);
    let t = talent(2);
    store.insert_founder(f.clone());
    store.insert_talent(t.clone());

    let campaign = store.create_campaign(campaign_request(f.id, 400.0)).unwrap();
    assert_eq!(campaign.status, CampaignStatus::Active);

    // The talent sees the campaign in their marketplace.
    let listing = browse::eligible_campaigns(&store, t.id, None, "").unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].id, campaign.id);

    // Apply, then verify the campaign no longer shows in the listing.
    let application = engine.apply(campaign.id, t.id).unwrap();
    assert_eq!(application.status, ApplicationStatus::Pending);
    assert!(browse::eligible_campaigns(&store, t.id, None, "")
        .unwrap()
        .is_empty());

    // Approve: one atomic outcome covering campaign, order, debit, wallet.
    let outcome = engine.approve(campaign.id, t.id).unwrap();
    assert!(outcome.campaign.is_approved(t.id));
    assert!(!outcome.campaign.is_applicant(t.id));
    assert_eq!(outcome.order.payout, 400.0);
    assert_eq!(outcome.order.status, OrderStatus::PendingShipment);
    assert_eq!(outcome.transaction.kind, TransactionKind::Debit);
    assert_eq!(outcome.transaction.amount, 400.0);
    assert_eq!(outcome.transaction.related_order_id, Some(outcome.order.id));
    assert_eq!(outcome.founder.wallet_balance, 600.0);

    // Every collection agrees with the outcome.
    assert_eq!(store.orders_for_founder(f.id).len(), 1);
    assert_eq!(store.orders_for_talent(t.id).len(), 1);
    assert_eq!(store.transactions_for_user(f.id).len(), 1);
    assert_eq!(store.get_founder(f.id).unwrap().wallet_balance, 600.0);
    assert_eq!(
        store
            .get_application(campaign.id, t.id)
            .unwrap()
            .status,
        ApplicationStatus::Approved
    );

    let snapshot = store.snapshot();
    assert_eq!(snapshot.orders.len(), 1);
    assert_eq!(snapshot.transactions.len(), 1);
}

#[test]
fn test_insufficient_funds_leaves_state_untouched() {
    let store = Arc::new(MarketplaceStore::new());
    let engine = ApplicationEngine::new(store.clone());

    let f = founder(100.0);
    let t = talent(2);
    store.insert_founder(f.clone());
    store.insert_talent(t.clone());

    let campaign = store.create_campaign(campaign_request(f.id, 400.0)).unwrap();
    engine.apply(campaign.id, t.id).unwrap();

    let err = engine.approve(campaign.id, t.id).unwrap_err();
    assert!(err.to_string().contains("nsufficient"));

    // Nothing moved: applicant still pending, no order, no debit.
    let after = store.get_campaign(campaign.id).unwrap();
    assert!(after.is_applicant(t.id));
    assert!(!after.is_approved(t.id));
    assert!(store.orders_for_founder(f.id).is_empty());
    assert!(store.transactions_for_user(f.id).is_empty());
    assert_eq!(store.get_founder(f.id).unwrap().wallet_balance, 100.0);

    // Topping up the wallet lets the same approval go through.
    store
        .update_founder_profile(
            f.id,
            UpdateFounderRequest {
                wallet_balance: Some(500.0),
                ..Default::default()
            },
        )
        .unwrap();
    let outcome = engine.approve(campaign.id, t.id).unwrap();
    assert_eq!(outcome.founder.wallet_balance, 100.0);
}

#[test]
fn test_reject_flow_has_no_ledger_effects() {
    let store = Arc::new(MarketplaceStore::new());
    let engine = ApplicationEngine::new(store.clone());

    let f = founder(1000.0);
    let t = talent(2);
    store.insert_founder(f.clone());
    store.insert_talent(t.clone());

    let campaign = store.create_campaign(campaign_request(f.id, 400.0)).unwrap();
    engine.apply(campaign.id, t.id).unwrap();

    let application = engine.reject(campaign.id, t.id).unwrap();
    assert_eq!(application.status, ApplicationStatus::Rejected);

    let after = store.get_campaign(campaign.id).unwrap();
    assert!(!after.is_applicant(t.id));
    assert!(!after.is_approved(t.id));
    assert!(store.orders_for_founder(f.id).is_empty());
    assert_eq!(store.get_founder(f.id).unwrap().wallet_balance, 1000.0);

    // A rejected talent can not be approved afterwards.
    assert!(engine.approve(campaign.id, t.id).is_err());
}

#[test]
fn test_campaign_lifecycle_gates_applications() {
    let store = Arc::new(MarketplaceStore::new());
    let engine = ApplicationEngine::new(store.clone());

    let f = founder(1000.0);
    let t = talent(3);
    store.insert_founder(f.clone());
    store.insert_talent(t.clone());

    let mut req = campaign_request(f.id, 200.0);
    req.publish = false;
    let campaign = store.create_campaign(req).unwrap();
    assert_eq!(campaign.status, CampaignStatus::Draft);

    // Draft campaigns are not in the marketplace and take no applications.
    assert!(browse::eligible_campaigns(&store, t.id, None, "")
        .unwrap()
        .is_empty());
    assert!(engine.apply(campaign.id, t.id).is_err());

    store.resume_campaign(campaign.id).unwrap();
    engine.apply(campaign.id, t.id).unwrap();

    // Paused campaigns stop accepting new applicants but keep existing ones.
    store.pause_campaign(campaign.id).unwrap();
    let paused = store.get_campaign(campaign.id).unwrap();
    assert!(paused.is_applicant(t.id));

    // Approval still works while paused.
    let outcome = engine.approve(campaign.id, t.id).unwrap();
    assert_eq!(outcome.founder.wallet_balance, 800.0);
}
