//! In-memory marketplace store backed by DashMap.
//!
//! Production: replace with PostgreSQL (sqlx) or similar ACID store.
//! This provides the same API surface for development and testing. All
//! mutation goes through intent-named methods; multi-collection writes
//! (apply/approve/reject/delete) are serialized behind a commit lock and
//! validate fully before touching any collection, so they are
//! all-or-nothing.

use chrono::Utc;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::ledger;
use crate::models::*;
use talentlink_core::{MarketError, MarketResult};

/// Thread-safe in-memory store for campaigns, founders, talents,
/// applications, the order/transaction/earning ledger, and the audit log.
pub struct MarketplaceStore {
    campaigns: DashMap<Uuid, Campaign>,
    founders: DashMap<Uuid, Founder>,
    talents: DashMap<Uuid, Talent>,
    /// Keyed by (campaign_id, talent_id).
    applications: DashMap<(Uuid, Uuid), Application>,
    orders: DashMap<Uuid, Order>,
    transactions: DashMap<Uuid, Transaction>,
    earnings: DashMap<Uuid, Earning>,
    audit_log: DashMap<Uuid, AuditLogEntry>,
    /// Serializes multi-collection writes. Single-collection field updates
    /// stay lock-free (last writer wins, as for any profile edit).
    commit: Mutex<()>,
}

impl MarketplaceStore {
    pub fn new() -> Self {
        info!("Marketplace store initialized (in-memory, development mode)");
        Self {
            campaigns: DashMap::new(),
            founders: DashMap::new(),
            talents: DashMap::new(),
            applications: DashMap::new(),
            orders: DashMap::new(),
            transactions: DashMap::new(),
            earnings: DashMap::new(),
            audit_log: DashMap::new(),
            commit: Mutex::new(()),
        }
    }

    // ─── Campaigns ─────────────────────────────────────────────────────────

    pub fn list_campaigns(&self) -> Vec<Campaign> {
        let mut campaigns: Vec<Campaign> =
            self.campaigns.iter().map(|r| r.value().clone()).collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        campaigns
    }

    pub fn get_campaign(&self, id: Uuid) -> MarketResult<Campaign> {
        self.campaigns
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or(MarketError::NotFound {
                kind: "campaign",
                id,
            })
    }

    pub fn campaigns_for_founder(&self, founder_id: Uuid) -> Vec<Campaign> {
        let mut campaigns: Vec<Campaign> = self
            .campaigns
            .iter()
            .filter(|r| r.value().founder_id == founder_id)
            .map(|r| r.value().clone())
            .collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        campaigns
    }

    pub fn create_campaign(&self, req: CreateCampaignRequest) -> MarketResult<Campaign> {
        if req.title.trim().is_empty() {
            return Err(MarketError::Validation("campaign title is required".into()));
        }
        if !(1..=3).contains(&req.rate_level) {
            return Err(MarketError::Validation(format!(
                "rate_level must be 1-3, got {}",
                req.rate_level
            )));
        }
        if req.price <= 0.0 {
            return Err(MarketError::Validation(
                "campaign price must be positive".into(),
            ));
        }
        // The owning founder must exist.
        self.get_founder(req.founder_id)?;

        let now = Utc::now();
        let campaign = Campaign {
            id: Uuid::new_v4(),
            founder_id: req.founder_id,
            title: req.title,
            description: req.description,
            product_name: req.product_name,
            category: req.category,
            duration: req.duration,
            media_type: req.media_type,
            rate_level: req.rate_level,
            price: req.price,
            status: if req.publish {
                CampaignStatus::Active
            } else {
                CampaignStatus::Draft
            },
            applicants: Vec::new(),
            approved_talents: Vec::new(),
            product_images: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        let id = campaign.id;
        self.campaigns.insert(id, campaign.clone());
        self.log_audit(
            &campaign.founder_id.to_string(),
            AuditAction::Create,
            "campaign",
            &id.to_string(),
            serde_json::json!({"title": &campaign.title}),
        );
        Ok(campaign)
    }

    pub fn update_campaign(&self, id: Uuid, req: UpdateCampaignRequest) -> MarketResult<Campaign> {
        if let Some(level) = req.rate_level {
            if !(1..=3).contains(&level) {
                return Err(MarketError::Validation(format!(
                    "rate_level must be 1-3, got {}",
                    level
                )));
            }
        }
        if let Some(price) = req.price {
            if price <= 0.0 {
                return Err(MarketError::Validation(
                    "campaign price must be positive".into(),
                ));
            }
        }
        let mut entry = self
            .campaigns
            .get_mut(&id)
            .ok_or(MarketError::NotFound {
                kind: "campaign",
                id,
            })?;
        let c = entry.value_mut();
        if let Some(title) = req.title {
            c.title = title;
        }
        if let Some(description) = req.description {
            c.description = description;
        }
        if let Some(product_name) = req.product_name {
            c.product_name = product_name;
        }
        if let Some(category) = req.category {
            c.category = category;
        }
        if let Some(duration) = req.duration {
            c.duration = duration;
        }
        if let Some(media_type) = req.media_type {
            c.media_type = media_type;
        }
        if let Some(level) = req.rate_level {
            c.rate_level = level;
        }
        if let Some(price) = req.price {
            c.price = price;
        }
        c.updated_at = Utc::now();
        let updated = c.clone();
        drop(entry);
        self.log_audit(
            &updated.founder_id.to_string(),
            AuditAction::Update,
            "campaign",
            &id.to_string(),
            serde_json::json!({}),
        );
        Ok(updated)
    }

    pub fn delete_campaign(&self, id: Uuid) -> MarketResult<()> {
        let _commit = self.commit.lock();
        let (_, campaign) = self
            .campaigns
            .remove(&id)
            .ok_or(MarketError::NotFound {
                kind: "campaign",
                id,
            })?;
        // Drop this campaign's applications; orders and transactions are
        // history and stay.
        let keys: Vec<(Uuid, Uuid)> = self
            .applications
            .iter()
            .filter(|r| r.key().0 == id)
            .map(|r| *r.key())
            .collect();
        for key in keys {
            self.applications.remove(&key);
        }
        self.log_audit(
            &campaign.founder_id.to_string(),
            AuditAction::Delete,
            "campaign",
            &id.to_string(),
            serde_json::json!({"title": &campaign.title}),
        );
        Ok(())
    }

    // ─── Status transitions ────────────────────────────────────────────────

    pub fn pause_campaign(&self, id: Uuid) -> MarketResult<Campaign> {
        self.transition_campaign(id, CampaignStatus::Paused, AuditAction::Pause)
    }

    pub fn resume_campaign(&self, id: Uuid) -> MarketResult<Campaign> {
        self.transition_campaign(id, CampaignStatus::Active, AuditAction::Resume)
    }

    pub fn complete_campaign(&self, id: Uuid) -> MarketResult<Campaign> {
        self.transition_campaign(id, CampaignStatus::Completed, AuditAction::Complete)
    }

    /// Admin-side rejection of a campaign.
    pub fn reject_campaign(&self, id: Uuid) -> MarketResult<Campaign> {
        self.transition_campaign(id, CampaignStatus::Rejected, AuditAction::Reject)
    }

    fn transition_campaign(
        &self,
        id: Uuid,
        target: CampaignStatus,
        action: AuditAction,
    ) -> MarketResult<Campaign> {
        let mut entry = self
            .campaigns
            .get_mut(&id)
            .ok_or(MarketError::NotFound {
                kind: "campaign",
                id,
            })?;
        let c = entry.value_mut();
        Self::validate_status_transition(c.status, target)?;
        c.status = target;
        c.updated_at = Utc::now();
        let updated = c.clone();
        drop(entry);
        self.log_audit(
            &updated.founder_id.to_string(),
            action,
            "campaign",
            &id.to_string(),
            serde_json::json!({"status": target}),
        );
        Ok(updated)
    }

    fn validate_status_transition(
        current: CampaignStatus,
        target: CampaignStatus,
    ) -> MarketResult<()> {
        use CampaignStatus::*;
        let ok = match (current, target) {
            (Draft, Active) | (Active, Paused) | (Paused, Active) => true,
            (Active, Completed) | (Paused, Completed) => true,
            // Admin rejection of anything not yet terminal.
            (Draft, Rejected) | (Active, Rejected) | (Paused, Rejected) => true,
            _ => false,
        };
        if ok {
            Ok(())
        } else {
            Err(MarketError::InvalidTransition(format!(
                "cannot move campaign from {:?} to {:?}",
                current, target
            )))
        }
    }

    // ─── Campaign media ────────────────────────────────────────────────────

    /// Append uploaded media URLs to a campaign.
    pub fn attach_campaign_media(&self, id: Uuid, urls: Vec<String>) -> MarketResult<Campaign> {
        let mut entry = self
            .campaigns
            .get_mut(&id)
            .ok_or(MarketError::NotFound {
                kind: "campaign",
                id,
            })?;
        let c = entry.value_mut();
        c.product_images.extend(urls.iter().cloned());
        c.updated_at = Utc::now();
        let updated = c.clone();
        drop(entry);
        self.log_audit(
            &updated.founder_id.to_string(),
            AuditAction::MediaAttach,
            "campaign",
            &id.to_string(),
            serde_json::json!({"urls": urls}),
        );
        Ok(updated)
    }

    /// Remove a media URL from a campaign. The URL is removed regardless of
    /// whether the backing object deletion succeeded.
    pub fn remove_campaign_media(&self, id: Uuid, url: &str) -> MarketResult<Campaign> {
        let mut entry = self
            .campaigns
            .get_mut(&id)
            .ok_or(MarketError::NotFound {
                kind: "campaign",
                id,
            })?;
        let c = entry.value_mut();
        c.product_images.retain(|u| u != url);
        c.updated_at = Utc::now();
        let updated = c.clone();
        drop(entry);
        self.log_audit(
            &updated.founder_id.to_string(),
            AuditAction::MediaRemove,
            "campaign",
            &id.to_string(),
            serde_json::json!({"url": url}),
        );
        Ok(updated)
    }

    // ─── Founders / Talents ────────────────────────────────────────────────

    pub fn insert_founder(&self, founder: Founder) {
        self.founders.insert(founder.id, founder);
    }

    pub fn insert_talent(&self, talent: Talent) {
        self.talents.insert(talent.id, talent);
    }

    pub fn get_founder(&self, id: Uuid) -> MarketResult<Founder> {
        self.founders
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or(MarketError::NotFound { kind: "founder", id })
    }

    pub fn get_talent(&self, id: Uuid) -> MarketResult<Talent> {
        self.talents
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or(MarketError::NotFound { kind: "talent", id })
    }

    pub fn list_talents(&self) -> Vec<Talent> {
        self.talents.iter().map(|r| r.value().clone()).collect()
    }

    pub fn founder_by_email(&self, email: &str) -> Option<Founder> {
        self.founders
            .iter()
            .find(|r| r.value().email.eq_ignore_ascii_case(email))
            .map(|r| r.value().clone())
    }

    pub fn talent_by_email(&self, email: &str) -> Option<Talent> {
        self.talents
            .iter()
            .find(|r| r.value().email.eq_ignore_ascii_case(email))
            .map(|r| r.value().clone())
    }

    pub fn update_founder_profile(
        &self,
        id: Uuid,
        req: UpdateFounderRequest,
    ) -> MarketResult<Founder> {
        if let Some(balance) = req.wallet_balance {
            if balance < 0.0 {
                return Err(MarketError::Validation(
                    "wallet balance cannot be negative".into(),
                ));
            }
        }
        let mut entry = self
            .founders
            .get_mut(&id)
            .ok_or(MarketError::NotFound { kind: "founder", id })?;
        let f = entry.value_mut();
        if let Some(name) = req.name {
            f.name = name;
        }
        if let Some(company) = req.company {
            f.company = company;
        }
        if let Some(balance) = req.wallet_balance {
            f.wallet_balance = balance;
        }
        let updated = f.clone();
        drop(entry);
        self.log_audit(
            &id.to_string(),
            AuditAction::Update,
            "founder",
            &id.to_string(),
            serde_json::json!({}),
        );
        Ok(updated)
    }

    pub fn update_talent_profile(
        &self,
        id: Uuid,
        req: UpdateTalentRequest,
    ) -> MarketResult<Talent> {
        if let Some(level) = req.rate_level {
            if !(1..=3).contains(&level) {
                return Err(MarketError::Validation(format!(
                    "rate_level must be 1-3, got {}",
                    level
                )));
            }
        }
        let mut entry = self
            .talents
            .get_mut(&id)
            .ok_or(MarketError::NotFound { kind: "talent", id })?;
        let t = entry.value_mut();
        if let Some(name) = req.name {
            t.name = name;
        }
        if let Some(bio) = req.bio {
            t.bio = bio;
        }
        if let Some(avatar_url) = req.avatar_url {
            t.avatar_url = Some(avatar_url);
        }
        if let Some(skills) = req.skills {
            t.skills = skills;
        }
        if let Some(handles) = req.social_handles {
            t.social_handles = handles;
        }
        if let Some(urls) = req.portfolio_urls {
            t.portfolio_urls = urls;
        }
        if let Some(level) = req.rate_level {
            t.rate_level = level;
        }
        let updated = t.clone();
        drop(entry);
        self.log_audit(
            &id.to_string(),
            AuditAction::Update,
            "talent",
            &id.to_string(),
            serde_json::json!({}),
        );
        Ok(updated)
    }

    /// Admin gate for marketplace visibility.
    pub fn set_talent_status(&self, id: Uuid, status: TalentStatus) -> MarketResult<Talent> {
        let mut entry = self
            .talents
            .get_mut(&id)
            .ok_or(MarketError::NotFound { kind: "talent", id })?;
        entry.value_mut().status = status;
        let updated = entry.value().clone();
        drop(entry);
        self.log_audit(
            "admin",
            AuditAction::Update,
            "talent",
            &id.to_string(),
            serde_json::json!({"status": status}),
        );
        Ok(updated)
    }

    // ─── Application lifecycle ─────────────────────────────────────────────

    pub fn get_application(&self, campaign_id: Uuid, talent_id: Uuid) -> Option<Application> {
        self.applications
            .get(&(campaign_id, talent_id))
            .map(|r| r.value().clone())
    }

    /// Register a talent as a pending applicant of a campaign.
    pub fn apply_to_campaign(
        &self,
        campaign_id: Uuid,
        talent_id: Uuid,
    ) -> MarketResult<Application> {
        let _commit = self.commit.lock();

        let campaign = self.get_campaign(campaign_id)?;
        if campaign.status != CampaignStatus::Active {
            return Err(MarketError::Validation(
                "campaign is not accepting applications".into(),
            ));
        }
        let talent = self.get_talent(talent_id)?;
        if talent.status != TalentStatus::Active {
            return Err(MarketError::TalentNotActive(talent_id));
        }
        if campaign.is_applicant(talent_id) || campaign.is_approved(talent_id) {
            return Err(MarketError::AlreadyApplied {
                campaign_id,
                talent_id,
            });
        }

        let application = Application {
            campaign_id,
            talent_id,
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
            decided_at: None,
        };
        self.applications
            .insert((campaign_id, talent_id), application.clone());
        if let Some(mut entry) = self.campaigns.get_mut(&campaign_id) {
            entry.value_mut().applicants.push(talent_id);
            entry.value_mut().updated_at = Utc::now();
        }
        self.log_audit(
            &talent_id.to_string(),
            AuditAction::Apply,
            "campaign",
            &campaign_id.to_string(),
            serde_json::json!({"talent_id": talent_id}),
        );
        Ok(application)
    }

    /// Approve a pending applicant. One atomic operation: the applicant
    /// moves to `approved_talents`, an order and a founder debit
    /// transaction are created, and the wallet is debited — or nothing
    /// happens at all. Validation (including the wallet precondition) runs
    /// before any collection is touched.
    pub fn approve_application(
        &self,
        campaign_id: Uuid,
        talent_id: Uuid,
    ) -> MarketResult<ApprovalOutcome> {
        let _commit = self.commit.lock();

        // Validate phase: work on clones only.
        let mut campaign = self.get_campaign(campaign_id)?;
        if !campaign.is_applicant(talent_id) {
            return Err(MarketError::NotAnApplicant {
                campaign_id,
                talent_id,
            });
        }
        self.get_talent(talent_id)?;
        let mut founder = self.get_founder(campaign.founder_id)?;
        ledger::debit_wallet(&mut founder, campaign.price)?;

        // Stage phase: everything below is infallible.
        campaign.applicants.retain(|t| *t != talent_id);
        campaign.approved_talents.push(talent_id);
        campaign.updated_at = Utc::now();
        let order = ledger::new_order(&campaign, talent_id);
        let transaction = ledger::debit_for_order(&campaign, &order);

        // Apply phase.
        if let Some(mut entry) = self.applications.get_mut(&(campaign_id, talent_id)) {
            entry.value_mut().status = ApplicationStatus::Approved;
            entry.value_mut().decided_at = Some(Utc::now());
        }
        self.campaigns.insert(campaign_id, campaign.clone());
        self.orders.insert(order.id, order.clone());
        self.transactions.insert(transaction.id, transaction.clone());
        self.founders.insert(founder.id, founder.clone());

        self.log_audit(
            &founder.id.to_string(),
            AuditAction::Approve,
            "application",
            &format!("{}:{}", campaign_id, talent_id),
            serde_json::json!({"order_id": order.id, "payout": order.payout}),
        );
        info!(
            campaign_id = %campaign_id,
            talent_id = %talent_id,
            order_id = %order.id,
            payout = order.payout,
            "Application approved"
        );

        Ok(ApprovalOutcome {
            campaign,
            order,
            transaction,
            founder,
        })
    }

    /// Reject a pending applicant. No order, transaction, or wallet effect.
    pub fn reject_application(
        &self,
        campaign_id: Uuid,
        talent_id: Uuid,
    ) -> MarketResult<Application> {
        let _commit = self.commit.lock();

        let campaign = self.get_campaign(campaign_id)?;
        if !campaign.is_applicant(talent_id) {
            return Err(MarketError::NotAnApplicant {
                campaign_id,
                talent_id,
            });
        }

        if let Some(mut entry) = self.campaigns.get_mut(&campaign_id) {
            entry.value_mut().applicants.retain(|t| *t != talent_id);
            entry.value_mut().updated_at = Utc::now();
        }
        let application = {
            let mut entry = self
                .applications
                .entry((campaign_id, talent_id))
                .or_insert_with(|| Application {
                    campaign_id,
                    talent_id,
                    status: ApplicationStatus::Pending,
                    applied_at: Utc::now(),
                    decided_at: None,
                });
            entry.status = ApplicationStatus::Rejected;
            entry.decided_at = Some(Utc::now());
            entry.clone()
        };
        self.log_audit(
            &campaign.founder_id.to_string(),
            AuditAction::Reject,
            "application",
            &format!("{}:{}", campaign_id, talent_id),
            serde_json::json!({}),
        );
        Ok(application)
    }

    // ─── Ledger reads ──────────────────────────────────────────────────────

    pub fn insert_order(&self, order: Order) {
        self.orders.insert(order.id, order);
    }

    pub fn insert_transaction(&self, transaction: Transaction) {
        self.transactions.insert(transaction.id, transaction);
    }

    pub fn insert_earning(&self, earning: Earning) {
        self.earnings.insert(earning.id, earning);
    }

    pub fn orders_for_founder(&self, founder_id: Uuid) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|r| r.value().founder_id == founder_id)
            .map(|r| r.value().clone())
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    pub fn orders_for_talent(&self, talent_id: Uuid) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|r| r.value().talent_id == talent_id)
            .map(|r| r.value().clone())
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    pub fn list_orders(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.orders.iter().map(|r| r.value().clone()).collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    pub fn transactions_for_user(&self, user_id: Uuid) -> Vec<Transaction> {
        let mut txs: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
            .collect();
        txs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        txs
    }

    pub fn earnings_for_talent(&self, talent_id: Uuid) -> Vec<Earning> {
        let mut earnings: Vec<Earning> = self
            .earnings
            .iter()
            .filter(|r| r.value().talent_id == talent_id)
            .map(|r| r.value().clone())
            .collect();
        earnings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        earnings
    }

    // ─── Snapshot ──────────────────────────────────────────────────────────

    /// One coherent read of every collection, taken under the commit lock
    /// so no half-applied approval is ever visible.
    pub fn snapshot(&self) -> Snapshot {
        let _commit = self.commit.lock();
        Snapshot {
            campaigns: self.list_campaigns(),
            talents: self.list_talents(),
            orders: self.list_orders(),
            transactions: {
                let mut txs: Vec<Transaction> = self
                    .transactions
                    .iter()
                    .map(|r| r.value().clone())
                    .collect();
                txs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                txs
            },
            earnings: self.earnings.iter().map(|r| r.value().clone()).collect(),
        }
    }

    // ─── Audit Log ─────────────────────────────────────────────────────────

    pub fn get_audit_log(&self) -> Vec<AuditLogEntry> {
        let mut entries: Vec<AuditLogEntry> =
            self.audit_log.iter().map(|r| r.value().clone()).collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    fn log_audit(
        &self,
        actor: &str,
        action: AuditAction,
        resource_type: &str,
        resource_id: &str,
        details: serde_json::Value,
    ) {
        let entry = AuditLogEntry {
            id: Uuid::new_v4(),
            actor: actor.to_string(),
            action,
            resource_type: resource_type.to_string(),
            resource_id: resource_id.to_string(),
            details,
            timestamp: Utc::now(),
        };
        self.audit_log.insert(entry.id, entry);
    }

    // ─── Demo Data ─────────────────────────────────────────────────────────

    pub fn seed_demo_data(&self) {
        use chrono::Duration;
        let now = Utc::now();

        let founders = vec![
            ("Ana Ruiz", "ana@glowlabs.io", "Glow Labs", 5_000.0),
            ("Ben Okafor", "ben@peakgear.co", "Peak Gear", 1_200.0),
        ];
        let founder_ids: Vec<Uuid> = founders
            .into_iter()
            .map(|(name, email, company, balance)| {
                let founder = Founder {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    email: email.to_string(),
                    company: company.to_string(),
                    wallet_balance: balance,
                    created_at: now - Duration::days(90),
                };
                let id = founder.id;
                self.insert_founder(founder);
                id
            })
            .collect();

        let talents = vec![
            (
                "Mara Lindqvist",
                "mara@example.com",
                vec!["Instagram Marketing", "Photography"],
                3,
                TalentStatus::Active,
            ),
            (
                "Dev Patel",
                "dev@example.com",
                vec!["TikTok", "Video Editing"],
                2,
                TalentStatus::Active,
            ),
            (
                "Sofia Marino",
                "sofia@example.com",
                vec!["YouTube", "Product Reviews"],
                1,
                TalentStatus::Pending,
            ),
        ];
        let talent_ids: Vec<Uuid> = talents
            .into_iter()
            .map(|(name, email, skills, level, status)| {
                let talent = Talent {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    email: email.to_string(),
                    bio: format!("{} — creator on TalentLink", name),
                    avatar_url: None,
                    skills: skills.into_iter().map(String::from).collect(),
                    social_handles: SocialHandles::default(),
                    portfolio_urls: Vec::new(),
                    rate_level: level,
                    status,
                    created_at: now - Duration::days(60),
                };
                let id = talent.id;
                self.insert_talent(talent);
                id
            })
            .collect();

        let campaigns = vec![
            (
                founder_ids[0],
                "Spring Skincare Launch",
                "Vitamin-C Serum",
                "beauty",
                2,
                500.0,
                CampaignStatus::Active,
            ),
            (
                founder_ids[0],
                "Summer Glow Giveaway",
                "SPF Mist",
                "beauty",
                1,
                250.0,
                CampaignStatus::Active,
            ),
            (
                founder_ids[1],
                "Trail Pack Field Test",
                "UL-40 Backpack",
                "outdoors",
                3,
                900.0,
                CampaignStatus::Draft,
            ),
            (
                founder_ids[1],
                "Winter Archive",
                "Insulated Bottle",
                "outdoors",
                1,
                150.0,
                CampaignStatus::Completed,
            ),
        ];
        let mut campaign_ids = Vec::new();
        for (founder_id, title, product, category, level, price, status) in campaigns {
            let campaign = Campaign {
                id: Uuid::new_v4(),
                founder_id,
                title: title.to_string(),
                description: format!("Create content featuring {}", product),
                product_name: product.to_string(),
                category: category.to_string(),
                duration: CampaignDuration::OneMonth,
                media_type: MediaRequirement::Any,
                rate_level: level,
                price,
                status,
                applicants: Vec::new(),
                approved_talents: Vec::new(),
                product_images: Vec::new(),
                created_at: now - Duration::days(14),
                updated_at: now,
            };
            campaign_ids.push(campaign.id);
            self.campaigns.insert(campaign.id, campaign);
        }

        // A pending application and a fulfilled order with its ledger rows.
        let _ = self.apply_to_campaign(campaign_ids[0], talent_ids[0]);

        let completed = self
            .get_campaign(campaign_ids[3])
            .expect("seeded campaign");
        let order = Order {
            status: OrderStatus::Completed,
            ..ledger::new_order(&completed, talent_ids[1])
        };
        self.insert_transaction(ledger::debit_for_order(&completed, &order));
        self.insert_earning(Earning {
            status: EarningStatus::Available,
            ..ledger::earning_for_order(&order)
        });
        self.insert_order(order);

        info!(
            founders = founder_ids.len(),
            talents = talent_ids.len(),
            campaigns = campaign_ids.len(),
            "Seeded demo marketplace data"
        );
    }
}

impl Default for MarketplaceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn test_founder(balance: f64) -> Founder {
        Founder {
            id: Uuid::new_v4(),
            name: "Test Founder".to_string(),
            email: "founder@test.io".to_string(),
            company: "Testco".to_string(),
            wallet_balance: balance,
            created_at: Utc::now(),
        }
    }

    pub(crate) fn test_talent(level: u8, status: TalentStatus) -> Talent {
        Talent {
            id: Uuid::new_v4(),
            name: "Test Talent".to_string(),
            email: "talent@test.io".to_string(),
            bio: String::new(),
            avatar_url: None,
            skills: vec!["Instagram Marketing".to_string()],
            social_handles: SocialHandles::default(),
            portfolio_urls: Vec::new(),
            rate_level: level,
            status,
            created_at: Utc::now(),
        }
    }

    fn campaign_request(founder_id: Uuid, price: f64) -> CreateCampaignRequest {
        CreateCampaignRequest {
            founder_id,
            title: "Launch Push".to_string(),
            description: "Feature the serum".to_string(),
            product_name: "Serum".to_string(),
            category: "beauty".to_string(),
            duration: CampaignDuration::OneMonth,
            media_type: MediaRequirement::Any,
            rate_level: 1,
            price,
            publish: true,
        }
    }

    #[test]
    fn test_campaign_crud() {
        let store = MarketplaceStore::new();
        let founder = test_founder(1000.0);
        let founder_id = founder.id;
        store.insert_founder(founder);

        let campaign = store
            .create_campaign(campaign_request(founder_id, 500.0))
            .unwrap();
        assert_eq!(campaign.status, CampaignStatus::Active);
        assert!(campaign.applicants.is_empty());

        let updated = store
            .update_campaign(
                campaign.id,
                UpdateCampaignRequest {
                    title: Some("Bigger Launch".to_string()),
                    price: Some(750.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Bigger Launch");
        assert_eq!(updated.price, 750.0);

        store.delete_campaign(campaign.id).unwrap();
        assert!(store.get_campaign(campaign.id).is_err());
    }

    #[test]
    fn test_create_campaign_validation() {
        let store = MarketplaceStore::new();
        let founder = test_founder(1000.0);
        let founder_id = founder.id;
        store.insert_founder(founder);

        let mut req = campaign_request(founder_id, 500.0);
        req.rate_level = 4;
        assert!(matches!(
            store.create_campaign(req),
            Err(MarketError::Validation(_))
        ));

        let req = campaign_request(founder_id, -5.0);
        assert!(matches!(
            store.create_campaign(req),
            Err(MarketError::Validation(_))
        ));

        // Unknown founder
        let req = campaign_request(Uuid::new_v4(), 100.0);
        assert!(matches!(
            store.create_campaign(req),
            Err(MarketError::NotFound { .. })
        ));
    }

    #[test]
    fn test_status_transitions() {
        let store = MarketplaceStore::new();
        let founder = test_founder(1000.0);
        let founder_id = founder.id;
        store.insert_founder(founder);
        let campaign = store
            .create_campaign(campaign_request(founder_id, 100.0))
            .unwrap();

        // Active -> Paused -> Active -> Completed
        assert_eq!(
            store.pause_campaign(campaign.id).unwrap().status,
            CampaignStatus::Paused
        );
        // Pausing a paused campaign is invalid and changes nothing.
        assert!(matches!(
            store.pause_campaign(campaign.id),
            Err(MarketError::InvalidTransition(_))
        ));
        assert_eq!(
            store.get_campaign(campaign.id).unwrap().status,
            CampaignStatus::Paused
        );
        assert_eq!(
            store.resume_campaign(campaign.id).unwrap().status,
            CampaignStatus::Active
        );
        assert_eq!(
            store.complete_campaign(campaign.id).unwrap().status,
            CampaignStatus::Completed
        );
        // Completed is terminal.
        assert!(store.reject_campaign(campaign.id).is_err());
    }

    #[test]
    fn test_apply_guards() {
        let store = MarketplaceStore::new();
        let founder = test_founder(1000.0);
        let founder_id = founder.id;
        store.insert_founder(founder);
        let campaign = store
            .create_campaign(campaign_request(founder_id, 100.0))
            .unwrap();

        let pending = test_talent(2, TalentStatus::Pending);
        let pending_id = pending.id;
        store.insert_talent(pending);
        assert!(matches!(
            store.apply_to_campaign(campaign.id, pending_id),
            Err(MarketError::TalentNotActive(_))
        ));

        let active = test_talent(2, TalentStatus::Active);
        let active_id = active.id;
        store.insert_talent(active);
        store.apply_to_campaign(campaign.id, active_id).unwrap();
        assert!(store
            .get_campaign(campaign.id)
            .unwrap()
            .is_applicant(active_id));

        // Double apply is refused.
        assert!(matches!(
            store.apply_to_campaign(campaign.id, active_id),
            Err(MarketError::AlreadyApplied { .. })
        ));

        // Applying to a paused campaign is refused.
        store.pause_campaign(campaign.id).unwrap();
        let other = test_talent(2, TalentStatus::Active);
        let other_id = other.id;
        store.insert_talent(other);
        assert!(store.apply_to_campaign(campaign.id, other_id).is_err());
    }

    #[test]
    fn test_rejected_founder_update_leaves_profile_untouched() {
        let store = MarketplaceStore::new();
        let founder = test_founder(1000.0);
        let founder_id = founder.id;
        store.insert_founder(founder);

        // A negative balance rejects the whole update, including the
        // name change bundled into the same request.
        let err = store.update_founder_profile(
            founder_id,
            UpdateFounderRequest {
                name: Some("Changed Name".to_string()),
                company: Some("Changed Co".to_string()),
                wallet_balance: Some(-5.0),
            },
        );
        assert!(matches!(err, Err(MarketError::Validation(_))));

        let after = store.get_founder(founder_id).unwrap();
        assert_eq!(after.name, "Test Founder");
        assert_eq!(after.company, "Testco");
        assert_eq!(after.wallet_balance, 1000.0);
    }

    #[test]
    fn test_media_attach_remove() {
        let store = MarketplaceStore::new();
        let founder = test_founder(1000.0);
        let founder_id = founder.id;
        store.insert_founder(founder);
        let campaign = store
            .create_campaign(campaign_request(founder_id, 100.0))
            .unwrap();

        let updated = store
            .attach_campaign_media(
                campaign.id,
                vec![
                    "https://cdn.talentlink.io/a/1.png".to_string(),
                    "https://cdn.talentlink.io/a/2.png".to_string(),
                ],
            )
            .unwrap();
        assert_eq!(updated.product_images.len(), 2);

        let updated = store
            .remove_campaign_media(campaign.id, "https://cdn.talentlink.io/a/1.png")
            .unwrap();
        assert_eq!(
            updated.product_images,
            vec!["https://cdn.talentlink.io/a/2.png".to_string()]
        );

        // Removing an unknown URL is a no-op, not an error.
        let updated = store
            .remove_campaign_media(campaign.id, "https://cdn.talentlink.io/a/9.png")
            .unwrap();
        assert_eq!(updated.product_images.len(), 1);
    }

    #[test]
    fn test_snapshot_contains_all_collections() {
        let store = MarketplaceStore::new();
        store.seed_demo_data();
        let snapshot = store.snapshot();
        assert!(!snapshot.campaigns.is_empty());
        assert!(!snapshot.talents.is_empty());
        assert!(!snapshot.orders.is_empty());
        assert!(!snapshot.transactions.is_empty());
        assert!(!snapshot.earnings.is_empty());
    }
}
