//! Marketplace domain types — campaigns, talents, founders, applications,
//! and the order/transaction/earning ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Campaign ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub founder_id: Uuid,
    pub title: String,
    pub description: String,
    pub product_name: String,
    pub category: String,
    pub duration: CampaignDuration,
    pub media_type: MediaRequirement,
    /// 1 (entry) through 3 (premium). Gates which talents see the campaign.
    pub rate_level: u8,
    /// Payout per approved talent, USD.
    pub price: f64,
    pub status: CampaignStatus,
    /// Pending applicant talent ids. Disjoint from `approved_talents`.
    #[serde(default)]
    pub applicants: Vec<Uuid>,
    #[serde(default)]
    pub approved_talents: Vec<Uuid>,
    /// Public URLs of attached product media.
    #[serde(default)]
    pub product_images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    pub fn is_applicant(&self, talent_id: Uuid) -> bool {
        self.applicants.contains(&talent_id)
    }

    pub fn is_approved(&self, talent_id: Uuid) -> bool {
        self.approved_talents.contains(&talent_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
    Rejected,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignDuration {
    OneWeek,
    TwoWeeks,
    OneMonth,
    ThreeMonths,
}

impl Default for CampaignDuration {
    fn default() -> Self {
        CampaignDuration::OneMonth
    }
}

/// What kind of deliverable the campaign asks for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MediaRequirement {
    Image,
    Video,
    Any,
}

impl Default for MediaRequirement {
    fn default() -> Self {
        MediaRequirement::Any
    }
}

// ─── Talent / Founder ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talent {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: String,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social_handles: SocialHandles,
    #[serde(default)]
    pub portfolio_urls: Vec<String>,
    pub rate_level: u8,
    pub status: TalentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialHandles {
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
}

/// Gates marketplace visibility: only `Active` talents can browse and apply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TalentStatus {
    Pending,
    Active,
    Suspended,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Founder {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: String,
    /// Debited by `campaign.price` on each approval.
    pub wallet_balance: f64,
    pub created_at: DateTime<Utc>,
}

// ─── Application ───────────────────────────────────────────────────────────

/// One talent's application to one campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub campaign_id: Uuid,
    pub talent_id: Uuid,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

// ─── Ledger ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub talent_id: Uuid,
    pub founder_id: Uuid,
    pub status: OrderStatus,
    /// Equals the campaign price at approval time.
    pub payout: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingShipment,
    Shipped,
    Delivered,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    pub related_order_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Debit,
    Credit,
}

/// Talent-side ledger counterpart of an order. Read by this service,
/// written by the fulfilment pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Earning {
    pub id: Uuid,
    pub talent_id: Uuid,
    pub order_id: Uuid,
    pub amount: f64,
    pub status: EarningStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EarningStatus {
    Pending,
    Available,
    Withdrawn,
}

// ─── Audit Log ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub actor: String,
    pub action: AuditAction,
    pub resource_type: String,
    pub resource_id: String,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Apply,
    Approve,
    Reject,
    Pause,
    Resume,
    Complete,
    MediaAttach,
    MediaRemove,
    Login,
}

// ─── API Request/Response types ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateCampaignRequest {
    pub founder_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub product_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub duration: CampaignDuration,
    #[serde(default)]
    pub media_type: MediaRequirement,
    #[serde(default = "default_rate_level")]
    pub rate_level: u8,
    pub price: f64,
    /// Create directly in `Active` rather than `Draft`.
    #[serde(default)]
    pub publish: bool,
}

fn default_rate_level() -> u8 {
    1
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCampaignRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub duration: Option<CampaignDuration>,
    pub media_type: Option<MediaRequirement>,
    pub rate_level: Option<u8>,
    pub price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateFounderRequest {
    pub name: Option<String>,
    pub company: Option<String>,
    pub wallet_balance: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTalentRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub skills: Option<Vec<String>>,
    pub social_handles: Option<SocialHandles>,
    pub portfolio_urls: Option<Vec<String>>,
    pub rate_level: Option<u8>,
}

/// Everything a successful approval produced, in one confirmed response.
#[derive(Debug, Clone, Serialize)]
pub struct ApprovalOutcome {
    pub campaign: Campaign,
    pub order: Order,
    pub transaction: Transaction,
    pub founder: Founder,
}

/// Aggregate view of a founder's campaigns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FounderStats {
    pub total_campaigns: u64,
    pub draft: u64,
    pub active: u64,
    pub paused: u64,
    pub completed: u64,
    pub rejected: u64,
    pub total_applicants: u64,
    pub total_approved: u64,
    /// Sum of campaign prices across all of the founder's campaigns.
    pub total_value: f64,
}

/// One coherent read of every collection. Clients resynchronize from this
/// instead of patching local copies optimistically.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub campaigns: Vec<Campaign>,
    pub talents: Vec<Talent>,
    pub orders: Vec<Order>,
    pub transactions: Vec<Transaction>,
    pub earnings: Vec<Earning>,
}

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub talent_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct MediaFilePayload {
    pub filename: String,
    pub content_type: String,
    /// Base64-encoded file bytes.
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct MediaUploadRequest {
    pub founder_id: Uuid,
    pub files: Vec<MediaFilePayload>,
}

#[derive(Debug, Deserialize)]
pub struct MediaRemoveRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: talentlink_core::Role,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: talentlink_core::User,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
