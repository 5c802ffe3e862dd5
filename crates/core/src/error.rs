use thiserror::Error;
use uuid::Uuid;

pub type MarketResult<T> = Result<T, MarketError>;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("Insufficient wallet balance: required {required:.2}, available {available:.2}")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    #[error("Talent {talent_id} already applied to campaign {campaign_id}")]
    AlreadyApplied { campaign_id: Uuid, talent_id: Uuid },

    #[error("Talent {talent_id} is not a pending applicant of campaign {campaign_id}")]
    NotAnApplicant { campaign_id: Uuid, talent_id: Uuid },

    #[error("Talent {0} is not active on the marketplace")]
    TalentNotActive(Uuid),

    #[error("Application of talent {talent_id} to campaign {campaign_id} is already being processed")]
    AlreadyProcessing { campaign_id: Uuid, talent_id: Uuid },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
