//! Wallet and ledger primitives used by the approval path.
//!
//! Orders, debit transactions, and wallet math live here so the store's
//! atomic approve operation stays a straight-line compose of validated
//! pieces.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{
    Campaign, Earning, EarningStatus, Founder, Order, OrderStatus, Transaction, TransactionKind,
};
use talentlink_core::{MarketError, MarketResult};

/// Build the order an approval creates. Payout is pinned to the campaign
/// price at approval time.
pub fn new_order(campaign: &Campaign, talent_id: Uuid) -> Order {
    Order {
        id: Uuid::new_v4(),
        campaign_id: campaign.id,
        talent_id,
        founder_id: campaign.founder_id,
        status: OrderStatus::PendingShipment,
        payout: campaign.price,
        created_at: Utc::now(),
    }
}

/// Build the founder-side debit that pays for an order.
pub fn debit_for_order(campaign: &Campaign, order: &Order) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        user_id: campaign.founder_id,
        kind: TransactionKind::Debit,
        amount: campaign.price,
        description: format!("Talent approval for campaign \"{}\"", campaign.title),
        related_order_id: Some(order.id),
        created_at: Utc::now(),
    }
}

/// Build the talent-side accrual for a fulfilled order.
pub fn earning_for_order(order: &Order) -> Earning {
    Earning {
        id: Uuid::new_v4(),
        talent_id: order.talent_id,
        order_id: order.id,
        amount: order.payout,
        status: EarningStatus::Pending,
        created_at: Utc::now(),
    }
}

/// Debit `amount` from the founder's wallet, refusing to overdraw.
/// On failure the founder is left untouched.
pub fn debit_wallet(founder: &mut Founder, amount: f64) -> MarketResult<()> {
    if founder.wallet_balance < amount {
        return Err(MarketError::InsufficientFunds {
            required: amount,
            available: founder.wallet_balance,
        });
    }
    founder.wallet_balance -= amount;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CampaignDuration, CampaignStatus, MediaRequirement};

    fn sample_campaign(price: f64) -> Campaign {
        Campaign {
            id: Uuid::new_v4(),
            founder_id: Uuid::new_v4(),
            title: "Spring Launch".to_string(),
            description: String::new(),
            product_name: "Serum".to_string(),
            category: "beauty".to_string(),
            duration: CampaignDuration::OneMonth,
            media_type: MediaRequirement::Any,
            rate_level: 1,
            price,
            status: CampaignStatus::Active,
            applicants: Vec::new(),
            approved_talents: Vec::new(),
            product_images: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_order_and_debit_shape() {
        let campaign = sample_campaign(500.0);
        let talent = Uuid::new_v4();

        let order = new_order(&campaign, talent);
        assert_eq!(order.status, OrderStatus::PendingShipment);
        assert_eq!(order.payout, 500.0);
        assert_eq!(order.founder_id, campaign.founder_id);

        let tx = debit_for_order(&campaign, &order);
        assert_eq!(tx.kind, TransactionKind::Debit);
        assert_eq!(tx.amount, 500.0);
        assert_eq!(tx.related_order_id, Some(order.id));
        assert!(tx.description.contains("Spring Launch"));
    }

    #[test]
    fn test_debit_wallet_refuses_overdraw() {
        let mut founder = Founder {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            company: "Acme".to_string(),
            wallet_balance: 300.0,
            created_at: Utc::now(),
        };

        let err = debit_wallet(&mut founder, 500.0).unwrap_err();
        assert!(matches!(err, MarketError::InsufficientFunds { .. }));
        assert_eq!(founder.wallet_balance, 300.0);

        debit_wallet(&mut founder, 300.0).unwrap();
        assert_eq!(founder.wallet_balance, 0.0);
    }

    #[test]
    fn test_earning_mirrors_order() {
        let campaign = sample_campaign(750.0);
        let order = new_order(&campaign, Uuid::new_v4());
        let earning = earning_for_order(&order);
        assert_eq!(earning.amount, 750.0);
        assert_eq!(earning.order_id, order.id);
        assert_eq!(earning.status, EarningStatus::Pending);
    }
}
