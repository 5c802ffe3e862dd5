//! Display helpers — currency formatting and status colors for list/grid
//! views. Pure functions, no state.

use crate::models::{CampaignStatus, OrderStatus};

/// Format a USD amount as `$1,234.56`. Negative amounts render as
/// `-$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

/// Badge color for a campaign status, hex.
pub fn campaign_status_color(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Draft => "#9CA3AF",
        CampaignStatus::Active => "#22C55E",
        CampaignStatus::Paused => "#F59E0B",
        CampaignStatus::Completed => "#3B82F6",
        CampaignStatus::Rejected => "#EF4444",
    }
}

/// Badge color for an order status, hex.
pub fn order_status_color(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::PendingShipment => "#F59E0B",
        OrderStatus::Shipped => "#38BDF8",
        OrderStatus::Delivered => "#3B82F6",
        OrderStatus::Completed => "#22C55E",
        OrderStatus::Cancelled => "#EF4444",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(500.0), "$500.00");
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(1234567.89), "$1,234,567.89");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(-42.5), "-$42.50");
    }

    #[test]
    fn test_status_colors_distinct() {
        // Active and paused must be visually distinct in the card grid.
        assert_ne!(
            campaign_status_color(CampaignStatus::Active),
            campaign_status_color(CampaignStatus::Paused)
        );
        assert_eq!(campaign_status_color(CampaignStatus::Active), "#22C55E");
        assert_eq!(order_status_color(OrderStatus::PendingShipment), "#F59E0B");
    }
}
