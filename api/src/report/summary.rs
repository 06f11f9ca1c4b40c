//! Projection summary renderer
//!
//! Renders a projection to a single human-readable line for the dashboard
//! and generated reports.

use crate::app::Projection;
use crate::domain::entities::RentSchedule;

/// Render a projection, e.g.
/// `£950.00 monthly rent, next due Thursday 1 February 2024 (in 17 days)`
pub fn render_summary(schedule: &RentSchedule, projection: &Projection) -> String {
    let first = projection.now <= schedule.anchor_date;
    let label = if first { "first due" } else { "next due" };

    format!(
        "{} {} rent, {} {} ({})",
        format_amount(schedule.amount_minor, &schedule.currency),
        schedule.frequency,
        label,
        projection.next_payment_date.format("%A %-d %B %Y"),
        render_countdown(projection.days_until_due),
    )
}

/// Format a minor-unit amount with its currency
pub fn format_amount(amount_minor: i64, currency: &str) -> String {
    let sign = if amount_minor < 0 { "-" } else { "" };
    let abs = amount_minor.unsigned_abs();
    let major = group_thousands(abs / 100);
    let minor = abs % 100;

    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}.{:02}", sign, symbol, major, minor),
        None => format!("{}{}.{:02} {}", sign, major, minor, currency),
    }
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "GBP" => Some("£"),
        "EUR" => Some("€"),
        "USD" => Some("$"),
        _ => None,
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn render_countdown(days: i64) -> String {
    match days {
        0 => "due today".to_string(),
        1 => "in 1 day".to_string(),
        n => format!("in {} days", n),
    }
}
