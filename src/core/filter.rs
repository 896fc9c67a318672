use crate::core::districts::district_matches;
use crate::domain::model::{DeliveryWindow, FilterCriteria, FilterOutcome, Order};
use chrono::{Duration, NaiveDateTime};

pub const DELIVERY_WINDOW_MINUTES: i64 = 30;

/// Orders in the target district delivered within `[start, end]`, input order kept.
pub fn broad_filter(orders: &[Order], criteria: &FilterCriteria) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| district_matches(o.district(), &criteria.district))
        .filter(|o| o.delivery_time() >= criteria.start && o.delivery_time() <= criteria.end)
        .cloned()
        .collect()
}

/// Window anchored at the earliest delivery among `matched`, not at the requested start.
pub fn delivery_window(matched: &[Order]) -> Option<DeliveryWindow> {
    let start = matched.iter().map(Order::delivery_time).min()?;
    let end = start
        .checked_add_signed(Duration::minutes(DELIVERY_WINDOW_MINUTES))
        .unwrap_or(NaiveDateTime::MAX);
    Some(DeliveryWindow { start, end })
}

pub fn apply(orders: &[Order], criteria: &FilterCriteria) -> FilterOutcome {
    let matched = broad_filter(orders, criteria);
    let window = delivery_window(&matched);

    let windowed = match window {
        Some(window) => matched
            .iter()
            .filter(|o| window.contains(o.delivery_time()))
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    tracing::debug!(
        "Broad filter kept {} of {} orders, {} inside the delivery window",
        matched.len(),
        orders.len(),
        windowed.len()
    );

    FilterOutcome {
        matched,
        windowed,
        window,
    }
}
