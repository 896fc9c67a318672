use crate::domain::model::Order;
use crate::domain::ports::RunLog;
use chrono::{NaiveDateTime, Timelike};
use thiserror::Error;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const MINUTE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const FIELD_COUNT: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("expected 4 fields, found {found}")]
    FieldCount { found: usize },

    #[error("delivery time '{value}' matches neither accepted format")]
    Timestamp { value: String },
}

/// Strict parse: zero-padded fields, single separators, no leap second.
fn parse_exact(value: &str, format: &str) -> Option<NaiveDateTime> {
    let time = NaiveDateTime::parse_from_str(value, format).ok()?;
    if time.nanosecond() >= 1_000_000_000 || time.format(format).to_string() != value {
        return None;
    }
    Some(time)
}

/// Parses a timestamp in the full `YYYY-MM-DD HH:MM:SS` form only.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    parse_exact(value, TIMESTAMP_FORMAT)
}

fn parse_minute_timestamp(value: &str) -> Option<NaiveDateTime> {
    parse_exact(value, MINUTE_TIMESTAMP_FORMAT)
}

/// Turns one data line (`OrderId,Weight,District,DeliveryTime`) into an [`Order`].
///
/// The full-precision timestamp is tried first. When that attempt fails for any
/// reason the delivery time alone is retried at minute precision, and the order
/// is built from whatever id and weight were read, falling back to `0` for each.
/// The weight is only read once the id has parsed.
pub fn parse_order(line: &str, log: &dyn RunLog) -> Result<Order, ParseFailure> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != FIELD_COUNT {
        log.log(&format!("Invalid line format: {}", line));
        return Err(ParseFailure::FieldCount { found: parts.len() });
    }

    let order_id = parts[0].trim().parse::<i32>().ok();
    let weight = order_id.and_then(|_| parts[1].trim().parse::<f64>().ok());
    let district = parts[2].trim();

    if let (Some(order_id), Some(weight), Some(delivery_time)) =
        (order_id, weight, parse_timestamp(parts[3]))
    {
        return Ok(Order::new(order_id, weight, district, delivery_time));
    }

    if let Some(delivery_time) = parse_minute_timestamp(parts[3]) {
        if order_id.is_none() || weight.is_none() {
            tracing::debug!("Accepting line with defaulted id/weight: {}", line);
        }
        return Ok(Order::new(
            order_id.unwrap_or(0),
            weight.unwrap_or(0.0),
            district,
            delivery_time,
        ));
    }

    log.log(&format!("Could not parse order from line: {}", line));
    Err(ParseFailure::Timestamp {
        value: parts[3].to_string(),
    })
}
