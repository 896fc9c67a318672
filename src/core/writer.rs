use crate::core::parser::TIMESTAMP_FORMAT;
use crate::domain::model::Order;
use crate::utils::error::{DeliveryError, Result};

pub const RESULT_HEADER: [&str; 4] = ["OrderId", "Weight", "District", "DeliveryTime"];

/// Serialises orders to the result CSV. The header is always present.
///
/// Fields are written unquoted so every body row parses back through
/// [`crate::core::parser::parse_order`].
pub fn render_result_csv(orders: &[Order]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(RESULT_HEADER)?;
    for order in orders {
        writer.write_record([
            order.order_id().to_string(),
            order.weight().to_string(),
            order.district().to_string(),
            order.delivery_time().format(TIMESTAMP_FORMAT).to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| DeliveryError::IoError(e.into_error()))
}
