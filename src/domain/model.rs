use chrono::NaiveDateTime;

/// One delivery record read from the order source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    order_id: i32,
    weight: f64,
    district: String,
    delivery_time: NaiveDateTime,
}

impl Order {
    pub fn new(
        order_id: i32,
        weight: f64,
        district: impl Into<String>,
        delivery_time: NaiveDateTime,
    ) -> Self {
        Self {
            order_id,
            weight,
            district: district.into(),
            delivery_time,
        }
    }

    pub fn order_id(&self) -> i32 {
        self.order_id
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn district(&self) -> &str {
        &self.district
    }

    pub fn delivery_time(&self) -> NaiveDateTime {
        self.delivery_time
    }
}

/// District plus closed `[start, end]` interval chosen by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub district: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl FilterCriteria {
    pub fn new(district: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            district: district.into(),
            start,
            end,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// The 30-minute window anchored at the earliest broad match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DeliveryWindow {
    pub fn contains(&self, time: NaiveDateTime) -> bool {
        time >= self.start && time <= self.end
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Orders that passed the district + interval filter.
    pub matched: Vec<Order>,
    /// Subset of `matched` inside the delivery window.
    pub windowed: Vec<Order>,
    pub window: Option<DeliveryWindow>,
}

#[derive(Debug, Clone, Default)]
pub struct LoadedOrders {
    pub orders: Vec<Order>,
    pub failed_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub loaded: usize,
    pub matched: usize,
    pub windowed: usize,
    pub output_path: Option<String>,
}
