use crate::domain::model::Order;
use std::fmt;

/// Case-insensitive district comparison, shared by validation and filtering.
pub fn district_matches(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}

/// Distinct districts seen in the loaded orders, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidDistrictSet {
    districts: Vec<String>,
}

impl ValidDistrictSet {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut districts: Vec<String> = Vec::new();
        for order in orders {
            // exact duplicates only; "Center" and "center" both stay listed
            if !districts.iter().any(|d| d == order.district()) {
                districts.push(order.district().to_string());
            }
        }
        Self { districts }
    }

    pub fn contains(&self, district: &str) -> bool {
        self.districts.iter().any(|d| district_matches(d, district))
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.districts.iter().map(String::as_str)
    }
}

impl fmt::Display for ValidDistrictSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.districts.join(", "))
    }
}
