use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub product_id: u32,
    pub product_name: String,
    pub quantity: u32,
    pub total_price: f64,
    pub customer_name: String,
    pub customer_email: String,
    pub status: OrderStatus,
    #[serde(serialize_with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

// 2024-01-01T12:00:00.000Z
fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
