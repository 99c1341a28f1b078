//! # Domain Types
//!
//! Menu and order types exchanged with the menu/order service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │    Product      │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  category_id    │   │  id             │       │
//! │  │  name           │   │  id, name       │   │  table_number   │       │
//! │  │  order          │   │  price (Money)  │   │  status         │       │
//! │  │  is_active      │   │  is_available   │   │  total_price    │       │
//! │  └─────────────────┘   └─────────────────┘   │  items[]        │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  TableNumber    │   │  OrderRequest   │   │  OrderStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u32, >= 1      │   │  table_number   │   │  Pending        │       │
//! │  │  default 1      │   │  items[]        │   │  Processing     │       │
//! │  └─────────────────┘   │   product_id    │   │  Completed      │       │
//! │                        │   quantity      │   │  Cancelled      │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names follow the service's snake_case JSON. Fields the service may
//! omit are optional or defaulted, and unknown fields are ignored.
//! Timestamps are accepted with or without an offset; a timestamp without
//! one is read as UTC, and one that cannot be read at all becomes `None`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::validate_table_number;

// =============================================================================
// Identifiers
// =============================================================================

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                $name(id)
            }
        }
    };
}

id_type!(
    /// Identifier of a menu category.
    CategoryId
);
id_type!(
    /// Identifier of a product. Cart lines are keyed by it.
    ProductId
);
id_type!(
    /// Identifier of a placed order.
    OrderId
);

/// Lenient reading of service timestamps.
mod timestamp {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }

    /// RFC 3339, or a naive `2024-05-01T12:00:00[.ffffff]` taken as UTC.
    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Category
// =============================================================================

/// A menu category (e.g. "Ramen", "Drinks").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    pub description: Option<String>,

    /// Image URL.
    pub image: Option<String>,

    /// Display order, ascending.
    #[serde(default)]
    pub order: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[ts(as = "Option<String>")]
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,

    #[ts(as = "Option<String>")]
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Product
// =============================================================================

/// A dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    pub category_id: CategoryId,

    pub name: String,

    pub description: Option<String>,

    /// Unit price.
    pub price: Money,

    /// Image URL.
    pub image: Option<String>,

    /// False when the kitchen has taken the item off the menu for now.
    #[serde(default = "default_true")]
    pub is_available: bool,

    /// Display order within the category, ascending.
    #[serde(default)]
    pub order: i32,

    #[ts(as = "Option<String>")]
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,

    #[ts(as = "Option<String>")]
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Builds a product with only the fields the cart cares about.
    pub fn new(id: i64, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: ProductId(id),
            category_id: CategoryId(0),
            name: name.into(),
            description: None,
            price,
            image: None,
            is_available: true,
            order: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

// =============================================================================
// Table Number
// =============================================================================

/// The table an order is delivered to. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct TableNumber(u32);

impl TableNumber {
    /// Validates and wraps a table number.
    pub fn new(number: u32) -> Result<Self, ValidationError> {
        validate_table_number(i64::from(number))?;
        Ok(TableNumber(number))
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Table 1 is assumed until the guest (or staff) picks one.
impl Default for TableNumber {
    fn default() -> Self {
        TableNumber(1)
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for TableNumber {
    type Error = ValidationError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        TableNumber::new(number)
    }
}

impl<'de> Deserialize<'de> for TableNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = u32::deserialize(deserializer)?;
        TableNumber::new(number).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Order Request
// =============================================================================

/// One line of an order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLineRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body of `POST /api/orders/`.
///
/// ```json
/// {"table_number": 5, "items": [{"product_id": 1, "quantity": 2}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderRequest {
    pub table_number: TableNumber,
    pub items: Vec<OrderLineRequest>,
}

// =============================================================================
// Order Status
// =============================================================================

/// Kitchen-side status of a placed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Received, not yet started.
    #[default]
    Pending,
    /// Being prepared.
    Processing,
    /// Served.
    Completed,
    /// Cancelled by staff.
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A line of a confirmed order, priced by the service at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    pub id: i64,
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price charged (frozen at order time).
    pub price: Money,
    #[ts(as = "Option<String>")]
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    /// Snapshot of the product, when the service embeds it.
    pub product: Option<Product>,
}

impl OrderLine {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// Order confirmation returned by `POST /api/orders/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: OrderId,
    pub table_number: TableNumber,
    #[serde(default)]
    pub status: OrderStatus,
    /// Total computed by the service from its own prices.
    pub total_price: Money,
    #[ts(as = "Option<String>")]
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

impl Order {
    /// Total number of portions across all lines.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_number_default_and_validation() {
        assert_eq!(TableNumber::default().get(), 1);
        assert_eq!(TableNumber::new(12).unwrap().get(), 12);
        assert!(TableNumber::new(0).is_err());
        assert!(TableNumber::try_from(0u32).is_err());
    }

    #[test]
    fn test_table_number_rejects_zero_on_deserialize() {
        assert!(serde_json::from_str::<TableNumber>("0").is_err());
        assert_eq!(
            serde_json::from_str::<TableNumber>("5").unwrap(),
            TableNumber::new(5).unwrap()
        );
    }

    #[test]
    fn test_product_deserializes_service_payload() {
        let json = r#"{
            "id": 1,
            "category_id": 2,
            "name": "Ramen",
            "description": null,
            "price": 800,
            "image": null,
            "is_available": true,
            "order": 0,
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-01T12:00:00+00:00",
            "unknown_field": "ignored"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.category_id, CategoryId(2));
        assert_eq!(product.price, Money::new(800));
        assert!(product.created_at.is_some());
    }

    #[test]
    fn test_product_defaults_for_missing_fields() {
        let json = r#"{"id": 2, "category_id": 1, "name": "Gyoza", "price": 400}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.is_available);
        assert_eq!(product.order, 0);
        assert!(product.description.is_none());
    }

    #[test]
    fn test_order_request_wire_format() {
        let request = OrderRequest {
            table_number: TableNumber::new(5).unwrap(),
            items: vec![
                OrderLineRequest {
                    product_id: ProductId(1),
                    quantity: 2,
                },
                OrderLineRequest {
                    product_id: ProductId(2),
                    quantity: 1,
                },
            ],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "table_number": 5,
                "items": [
                    {"product_id": 1, "quantity": 2},
                    {"product_id": 2, "quantity": 1}
                ]
            })
        );
    }

    #[test]
    fn test_order_deserializes_confirmation() {
        let json = r#"{
            "id": 42,
            "table_number": 5,
            "status": "pending",
            "total_price": 2000,
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-01T12:00:00Z",
            "items": [
                {"id": 1, "product_id": 1, "quantity": 2, "price": 800, "created_at": "2024-05-01T12:00:00Z"},
                {"id": 2, "product_id": 2, "quantity": 1, "price": 400, "created_at": "2024-05-01T12:00:00Z"}
            ]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, OrderId(42));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.items[0].line_total(), Money::new(1600));
    }

    #[test]
    fn test_order_accepts_naive_and_unreadable_timestamps() {
        let json = r#"{
            "id": 7,
            "table_number": 3,
            "total_price": 800,
            "created_at": "2024-05-01T12:00:00",
            "updated_at": "yesterday",
            "items": [
                {"id": 1, "product_id": 1, "quantity": 1, "price": 800,
                 "created_at": "2024-05-01T12:00:00.250000"}
            ]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(
            order.created_at.unwrap().to_rfc3339(),
            "2024-05-01T12:00:00+00:00"
        );
        assert!(order.updated_at.is_none());
        assert_eq!(
            order.items[0].created_at.unwrap().timestamp_millis() % 1000,
            250
        );
    }

    #[test]
    fn test_timestamp_with_offset_is_converted_to_utc() {
        let parsed = timestamp::parse("2024-05-01T21:00:00+09:00").unwrap();
        assert_eq!(parsed, timestamp::parse("2024-05-01T12:00:00Z").unwrap());
        assert!(timestamp::parse("").is_none());
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(OrderStatus::Cancelled.to_string(), "cancelled");
    }
}
