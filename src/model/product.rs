use crate::validation::rules;
use actor_framework::SequentialId;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SequentialId for ProductId {
    fn first() -> Self {
        Self(1)
    }

    fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

/// Represents a product in the inventory.
///
/// Keys a client submitted beyond the known fields are kept in `extra` and written back
/// alongside them. `quantity` and `unitPrice` are read from numeric strings as well as
/// numbers, since older files stored the request text as-is; they are always written back
/// as numbers.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductDraft`](crate::model::ProductDraft))
/// - Patch parameters ([`ProductPatch`](crate::model::ProductPatch))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: u64,
    #[serde(deserialize_with = "lenient_price")]
    pub unit_price: f64,
    pub date_added: NaiveDate,
    pub supplier: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Builds a product from a validated draft.
    pub fn new(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            date_added: draft.date_added,
            supplier: draft.supplier,
            extra: draft.extra,
        }
    }
}

fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    rules::as_integer(&value)
        .and_then(|n| u64::try_from(n).ok())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid quantity {value}")))
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    rules::as_number(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid unitPrice {value}")))
}

/// DTOs for Product creation, replacement and patching.
///
/// A draft carries every field; it is what `POST` and `PUT` produce after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub quantity: u64,
    pub unit_price: f64,
    pub date_added: NaiveDate,
    pub supplier: String,
    pub extra: Map<String, Value>,
}

/// A shallow merge: only the fields that are `Some` (and the extra keys) are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u64>,
    pub unit_price: Option<f64>,
    pub date_added: Option<NaiveDate>,
    pub supplier: Option<String>,
    pub extra: Map<String, Value>,
}
