//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Product`] to be managed by the generic [`actor_framework::ResourceActor`].
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::ProductError;
use crate::model::{Product, ProductDraft, ProductId, ProductPatch};
use actor_framework::ActorEntity;

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductDraft;
    type Patch = ProductPatch;
    type Error = ProductError;

    fn id(&self) -> ProductId {
        self.id
    }

    /// Creates a new Product from a validated draft.
    fn from_create_params(id: ProductId, draft: ProductDraft) -> Result<Self, ProductError> {
        Ok(Self::new(id, draft))
    }

    /// Merges the present fields of the patch into the Product.
    ///
    /// Extra keys are inserted or overwritten one by one; keys the patch does not carry are
    /// left alone. The id never changes.
    fn on_patch(&mut self, patch: ProductPatch) -> Result<(), ProductError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(unit_price) = patch.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(date_added) = patch.date_added {
            self.date_added = date_added;
        }
        if let Some(supplier) = patch.supplier {
            self.supplier = supplier;
        }
        self.extra.extend(patch.extra);
        Ok(())
    }
}
