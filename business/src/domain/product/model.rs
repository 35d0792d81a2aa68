use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::{Field, ProductError, Violation};
use super::value_objects::Lifecycle;
use crate::domain::shared::value_objects::ShopId;

pub const MAX_DESCRIPTION_CHARS: usize = 255;

/// The five caller-editable fields of a product. Update replaces all of them at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stock: i64,
    pub category: String,
}

impl ProductDetails {
    /// Checks every field, reporting the first one that breaks a rule.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::validation(Field::Name, Violation::Empty));
        }
        if self.description.trim().is_empty() {
            return Err(ProductError::validation(
                Field::Description,
                Violation::Empty,
            ));
        }
        if self.description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(ProductError::validation(
                Field::Description,
                Violation::TooLong,
            ));
        }
        if self.price < 0 {
            return Err(ProductError::validation(Field::Price, Violation::Negative));
        }
        if self.stock < 0 {
            return Err(ProductError::validation(Field::Stock, Violation::Negative));
        }
        if self.category.trim().is_empty() {
            return Err(ProductError::validation(Field::Category, Violation::Empty));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub shop_id: ShopId,
    pub details: ProductDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub lifecycle: Lifecycle,
}

impl Product {
    pub fn new(shop_id: ShopId, details: ProductDetails) -> Result<Self, ProductError> {
        details.validate()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            shop_id,
            details,
            created_at: now,
            updated_at: now,
            lifecycle: Lifecycle::Active,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        shop_id: ShopId,
        details: ProductDetails,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        lifecycle: Lifecycle,
    ) -> Self {
        Self {
            id,
            shop_id,
            details,
            created_at,
            updated_at,
            lifecycle,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Full replace of the editable fields. Deleted products behave as absent.
    pub fn replace_details(
        &mut self,
        details: ProductDetails,
        at: DateTime<Utc>,
    ) -> Result<(), ProductError> {
        if !self.is_active() {
            return Err(ProductError::NotFound);
        }
        details.validate()?;

        self.details = details;
        self.updated_at = at;
        Ok(())
    }

    pub fn mark_deleted(&mut self, at: DateTime<Utc>) -> Result<(), ProductError> {
        if !self.is_active() {
            return Err(ProductError::NotFound);
        }

        self.lifecycle = Lifecycle::Deleted { at };
        Ok(())
    }
}
