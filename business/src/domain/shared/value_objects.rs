use uuid::Uuid;

use crate::domain::product::errors::{Field, ProductError, Violation};

/// Identifies the shop that owns a product.
/// Comes from the caller's request context, never from a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShopId(Uuid);

impl ShopId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Parses a shop identifier supplied as text (e.g. a request header).
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| ProductError::validation(Field::ShopId, Violation::Malformed))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ShopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_shop_id_from_uuid_text() {
        let id = Uuid::new_v4();
        let shop_id = ShopId::parse(&id.to_string()).unwrap();
        assert_eq!(shop_id.as_uuid(), id);
    }

    #[test]
    fn should_tolerate_surrounding_whitespace() {
        let id = Uuid::new_v4();
        let shop_id = ShopId::parse(&format!("  {id} ")).unwrap();
        assert_eq!(shop_id, ShopId::new(id));
    }

    #[test]
    fn should_reject_malformed_shop_id() {
        let result = ShopId::parse("s1");

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Validation {
                field: Field::ShopId,
                violation: Violation::Malformed
            }
        ));
    }

    #[test]
    fn should_display_shop_id() {
        let id = Uuid::new_v4();
        assert_eq!(format!("{}", ShopId::new(id)), id.to_string());
    }
}
