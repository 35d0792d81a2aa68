use std::fmt;

/// Input fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ShopId,
    Name,
    Description,
    Price,
    Stock,
    Category,
    Page,
    Limit,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::ShopId => write!(f, "shop_id"),
            Field::Name => write!(f, "name"),
            Field::Description => write!(f, "description"),
            Field::Price => write!(f, "price"),
            Field::Stock => write!(f, "stock"),
            Field::Category => write!(f, "category"),
            Field::Page => write!(f, "page"),
            Field::Limit => write!(f, "limit"),
        }
    }
}

/// The rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Empty,
    TooLong,
    Negative,
    OutOfRange,
    Malformed,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty => write!(f, "empty"),
            Violation::TooLong => write!(f, "too_long"),
            Violation::Negative => write!(f, "negative"),
            Violation::OutOfRange => write!(f, "out_of_range"),
            Violation::Malformed => write!(f, "malformed"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.{field}_{violation}")]
    Validation { field: Field, violation: Violation },
    #[error("product.not_found")]
    NotFound,
    #[error("{0}")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    pub fn validation(field: Field, violation: Violation) -> Self {
        ProductError::Validation { field, violation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;

    #[test]
    fn should_render_validation_error_as_code() {
        let err = ProductError::validation(Field::Description, Violation::TooLong);
        assert_eq!(err.to_string(), "product.description_too_long");
    }

    #[test]
    fn should_render_shop_id_field_in_snake_case() {
        let err = ProductError::validation(Field::ShopId, Violation::Malformed);
        assert_eq!(err.to_string(), "product.shop_id_malformed");
    }

    #[test]
    fn should_pass_repository_code_through() {
        let err: ProductError = RepositoryError::DatabaseError.into();
        assert_eq!(err.to_string(), "repository.database_error");
    }
}
