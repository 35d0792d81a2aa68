use crate::domain::product::errors::{Field, ProductError, Violation};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// A validated page window: `page >= 1`, `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Result<Self, ProductError> {
        let page = u32::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(ProductError::validation(Field::Page, Violation::OutOfRange))?;
        let limit = u32::try_from(limit)
            .ok()
            .filter(|l| (1..=MAX_LIMIT as u32).contains(l))
            .ok_or(ProductError::validation(Field::Limit, Violation::OutOfRange))?;

        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of rows to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// One page of results plus the size of the whole result set.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page(),
            limit: request.limit(),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_compute_offset_from_page_and_limit() {
        let request = PageRequest::new(3, 20).unwrap();
        assert_eq!(request.offset(), 40);
    }

    #[test]
    fn should_start_first_page_at_zero_offset() {
        let request = PageRequest::new(1, 10).unwrap();
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn should_reject_page_zero() {
        let result = PageRequest::new(0, 10);
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Validation {
                field: Field::Page,
                ..
            }
        ));
    }

    #[test]
    fn should_reject_limit_above_maximum() {
        let result = PageRequest::new(1, MAX_LIMIT + 1);
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Validation {
                field: Field::Limit,
                ..
            }
        ));
    }

    #[test]
    fn should_reject_limit_zero() {
        let result = PageRequest::new(1, 0);
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Validation {
                field: Field::Limit,
                violation: Violation::OutOfRange
            }
        ));
    }

    #[test]
    fn should_accept_limit_bounds() {
        assert!(PageRequest::new(1, 1).is_ok());
        assert!(PageRequest::new(1, MAX_LIMIT).is_ok());
    }

    #[test]
    fn should_keep_request_window_when_mapping_items() {
        let page = Paginated::new(vec![1, 2], 7, PageRequest::new(2, 2).unwrap());
        let mapped = page.map(|n| n * 10);

        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.total, 7);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.limit, 2);
    }

    proptest! {
        #[test]
        fn should_accept_every_valid_window(page in 1i64..10_000, limit in 1i64..=MAX_LIMIT) {
            let request = PageRequest::new(page, limit).unwrap();
            prop_assert_eq!(request.offset(), ((page - 1) * limit) as u64);
        }

        #[test]
        fn should_reject_non_positive_pages(page in i64::MIN..1, limit in 1i64..=MAX_LIMIT) {
            prop_assert!(PageRequest::new(page, limit).is_err());
        }

        #[test]
        fn should_reject_non_positive_limits(page in 1i64..10_000, limit in i64::MIN..1) {
            let is_limit_error = matches!(
                PageRequest::new(page, limit),
                Err(ProductError::Validation { field: Field::Limit, .. })
            );
            prop_assert!(is_limit_error);
        }
    }
}
