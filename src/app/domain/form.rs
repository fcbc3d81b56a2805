use crate::app::error::{LabelError, Result};

use super::record::Category;

/// Largest machine count one form submission may add.
pub const MAX_UNITS: u32 = 999;

/// Raw field values as typed into the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelForm {
    pub order_name: String,
    pub unit_count: String,
    pub category: String,
}

/// A form that passed validation and can be handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRequest {
    pub order_name: String,
    pub unit_total: u32,
    pub category: Category,
}

impl LabelForm {
    pub fn new(order_name: &str, unit_count: &str, category: &str) -> Self {
        Self {
            order_name: order_name.to_string(),
            unit_count: unit_count.to_string(),
            category: category.to_string(),
        }
    }

    pub fn validate(&self) -> Result<LabelRequest> {
        let order_name = self.order_name.trim();
        let unit_count = self.unit_count.trim();
        let category = self.category.trim();

        if order_name.is_empty() || unit_count.is_empty() || category.is_empty() {
            return Err(LabelError::Validation(
                "All fields must be filled in!".to_string(),
            ));
        }

        let unit_total: i64 = unit_count.parse().map_err(|_| {
            LabelError::Validation("Number of HW Machines must be a valid number!".to_string())
        })?;
        let unit_total = u32::try_from(unit_total)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                LabelError::Validation(
                    "Number of HW Machines must be at least 1!".to_string(),
                )
            })?;
        if unit_total > MAX_UNITS {
            return Err(LabelError::Validation(format!(
                "Number of HW Machines must be at most {MAX_UNITS}!"
            )));
        }

        Ok(LabelRequest {
            order_name: order_name.to_string(),
            unit_total,
            category: category.parse()?,
        })
    }
}

impl LabelRequest {
    pub fn new(order_name: &str, unit_total: u32, category: Category) -> Result<Self> {
        LabelForm::new(order_name, &unit_total.to_string(), category.label()).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let request = LabelForm::new("  Acme 42 ", " 3 ", "Cards").validate().unwrap();
        assert_eq!(request.order_name, "Acme 42");
        assert_eq!(request.unit_total, 3);
        assert_eq!(request.category, Category::Card);
    }

    #[test]
    fn test_missing_fields() {
        for form in [
            LabelForm::new("", "3", "Cards"),
            LabelForm::new("Acme", "   ", "Cards"),
            LabelForm::new("Acme", "3", ""),
        ] {
            let err = form.validate().unwrap_err();
            assert_eq!(err.to_string(), "All fields must be filled in!");
        }
    }

    #[test]
    fn test_count_not_a_number() {
        let err = LabelForm::new("Acme", "three", "Cards").validate().unwrap_err();
        assert!(matches!(err, LabelError::Validation(_)));
        assert_eq!(err.to_string(), "Number of HW Machines must be a valid number!");
    }

    #[test]
    fn test_count_must_be_positive() {
        for count in ["0", "-2"] {
            let err = LabelForm::new("Acme", count, "Cards").validate().unwrap_err();
            assert!(matches!(err, LabelError::Validation(_)), "count {}", count);
        }
    }

    #[test]
    fn test_count_above_cap_rejected() {
        for count in ["1000", "4000000000", "99999999999"] {
            let err = LabelForm::new("Acme", count, "Cards").validate().unwrap_err();
            assert!(matches!(err, LabelError::Validation(_)), "count {}", count);
        }
        let request = LabelForm::new("Acme", "999", "Cards").validate().unwrap();
        assert_eq!(request.unit_total, MAX_UNITS);
    }

    #[test]
    fn test_unknown_category() {
        let err = LabelForm::new("Acme", "1", "Boxes").validate().unwrap_err();
        assert!(matches!(err, LabelError::Validation(_)));
    }

    #[test]
    fn test_request_new_rejects_zero() {
        assert!(LabelRequest::new("Acme", 0, Category::Card).is_err());
        assert!(LabelRequest::new("Acme", 2, Category::Card).is_ok());
    }
}
