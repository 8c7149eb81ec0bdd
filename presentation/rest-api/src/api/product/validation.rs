use once_cell::sync::Lazy;
use poem_openapi::Object;
use regex::Regex;

use super::dto::{CreateProductRequest, UpdateProductRequest};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[A-Z][a-zA-Z]*$").expect("name pattern is valid"));

/// A single field-level constraint failure, the shape reported on 400
/// responses. Equality is by field and message.
#[derive(Debug, Clone, PartialEq, Eq, Object)]
#[oai(rename_all = "camelCase")]
pub struct Violation {
    pub field_name: String,
    pub message: String,
}

impl Violation {
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Object)]
pub struct ValidationErrorResponse {
    pub violations: Vec<Violation>,
}

/// Create payload: every field is required and `id` must be absent.
/// Returns one violation per failed constraint; empty means valid.
pub fn validate_create(request: &CreateProductRequest) -> Vec<Violation> {
    let mut violations = Vec::new();

    if request.id.is_some() {
        violations.push(Violation::new("id", "must be null"));
    }
    match &request.name {
        Some(name) => check_name(name, &mut violations),
        None => violations.push(Violation::new("name", "must not be null")),
    }
    check_required_positive("barcode", request.barcode, &mut violations);
    check_required_positive("countInStock", request.count_in_stock, &mut violations);
    check_required_positive("price", request.price, &mut violations);

    violations
}

/// Update payload: every field is optional, but present fields must satisfy
/// the same constraints as on create. An all-absent body is valid.
pub fn validate_update(request: &UpdateProductRequest) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Some(name) = &request.name {
        check_name(name, &mut violations);
    }
    check_positive("barcode", request.barcode, &mut violations);
    check_positive("countInStock", request.count_in_stock, &mut violations);
    check_positive("price", request.price, &mut violations);

    violations
}

fn check_name(name: &str, violations: &mut Vec<Violation>) {
    let length = name.chars().count();
    if !(3..=255).contains(&length) {
        violations.push(Violation::new("name", "size must be between 3 and 255"));
    }
    if !NAME_PATTERN.is_match(name) {
        violations.push(Violation::new("name", "name should be valid"));
    }
}

fn check_required_positive(field_name: &str, value: Option<i64>, violations: &mut Vec<Violation>) {
    match value {
        Some(value) => {
            if value <= 0 {
                violations.push(Violation::new(field_name, "must be greater than 0"));
            }
        }
        None => violations.push(Violation::new(field_name, "must not be null")),
    }
}

fn check_positive(field_name: &str, value: Option<i64>, violations: &mut Vec<Violation>) {
    if let Some(value) = value
        && value <= 0
    {
        violations.push(Violation::new(field_name, "must be greater than 0"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create_request() -> CreateProductRequest {
        CreateProductRequest {
            id: None,
            name: Some("Test".to_string()),
            barcode: Some(1),
            count_in_stock: Some(1),
            price: Some(10),
        }
    }

    #[test]
    fn should_accept_valid_create_request() {
        let violations = validate_create(&valid_create_request());

        assert!(violations.is_empty());
    }

    #[test]
    fn should_report_single_size_violation_for_too_short_name() {
        let request = CreateProductRequest {
            name: Some("Tt".to_string()),
            ..valid_create_request()
        };

        let violations = validate_create(&request);

        assert_eq!(
            violations,
            vec![Violation::new("name", "size must be between 3 and 255")]
        );
    }

    #[test]
    fn should_report_pattern_violation_for_lowercase_name() {
        let request = CreateProductRequest {
            name: Some("test".to_string()),
            ..valid_create_request()
        };

        let violations = validate_create(&request);

        assert_eq!(
            violations,
            vec![Violation::new("name", "name should be valid")]
        );
    }

    #[test]
    fn should_report_missing_fields_on_create() {
        let request = CreateProductRequest {
            id: None,
            name: None,
            barcode: None,
            count_in_stock: None,
            price: None,
        };

        let violations = validate_create(&request);

        assert_eq!(
            violations,
            vec![
                Violation::new("name", "must not be null"),
                Violation::new("barcode", "must not be null"),
                Violation::new("countInStock", "must not be null"),
                Violation::new("price", "must not be null"),
            ]
        );
    }

    #[test]
    fn should_reject_create_request_carrying_an_id() {
        let request = CreateProductRequest {
            id: Some(5),
            ..valid_create_request()
        };

        let violations = validate_create(&request);

        assert_eq!(violations, vec![Violation::new("id", "must be null")]);
    }

    #[test]
    fn should_reject_non_positive_numeric_fields_on_create() {
        let request = CreateProductRequest {
            id: None,
            name: Some("Test".to_string()),
            barcode: Some(0),
            count_in_stock: Some(-1),
            price: Some(0),
        };

        let violations = validate_create(&request);

        assert_eq!(
            violations,
            vec![
                Violation::new("barcode", "must be greater than 0"),
                Violation::new("countInStock", "must be greater than 0"),
                Violation::new("price", "must be greater than 0"),
            ]
        );
    }

    #[test]
    fn should_accept_all_absent_update_request() {
        let request = UpdateProductRequest {
            name: None,
            barcode: None,
            count_in_stock: None,
            price: None,
        };

        let violations = validate_update(&request);

        assert!(violations.is_empty());
    }

    #[test]
    fn should_constrain_present_fields_on_update() {
        let request = UpdateProductRequest {
            name: Some("Tt".to_string()),
            barcode: None,
            count_in_stock: None,
            price: Some(-5),
        };

        let violations = validate_update(&request);

        assert_eq!(
            violations,
            vec![
                Violation::new("name", "size must be between 3 and 255"),
                Violation::new("price", "must be greater than 0"),
            ]
        );
    }

    #[test]
    fn should_accept_update_with_only_valid_price() {
        let request = UpdateProductRequest {
            name: None,
            barcode: None,
            count_in_stock: None,
            price: Some(66),
        };

        let violations = validate_update(&request);

        assert!(violations.is_empty());
    }

    #[test]
    fn should_reject_name_longer_than_255_characters() {
        let request = CreateProductRequest {
            name: Some(format!("T{}", "a".repeat(255))),
            ..valid_create_request()
        };

        let violations = validate_create(&request);

        assert_eq!(
            violations,
            vec![Violation::new("name", "size must be between 3 and 255")]
        );
    }
}
