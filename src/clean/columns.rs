use crate::error::FormatError;

pub const CUSTOMER_NAME: &str = "Customer Name";
pub const SALES: &str = "Sales";
pub const SALES_WITH_TAX: &str = "Sales With Tax";

/// The exact column set a cleaned table must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = [CUSTOMER_NAME, SALES, SALES_WITH_TAX];

/// Field positions of the three canonical columns within a validated header
/// row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub name: usize,
    pub sales: usize,
    pub sales_with_tax: usize,
}

/// Case-insensitive exact rename. This is a finite mapping table, not fuzzy
/// matching: anything that is not one of the three known spellings passes
/// through unchanged and fails validation downstream.
fn canonical_name(trimmed: &str) -> Option<&'static str> {
    if trimmed.eq_ignore_ascii_case("name") {
        Some(CUSTOMER_NAME)
    } else if trimmed.eq_ignore_ascii_case(SALES) {
        Some(SALES)
    } else if trimmed.eq_ignore_ascii_case(SALES_WITH_TAX) {
        Some(SALES_WITH_TAX)
    } else {
        None
    }
}

/// Trim each header and apply the rename map.
pub fn normalize_headers(headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .map(|h| {
            let trimmed = h.trim();
            match canonical_name(trimmed) {
                Some(canonical) => canonical.to_string(),
                None => trimmed.to_string(),
            }
        })
        .collect()
}

/// Validate that normalized headers are exactly the required set and locate
/// each column. Duplicated canonical columns count as unexpected.
pub fn validate_columns(headers: &[String]) -> Result<ColumnIndex, FormatError> {
    let mut name = None;
    let mut sales = None;
    let mut sales_with_tax = None;
    let mut unexpected = Vec::new();

    for (i, header) in headers.iter().enumerate() {
        let slot = match header.as_str() {
            CUSTOMER_NAME => &mut name,
            SALES => &mut sales,
            SALES_WITH_TAX => &mut sales_with_tax,
            _ => {
                unexpected.push(header.clone());
                continue;
            }
        };
        if slot.is_some() {
            unexpected.push(header.clone());
        } else {
            *slot = Some(i);
        }
    }

    let mut missing = Vec::new();
    for (required, slot) in REQUIRED_COLUMNS.iter().zip([&name, &sales, &sales_with_tax]) {
        if slot.is_none() {
            missing.push(required.to_string());
        }
    }

    match (name, sales, sales_with_tax) {
        (Some(name), Some(sales), Some(sales_with_tax)) if unexpected.is_empty() => {
            Ok(ColumnIndex {
                name,
                sales,
                sales_with_tax,
            })
        }
        _ => Err(FormatError {
            missing,
            unexpected,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renames_known_spellings_case_insensitively() {
        let normalized = normalize_headers(&headers(&["  NAME ", "sales", "SALES WITH TAX"]));
        assert_eq!(normalized, headers(&[CUSTOMER_NAME, SALES, SALES_WITH_TAX]));
    }

    #[test]
    fn canonical_spellings_map_to_themselves() {
        let normalized =
            normalize_headers(&headers(&["Customer Name", "Sales", "Sales With Tax"]));
        assert_eq!(normalized, headers(&[CUSTOMER_NAME, SALES, SALES_WITH_TAX]));
    }

    #[test]
    fn unknown_spellings_pass_through_and_fail_validation() {
        // "customer name" is not in the rename map; only "name" is
        let normalized = normalize_headers(&headers(&["customer name", "Sales", "Sales With Tax"]));
        let err = validate_columns(&normalized).unwrap_err();
        assert_eq!(err.missing, vec![CUSTOMER_NAME.to_string()]);
        assert_eq!(err.unexpected, vec!["customer name".to_string()]);
    }

    #[test]
    fn validation_locates_columns_in_any_order() {
        let idx =
            validate_columns(&headers(&["Sales With Tax", "Customer Name", "Sales"])).unwrap();
        assert_eq!(
            idx,
            ColumnIndex {
                name: 1,
                sales: 2,
                sales_with_tax: 0
            }
        );
    }

    #[test]
    fn missing_and_extra_columns_are_both_reported() {
        let err = validate_columns(&headers(&["Customer Name", "Region"])).unwrap_err();
        assert_eq!(
            err.missing,
            vec![SALES.to_string(), SALES_WITH_TAX.to_string()]
        );
        assert_eq!(err.unexpected, vec!["Region".to_string()]);
    }

    #[test]
    fn duplicate_canonical_column_is_unexpected() {
        let err = validate_columns(&headers(&[
            "Customer Name",
            "Sales",
            "Sales",
            "Sales With Tax",
        ]))
        .unwrap_err();
        assert!(err.missing.is_empty());
        assert_eq!(err.unexpected, vec![SALES.to_string()]);
    }
}
