use crate::utils::error::{Result, ZoneEtlError};
use std::collections::BTreeSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ZoneEtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ZoneEtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ZoneEtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Normalize raw origin input the way the interactive tool accepts it: trim,
/// keep tokens that are all digits and at most 3 characters, left-pad with
/// zeros. Duplicates collapse and the result is sorted, so downstream output
/// never depends on how the user ordered the list.
pub fn normalize_origin_list(raw: &[String]) -> Vec<String> {
    let mut normalized = BTreeSet::new();
    for token in raw {
        let token = token.trim();
        if !token.is_empty() && token.len() <= 3 && token.chars().all(|c| c.is_ascii_digit()) {
            normalized.insert(format!("{:0>3}", token));
        }
    }
    normalized.into_iter().collect()
}

/// At least one origin must survive normalization for a run to make sense.
pub fn validate_origin_list(field_name: &str, origins: &[String]) -> Result<()> {
    if origins.is_empty() {
        return Err(ZoneEtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "at least one valid 3-digit origin ZIP is required".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_pads_and_sorts() {
        let result = normalize_origin_list(&owned(&["84", " 7 ", "915"]));
        assert_eq!(result, owned(&["007", "084", "915"]));
    }

    #[test]
    fn test_normalize_drops_invalid_tokens() {
        let result = normalize_origin_list(&owned(&["", "abc", "1234", "12a", "840"]));
        assert_eq!(result, owned(&["840"]));
    }

    #[test]
    fn test_normalize_collapses_duplicates() {
        let result = normalize_origin_list(&owned(&["840", "840", "84"]));
        assert_eq!(result, owned(&["084", "840"]));
    }

    #[test]
    fn test_validate_origin_list_rejects_empty() {
        assert!(validate_origin_list("origins", &[]).is_err());
        assert!(validate_origin_list("origins", &owned(&["840"])).is_ok());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("customer", "Acme").is_ok());
        assert!(validate_non_empty_string("customer", "   ").is_err());
    }
}
