//! Client-side form validation. Advisory only: the backend stays
//! authoritative, these checks just block obviously bad submissions
//! before a network round trip.

/// Positive decimal amount: digits with at most one dot, value > 0.
pub fn validate_amount(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Amount is required".to_string());
    }
    let mut dots = 0;
    for c in trimmed.chars() {
        match c {
            '0'..='9' => {}
            '.' => dots += 1,
            _ => return Err("Please enter a valid amount".to_string()),
        }
    }
    if dots > 1 || trimmed == "." {
        return Err("Please enter a valid amount".to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v > 0.0 => Ok(v),
        _ => Err("Please enter a valid amount".to_string()),
    }
}

/// Phone numbers are 10-15 digits, nothing else.
pub fn validate_phone(input: &str) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Phone number is required".to_string());
    }
    let digits = trimmed.chars().all(|c| c.is_ascii_digit());
    if !digits || trimmed.len() < 10 || trimmed.len() > 15 {
        return Err("Please enter a valid phone number".to_string());
    }
    Ok(())
}

pub fn validate_required(input: &str, label: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_decimals() {
        assert_eq!(validate_amount("500"), Ok(500.0));
        assert_eq!(validate_amount("12.50"), Ok(12.5));
        assert_eq!(validate_amount(" 0.01 "), Ok(0.01));
    }

    #[test]
    fn rejects_bad_amounts() {
        assert!(validate_amount("").is_err());
        assert!(validate_amount("0").is_err());
        assert!(validate_amount("-5").is_err());
        assert!(validate_amount("1.2.3").is_err());
        assert!(validate_amount("12a").is_err());
        assert!(validate_amount(".").is_err());
    }

    #[test]
    fn phone_needs_10_to_15_digits() {
        assert!(validate_phone("01700000000").is_ok());
        assert!(validate_phone("0170000000").is_ok()); // 10 digits
        assert!(validate_phone("123456789").is_err()); // 9 digits
        assert!(validate_phone("1234567890123456").is_err()); // 16 digits
        assert!(validate_phone("01-700-000").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn required_fields() {
        assert!(validate_required("dinner", "Reason").is_ok());
        assert_eq!(
            validate_required("   ", "Reason"),
            Err("Reason is required".to_string())
        );
    }
}
