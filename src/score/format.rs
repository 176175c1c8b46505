//! Rating display helpers

/// Format a rating, "0.0"-style for missing or non-finite values
pub fn format_rating(rating: Option<f64>, decimals: usize) -> String {
    format!("{:.*}", decimals, safe_rating(rating))
}

/// Rating as a plain number, 0 when missing or not finite
pub fn safe_rating(rating: Option<f64>) -> f64 {
    match rating {
        Some(r) if r.is_finite() => r,
        _ => 0.0,
    }
}
