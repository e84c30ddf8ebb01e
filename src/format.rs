/// Formats a number with at most three fractional digits, dropping trailing zeros.
#[must_use]
pub fn fmt_num(x: f64) -> String {
    let s = format!("{x:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_string(),
        s => s.to_string(),
    }
}

/// Rounds to three decimals, nudged up slightly against binary truncation.
#[must_use]
pub fn round3(x: f64) -> f64 {
    ((x + 1e-12) * 1000.0).round() / 1000.0
}
