//! Short human-readable rendering of floats.
//!
//! The number of decimals shrinks as the magnitude grows so that a rendered
//! value never carries more than two significant fractional digits:
//!
//! | magnitude  | decimals | example          |
//! |------------|----------|------------------|
//! | whole      | 0        | `3.0` → `3`      |
//! | `< 10`     | ≤ 2      | `1.024` → `1.02` |
//! | `< 100`    | ≤ 1      | `23.25` → `23.2` |
//! | otherwise  | 0        | `953.67` → `954` |
//!
//! Trailing zeros are trimmed, zero is `0`, and infinities are `∞` / `-∞`.

/// Render `n` with at most two significant fractional digits.
///
/// # Examples
///
/// ```
/// use stringables::pretty_float;
///
/// assert_eq!(pretty_float(0.0), "0");
/// assert_eq!(pretty_float(1.024), "1.02");
/// assert_eq!(pretty_float(23.3), "23.3");
/// assert_eq!(pretty_float(953.67), "954");
/// assert_eq!(pretty_float(f64::NEG_INFINITY), "-∞");
/// ```
pub fn pretty_float(n: f64) -> String {
    let n_abs = n.abs();
    if n_abs.is_infinite() {
        return if n < 0.0 { "-∞".to_string() } else { "∞".to_string() };
    }
    if n_abs == 0.0 {
        return "0".to_string();
    }

    if round_to(n_abs, 2) == n_abs.trunc() {
        format!("{n:.0}")
    } else if round_to(n_abs, 2) < 10.0 {
        trim_zeros(format!("{n:.2}"))
    } else if round_to(n_abs, 1) < 100.0 {
        trim_zeros(format!("{n:.1}"))
    } else {
        format!("{n:.0}")
    }
}

fn round_to(n: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (n * scale).round_ties_even() / scale
}

fn trim_zeros(s: String) -> String {
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
