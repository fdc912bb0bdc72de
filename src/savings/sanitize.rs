//! Input coercion. Nothing here fails: garbage degrades to zero, or to one
//! where the value is used as a divisor.

use std::convert::Infallible;

pub const MAX_FLEET_SIZE: f64 = 100_000.0;

/// Finite values floored at zero; anything else becomes zero.
#[inline]
pub fn non_negative(x: f64) -> f64 {
    if x.is_finite() {
        x.max(0.0)
    } else {
        0.0
    }
}

/// Replacement distances. Floored at one so they can always be divided by.
#[inline]
pub fn divisor(x: f64) -> f64 {
    if x.is_finite() {
        x.max(1.0)
    } else {
        1.0
    }
}

#[inline]
pub fn fleet_size(x: f64) -> f64 {
    if x.is_finite() {
        x.clamp(0.0, MAX_FLEET_SIZE)
    } else {
        0.0
    }
}

/// Parses free-form numeric text. Unparseable text yields NaN, which the
/// coercions above then treat like any other non-finite input.
pub fn parse_lenient(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// `parse_lenient` shaped as a clap value parser. It never rejects input.
pub fn parse_lenient_arg(s: &str) -> Result<f64, Infallible> {
    Ok(parse_lenient(s))
}
