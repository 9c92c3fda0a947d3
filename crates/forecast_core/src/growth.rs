//! Growth curve evaluation
//!
//! A growth factor projects a period-1 base value into period `p`:
//! - linear: `1 + rate * (p - 1)`
//! - exponential: `(1 + rate) ^ (p - 1)`
//!
//! Period 1 always has factor 1. Factors are clamped at zero: a steep decline
//! bottoms out instead of turning a value negative, and an exponential base
//! below zero (rate < -1) would otherwise oscillate in sign.

use crate::model::GrowthCurve;

/// Growth factor for a 1-indexed period. Period 0 is treated as period 1.
pub fn growth_factor(curve: GrowthCurve, rate: f64, period: u32) -> f64 {
    let elapsed = period.saturating_sub(1);
    if elapsed == 0 {
        return 1.0;
    }

    let factor = match curve {
        GrowthCurve::Linear => 1.0 + rate * f64::from(elapsed),
        GrowthCurve::Exponential => {
            let base = 1.0 + rate;
            if base < 0.0 {
                tracing::warn!(rate, "exponential growth base below zero, clamping to 0");
                return 0.0;
            }
            base.powi(elapsed as i32)
        }
    };

    factor.max(0.0)
}

/// Growth factor for a rate given in percent (5.0 = 5%)
pub fn growth_factor_percent(curve: GrowthCurve, percent: f64, period: u32) -> f64 {
    growth_factor(curve, percent / 100.0, period)
}
