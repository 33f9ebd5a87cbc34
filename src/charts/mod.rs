//! Chart Option Builders
//!
//! Pure functions turning statistics payloads into ECharts option objects.
//! Tooltips are pre-rendered per data point so no JS callbacks are needed.

mod accuracy;
mod distribution;
mod generation;
mod palette;

pub use accuracy::*;
pub use distribution::*;
pub use generation::*;
pub use palette::*;

/// Round a 0..1 ratio to a percentage with one decimal (0.7256 -> 72.6)
pub fn percent_one_decimal(ratio: f64) -> f64 {
    (ratio * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_one_decimal() {
        assert_eq!(percent_one_decimal(0.7256), 72.6);
        assert_eq!(percent_one_decimal(1.0), 100.0);
        assert_eq!(percent_one_decimal(0.0), 0.0);
        assert_eq!(percent_one_decimal(0.3333), 33.3);
    }
}
