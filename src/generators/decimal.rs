use rand::Rng;

use crate::error::SensorgenError;
use crate::generators::traits::ValueGenerator;
use crate::series::ValueRange;

/// Uniform draws from a half-open range, rendered as fixed-precision decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalGenerator {
    range: ValueRange,
    precision: Option<usize>,
}

impl DecimalGenerator {
    /// `precision: None` keeps the full float value instead of rounding.
    pub fn new(range: ValueRange, precision: Option<usize>) -> Result<Self, SensorgenError> {
        if !range.is_valid() || !has_representable_value(range, precision) {
            return Err(SensorgenError::InvalidRange {
                min: range.min,
                max: range.max,
            });
        }
        Ok(Self { range, precision })
    }
}

impl ValueGenerator for DecimalGenerator {
    fn generate(&self) -> String {
        random_decimal(&mut rand::rng(), self.range, self.precision)
    }
}

/// Draws one value from `[range.min, range.max)` and renders it.
///
/// Rounding can push a draw onto `max` (59.996 -> "60.00") or below `min`,
/// so those renderings are re-drawn. The range must hold at least one value
/// on the precision grid, which `DecimalGenerator::new` checks.
pub(crate) fn random_decimal<R: Rng + ?Sized>(
    rng: &mut R,
    range: ValueRange,
    precision: Option<usize>,
) -> String {
    loop {
        let value = rng.random_range(range.min..range.max);
        let Some(digits) = precision else {
            return value.to_string();
        };
        let rendered = format!("{value:.digits$}");
        if rendered
            .parse::<f64>()
            .is_ok_and(|parsed| range.contains(parsed))
        {
            return rendered;
        }
    }
}

/// True when some value on the precision grid renders inside the range.
///
/// The candidate is found by rendering `min` exactly as `random_decimal` renders
/// draws, so the two agree on float edge cases like `min` one ULP above 0.35.
fn has_representable_value(range: ValueRange, precision: Option<usize>) -> bool {
    let Some(digits) = precision else {
        return true;
    };
    let render = |value: f64| format!("{value:.digits$}").parse::<f64>().ok();

    let Some(mut candidate) = render(range.min) else {
        return false;
    };
    if candidate < range.min {
        let step = 10f64.powi(-i32::try_from(digits).unwrap_or(i32::MAX));
        let Some(next) = render(candidate + step) else {
            return false;
        };
        candidate = next;
    }
    range.contains(candidate)
}
