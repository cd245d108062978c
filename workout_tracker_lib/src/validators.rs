//! Checks run on form input before a [`Workout`](crate::workout::Workout) is built.

/// Coerces raw form text to a number the way a numeric input does:
/// whitespace is ignored, an empty field is `0` and anything unparseable is NaN.
pub fn parse_input_field(value: &str) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        return 0.;
    }

    value.parse::<f64>().unwrap_or(f64::NAN)
}

/// True if every field is a finite number.
pub fn are_input_fields_numeric(fields: &[f64]) -> bool {
    fields.iter().all(|field| field.is_finite())
}

/// True if every field is strictly greater than zero. NaN is never positive.
pub fn are_input_fields_positive(fields: &[f64]) -> bool {
    fields.iter().all(|field| *field > 0.)
}
