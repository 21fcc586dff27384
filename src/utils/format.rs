/// Magnitudes at or above this switch to exponent form
const EXPONENT_ABOVE: f64 = 1e16;
/// Non-zero magnitudes below this switch to exponent form
const EXPONENT_BELOW: f64 = 1e-4;

/// Format a number for display.
///
/// Without a precision, uses the shortest representation that round-trips
/// (`1000`, `25.4`, `0.0001`), in exponent form for very large or very small
/// magnitudes (`1e303`, `1.5e-7`). With a precision, prints exactly that many
/// decimals. Negative zero is shown as `0`.
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    match precision {
        Some(decimals) => format!("{:.*}", decimals, value),
        None => {
            let magnitude = value.abs();
            if value != 0.0 && (magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW) {
                format!("{:e}", value)
            } else {
                value.to_string()
            }
        }
    }
}
