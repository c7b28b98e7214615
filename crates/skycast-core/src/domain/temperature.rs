//! Temperature conversion and formatting.

/// Convert whole degrees Fahrenheit to Celsius, rounded to the nearest half degree.
#[allow(clippy::cast_precision_loss)]
pub fn fahrenheit_to_celsius_half(fahrenheit: i32) -> f64 {
    // Twice the Celsius value, rounded, then halved.
    let doubled = f64::from(fahrenheit - 32) * 10.0 / 9.0;
    doubled.round() / 2.0
}

/// Format a Celsius value, dropping the fractional part when it is zero.
pub fn format_celsius(celsius: f64) -> String {
    if celsius.fract() == 0.0 {
        format!("{celsius:.0}")
    } else {
        format!("{celsius:.1}")
    }
}

/// Format a temperature as `72°F/22°C`.
pub fn format_temperature_pair(fahrenheit: i32) -> String {
    format!(
        "{fahrenheit}°F/{}°C",
        format_celsius(fahrenheit_to_celsius_half(fahrenheit))
    )
}
