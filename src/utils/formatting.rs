//! Formatting utilities used for CLI outputs.

/// "+60 km" / "-5 km" / "0 km"
pub fn km_delta(value: i64) -> String {
    if value > 0 {
        format!("+{} km", value)
    } else {
        format!("{} km", value)
    }
}

pub fn km(value: i64) -> String {
    format!("{} km", value)
}

pub fn money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Charging time as entered, with an "h" unit when it is a plain number.
pub fn hours(value: &str) -> String {
    let v = value.trim();
    if v.parse::<f64>().is_ok() {
        format!("{} h", v)
    } else {
        v.to_string()
    }
}
