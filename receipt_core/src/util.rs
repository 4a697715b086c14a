//! Formatting helpers shared by answers and CLI output.

/// Dollar amount with two decimals: `$405.01`.
#[must_use]
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Weight in kilograms with one decimal: `94.1kg`.
#[must_use]
pub fn format_kg(weight: f64) -> String {
    format!("{weight:.1}kg")
}

/// Join names as an English list with a serial comma:
/// `A`, `A and B`, `A, B, and C`.
#[must_use]
pub fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_rounds_to_cents() {
        assert_eq!(format_money(89.99 + 67.50 + 12.85 + 234.67), "$405.01");
        assert_eq!(format_money(0.0), "$0.00");
    }

    #[test]
    fn kg_rounds_to_tenths() {
        assert_eq!(format_kg(22.3 + 8.7 + 45.2 + 2.1 + 15.8), "94.1kg");
    }

    #[test]
    fn names_use_serial_comma() {
        assert_eq!(join_names(&[]), "");
        assert_eq!(join_names(&["REI"]), "REI");
        assert_eq!(join_names(&["REI", "Target"]), "REI and Target");
        assert_eq!(
            join_names(&["Patagonia", "The Kitchen", "Starbucks", "Target"]),
            "Patagonia, The Kitchen, Starbucks, and Target"
        );
    }
}
