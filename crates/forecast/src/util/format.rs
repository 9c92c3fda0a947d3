fn group_thousands(whole: i64) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a currency value with cents, e.g. `-$1,234.50`
pub fn format_currency(value: f64) -> String {
    let cents_total = (value.abs() * 100.0).round() as i64;
    let dollars = group_thousands(cents_total / 100);
    let cents = cents_total % 100;

    if value < 0.0 && cents_total > 0 {
        format!("-${dollars}.{cents:02}")
    } else {
        format!("${dollars}.{cents:02}")
    }
}

/// Format a currency value without cents (for tight table columns)
pub fn format_currency_short(value: f64) -> String {
    let whole = value.abs().round() as i64;
    let dollars = group_thousands(whole);

    if value < 0.0 && whole > 0 {
        format!("-${dollars}")
    } else {
        format!("${dollars}")
    }
}

/// Format a value that is already a percentage, with an explicit sign for deltas
pub fn format_percent(value: f64, signed: bool) -> String {
    if signed {
        format!("{value:+.1}%")
    } else {
        format!("{value:.1}%")
    }
}
