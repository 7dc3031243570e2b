/// Format an amount the way the dashboard shows balances: `$` + en-US grouping,
/// at most three fraction digits with trailing zeros dropped.
pub fn format_currency(amount: f64) -> String {
    format!("${}", group_thousands(amount))
}

/// Percentage badge text, `+5.2%` or `-2.3%`
pub fn format_change(change: f64) -> String {
    // -0.0 prints as "-0"
    let change = if change == 0.0 { 0.0 } else { change };
    if change >= 0.0 {
        format!("+{}%", change)
    } else {
        format!("{}%", change)
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}
