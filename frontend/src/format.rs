pub fn format_with_commas(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(integer: &str) -> String {
    let digits = integer.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}--", symbol);
    }
    // format from the decimal string so nothing is capped at integer width
    let fixed = format!("{:.2}", amount.abs());
    let (integer, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, group_digits(integer), cents)
}

pub fn format_entered_amount(amount: &str, symbol: &str) -> String {
    format!("{}{}", symbol, amount.trim())
}
