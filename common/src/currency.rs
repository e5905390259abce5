/// Display prefix for every rupee amount.
pub const RUPEE_SYMBOL: &str = "₹";

/// Format a whole-rupee amount with Indian digit grouping: "₹12,50,000".
///
/// The last three digits form one group; everything above is grouped in pairs
/// (lakh, crore, ...).
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("{RUPEE_SYMBOL}{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead == 1 {
        grouped.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if lead == 1 || i > 0 {
            grouped.push(',');
        }
        grouped.push(pair[0] as char);
        grouped.push(pair[1] as char);
    }
    format!("{RUPEE_SYMBOL}{grouped},{tail}")
}

/// Round a fractional rupee amount to whole rupees and format it.
/// Negative and non-finite inputs render as zero.
pub fn format_inr_f64(amount: f64) -> String {
    format_inr(round_rupees(amount))
}

/// Round half-up to whole rupees, clamping at zero.
pub fn round_rupees(amount: f64) -> u64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0;
    }
    amount.round() as u64
}

/// Numeric value of a display price: every digit, in order, everything else dropped.
///
/// "₹12,50,000" → 1250000. A string without digits is worth 0.
pub fn parse_display_amount(display: &str) -> u64 {
    display
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(d as u64))
}

/// Parse a typed amount ("100000", "1,00,000", "1 000 000").
///
/// Returns `None` for blank input or anything other than digits and separators.
pub fn parse_amount_input(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    let mut seen_digit = false;
    let mut value: u64 = 0;
    for c in trimmed.chars() {
        match c {
            '0'..='9' => {
                seen_digit = true;
                value = value
                    .checked_mul(10)?
                    .checked_add(c.to_digit(10)? as u64)?;
            }
            ',' | '_' | ' ' => {}
            _ => return None,
        }
    }
    seen_digit.then_some(value)
}

/// Mark up a base amount by a whole-number percentage, rounded half-up.
pub fn apply_commission(base: u64, percent: u32) -> u64 {
    let scaled = base as u128 * (100 + percent as u128) + 50;
    u64::try_from(scaled / 100).unwrap_or(u64::MAX)
}
