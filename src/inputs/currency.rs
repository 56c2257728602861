//! Currency entry: sanitizing typed amounts and en-IN digit grouping

/// Turn free-text currency entry into a whole amount.
///
/// Every non-digit character is dropped ("₹ 5,00,000" -> 500000). Empty
/// input yields 0; digit strings beyond `u64::MAX` saturate.
pub fn parse_currency_input(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u64>().unwrap_or(u64::MAX)
}

/// Format an amount for the entry box using Indian digit grouping.
/// Zero renders as an empty string so the placeholder shows through.
pub fn format_grouped(amount: u64) -> String {
    if amount == 0 {
        return String::new();
    }
    group_indian(&amount.to_string())
}

/// Insert en-IN separators into a string of ASCII digits:
/// the last three digits form one group, the rest are grouped in pairs.
pub(crate) fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let mut out = String::with_capacity(len + len / 2);

    // Leading group is one or two digits
    let first = if head.len() % 2 == 0 { 2 } else { 1 };
    out.push_str(&head[..first]);
    for pair in head.as_bytes()[first..].chunks(2) {
        out.push(',');
        out.extend(pair.iter().map(|&b| b as char));
    }
    out.push(',');
    out.push_str(tail);
    out
}
