/// Parse a minutes field typed by the user.
///
/// Reads the leading integer (so "45min" is 45). Empty, non-numeric, zero or
/// out-of-range input keeps `previous`; negative input clamps to 1.
pub fn parse_minutes(input: &str, previous: u32) -> u32 {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = match digits[..end].parse::<u32>() {
        Ok(value) => value,
        Err(_) => return previous.max(1),
    };

    if value == 0 {
        previous.max(1)
    } else if negative {
        1
    } else {
        value
    }
}
