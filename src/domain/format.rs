// src/domain/format.rs

/// Dash-separate a Korean phone number. Numbers that fit none of the
/// known shapes come back unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len();

    let groups: &[usize] = if len == 8 {
        &[4, 4]
    } else if digits.starts_with("02") {
        match len {
            9 => &[2, 3, 4],
            10 => &[2, 4, 4],
            _ => return phone.to_string(),
        }
    } else {
        match len {
            10 => &[3, 3, 4],
            11 => &[3, 4, 4],
            _ => return phone.to_string(),
        }
    };

    let mut parts = Vec::with_capacity(groups.len());
    let mut offset = 0;
    for size in groups {
        parts.push(&digits[offset..offset + size]);
        offset += size;
    }
    parts.join("-")
}

/// `202607` -> `2026.07`; anything else is shown as-is.
pub fn format_year_month(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() == 6 && raw.chars().all(|c| c.is_ascii_digit()) {
        format!("{}.{}", &raw[..4], &raw[4..])
    } else {
        raw.to_string()
    }
}
