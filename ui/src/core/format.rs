//! Formatting helpers for presenting listings and chat.

use time::{macros::format_description, OffsetDateTime, UtcOffset};

/// `1200` -> `"1,200 sqft"`.
pub fn format_area(sqft: u32) -> String {
    format!("{} sqft", group_thousands(sqft))
}

pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"3 bd • 2 ba"` style summary used on cards.
pub fn format_rooms(bedrooms: u8, bathrooms: u8) -> String {
    format!("{bedrooms} bd • {bathrooms} ba")
}

/// Wall-clock time in the local offset, falling back to UTC where the
/// offset cannot be determined.
pub fn now_local() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    match UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset),
        Err(_) => now,
    }
}

/// `HH:MM` label shown under chat bubbles.
pub fn clock_label(at: OffsetDateTime) -> String {
    at.format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "--:--".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(950), "950");
        assert_eq!(group_thousands(1200), "1,200");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn area_and_rooms() {
        assert_eq!(format_area(4500), "4,500 sqft");
        assert_eq!(format_rooms(3, 2), "3 bd • 2 ba");
    }

    #[test]
    fn clock_label_pads() {
        assert_eq!(clock_label(datetime!(2024-05-01 09:05 UTC)), "09:05");
        assert_eq!(clock_label(datetime!(2024-05-01 17:45 UTC)), "17:45");
    }
}
