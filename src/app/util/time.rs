use std::time::{SystemTime, UNIX_EPOCH};

pub fn current_time_in_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis()
}

/// Formats an ISO `YYYY-MM-DD` date as `DD.MM.YYYY` for display on the flyer.
/// Anything that does not match the expected shape is passed through untouched.
pub fn format_display_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();

    match parts.as_slice() {
        [year, month, day] if !year.is_empty() && !month.is_empty() && !day.is_empty() => {
            format!("{}.{}.{}", day, month, year)
        }
        _ => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorders_iso_dates_with_dots() {
        assert_eq!(format_display_date("2025-06-01"), "01.06.2025");
    }

    #[test]
    fn leaves_unrecognized_input_alone() {
        assert_eq!(format_display_date("june 1st"), "june 1st");
        assert_eq!(format_display_date(""), "");
    }
}
