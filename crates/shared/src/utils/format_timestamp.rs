use chrono::NaiveDateTime;

/// Renders a `created` timestamp in the API's fixed `DD-MM-YY HH:MM:SS` form.
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format("%d-%m-%y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_day_month_two_digit_year() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 30)
            .unwrap();

        assert_eq!(format_timestamp(&dt), "07-03-24 09:05:30");
    }
}
