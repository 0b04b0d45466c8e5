use chrono::{Datelike, NaiveDate};

pub const MIN_YEAR: i32 = 1930;

pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

pub type Week = [Option<u32>; 7];

pub fn format_birth_date(date: NaiveDate) -> String {
    format!("{:04}/{:02}/{:02}", date.year(), date.month(), date.day())
}

/// Reads back a `YYYY/MM/DD` value. Anything else is `None`.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('/');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || y.is_empty() || m.is_empty() || d.is_empty() {
        return None;
    }
    NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?)
}

/// Year and zero-based month the picker opens on.
pub fn initial_view(selected: &str, today: NaiveDate) -> (i32, u32) {
    let date = parse_birth_date(selected).unwrap_or(today);
    (date.year(), date.month0())
}

pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month) = if month0 >= 11 { (year + 1, 1) } else { (year, month0 + 2) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Sunday-first calendar rows for the month; padding cells are `None`.
pub fn month_grid(year: i32, month0: u32) -> Vec<Week> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month0 + 1, 1) else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_sunday() as i64;
    let days = days_in_month(year, month0) as i64;

    let mut weeks = Vec::new();
    let mut day = 1 - leading;
    while day <= days {
        let mut week: Week = [None; 7];
        for cell in week.iter_mut() {
            if day >= 1 && day <= days {
                *cell = Some(day as u32);
            }
            day += 1;
        }
        weeks.push(week);
    }
    weeks
}

/// Newest year first, down to `MIN_YEAR`.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (MIN_YEAR..=current_year.max(MIN_YEAR)).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(format_birth_date(date(2000, 12, 1)), "2000/12/01");
        assert_eq!(format_birth_date(date(1987, 3, 9)), "1987/03/09");
    }

    #[test]
    fn parses_what_it_formats() {
        assert_eq!(parse_birth_date("1987/03/09"), Some(date(1987, 3, 9)));
    }

    #[test]
    fn malformed_values_do_not_parse() {
        for value in ["", "1987", "1987/03", "1987//09", "1987/13/01", "a/b/c", "1987/03/09/1"] {
            assert_eq!(parse_birth_date(value), None, "{value}");
        }
    }

    #[test]
    fn opens_on_selected_month_or_today() {
        let today = date(2025, 12, 10);
        assert_eq!(initial_view("1990/04/12", today), (1990, 3));
        assert_eq!(initial_view("", today), (2025, 11));
        assert_eq!(initial_view("garbage", today), (2025, 11));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2025, 11), 31);
        assert_eq!(days_in_month(2025, 3), 30);
    }

    #[test]
    fn grid_starts_on_sunday() {
        // June 2025 starts on a Sunday and needs five rows.
        let weeks = month_grid(2025, 5);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], Some(1));
        assert_eq!(weeks[4][1], Some(30));
        assert_eq!(weeks[4][2], None);
    }

    #[test]
    fn grid_pads_leading_days() {
        // February 2025 starts on a Saturday.
        let weeks = month_grid(2025, 1);
        assert_eq!(weeks[0], [None, None, None, None, None, None, Some(1)]);
        let filled: Vec<u32> = weeks.iter().flatten().flatten().copied().collect();
        assert_eq!(filled, (1..=28).collect::<Vec<_>>());
    }

    #[test]
    fn years_run_back_to_1930() {
        let years = year_options(2025);
        assert_eq!(years.first(), Some(&2025));
        assert_eq!(years.last(), Some(&1930));
        assert_eq!(years.len(), 96);
    }
}
