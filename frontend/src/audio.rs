/// `MM:SS` for a playback position. Unknown or negative positions read as
/// `00:00`; minutes are not wrapped into hours.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Where along the progress bar a click landed, as a fraction in `[0, 1]`.
pub fn seek_fraction(click_x: f64, bar_left: f64, bar_width: f64) -> f64 {
    if !bar_width.is_finite() || bar_width <= 0.0 {
        return 0.0;
    }
    ((click_x - bar_left) / bar_width).clamp(0.0, 1.0)
}

pub fn seek_time(fraction: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0) * duration
}

pub fn progress_percent(elapsed: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !elapsed.is_finite() {
        return 0.0;
    }
    (elapsed / duration * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(75.0), "01:15");
        assert_eq!(format_clock(59.99), "00:59");
        assert_eq!(format_clock(3725.0), "62:05");
    }

    #[test]
    fn clock_for_unknown_duration() {
        assert_eq!(format_clock(f64::NAN), "00:00");
        assert_eq!(format_clock(f64::INFINITY), "00:00");
        assert_eq!(format_clock(-3.0), "00:00");
    }

    #[test]
    fn click_position_maps_to_elapsed_time() {
        let p = seek_fraction(150.0, 50.0, 400.0);
        assert_eq!(p, 0.25);
        assert_eq!(seek_time(p, 120.0), 30.0);
    }

    #[test]
    fn clicks_outside_the_bar_are_clamped() {
        assert_eq!(seek_fraction(10.0, 50.0, 400.0), 0.0);
        assert_eq!(seek_fraction(900.0, 50.0, 400.0), 1.0);
        assert_eq!(seek_fraction(60.0, 50.0, 0.0), 0.0);
    }

    #[test]
    fn seeking_before_metadata_loads_stays_at_start() {
        assert_eq!(seek_time(0.5, f64::NAN), 0.0);
        assert_eq!(progress_percent(10.0, f64::NAN), 0.0);
    }

    #[test]
    fn progress_is_a_percentage() {
        assert_eq!(progress_percent(30.0, 120.0), 25.0);
        assert_eq!(progress_percent(130.0, 120.0), 100.0);
    }
}
