//! Various formatting utilities.

use std::fmt;

use chrono::TimeDelta;


/// Common human-readable date format.
pub const DATE_FORMAT: &str = "%a %b %e %Y";

/// Find the SI unit of a given number and return the number scaled down to that unit.
pub fn number_si_unit(num: f64) -> (f64, char) {
    match num {
        ..=999.0 => (num, ' '),
        ..=999_999.0 => (num / 1_000.0, 'k'),
        ..=999_999_999.0 => (num / 1_000_000.0, 'M'),
        _ => (num / 1_000_000_000.0, 'G'),
    }
}

/// A wrapper that can be used to format a size in bytes for human-readable format.
#[derive(Debug)]
pub struct SizeFmt(pub u64);

impl fmt::Display for SizeFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (size, suffix) = number_si_unit(self.0 as f64);
        if suffix == ' ' {
            write!(f, "{size:.0} B")
        } else {
            write!(f, "{size:.1} {suffix}B")
        }
    }
}

/// A wrapper that can be used to format a time delta for human-readable format, days
/// being the smallest unit because release dates have no time.
#[derive(Debug)]
pub struct TimeDeltaFmt(pub TimeDelta);

impl fmt::Display for TimeDeltaFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {

        let days = self.0.num_days();
        if days < 0 {
            return write!(f, "in {} days", -days);
        }

        let years = days / 365;
        if years > 0 {
            return write!(f, "{years} years ago");
        }

        // All of this is really wrong but it gives a good, human-friendly, idea.
        let months = days / 30;
        if months > 0 {
            return write!(f, "{months} months ago");
        }

        let weeks = days / 7;
        if weeks > 0 {
            return write!(f, "{weeks} weeks ago");
        }

        match days {
            0 => write!(f, "today"),
            _ => write!(f, "{days} days ago"),
        }

    }
}

#[cfg(test)]
mod tests {

    use chrono::TimeDelta;

    use super::{SizeFmt, TimeDeltaFmt};

    #[test]
    fn size() {
        assert_eq!(SizeFmt(512).to_string(), "512 B");
        assert_eq!(SizeFmt(1_500).to_string(), "1.5 kB");
        assert_eq!(SizeFmt(3_036_237_482).to_string(), "3.0 GB");
    }

    #[test]
    fn time_delta() {
        assert_eq!(TimeDeltaFmt(TimeDelta::days(0)).to_string(), "today");
        assert_eq!(TimeDeltaFmt(TimeDelta::days(3)).to_string(), "3 days ago");
        assert_eq!(TimeDeltaFmt(TimeDelta::days(15)).to_string(), "2 weeks ago");
        assert_eq!(TimeDeltaFmt(TimeDelta::days(65)).to_string(), "2 months ago");
        assert_eq!(TimeDeltaFmt(TimeDelta::days(800)).to_string(), "2 years ago");
        assert_eq!(TimeDeltaFmt(TimeDelta::days(-2)).to_string(), "in 2 days");
    }

}
