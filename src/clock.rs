use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Source of "today" for the whole app. Dates are always taken in a
/// configured timezone, never the server-local one, so a task marked
/// done at 23:50 IST stays on the same calendar day wherever the
/// process happens to run.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    tz: Tz,
    fixed: Option<NaiveDate>,
}

impl Clock {
    pub fn new(tz: Tz) -> Self {
        Self { tz, fixed: None }
    }

    pub fn ist() -> Self {
        Self::new(chrono_tz::Asia::Kolkata)
    }

    /// A clock pinned to one date, for deterministic tests.
    pub fn fixed(date: NaiveDate) -> Self {
        Self {
            tz: chrono_tz::Asia::Kolkata,
            fixed: Some(date),
        }
    }

    pub fn today(&self) -> NaiveDate {
        match self.fixed {
            Some(date) => date,
            None => Utc::now().with_timezone(&self.tz).date_naive(),
        }
    }

    pub fn today_string(&self) -> String {
        self.today().format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_formats_iso_date() {
        let clock = Clock::fixed(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        assert_eq!(clock.today_string(), "2026-03-14");
    }

    #[test]
    fn live_clock_yields_valid_date_string() {
        let today = Clock::ist().today_string();
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
