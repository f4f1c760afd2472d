use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use chrono_tz::Tz;

pub const DEFAULT_NO_SHOW_WIN_POINTS: i64 = 3;
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Madrid;

/// League-wide rules and calendar settings shared by the API and the exporter.
#[derive(Debug, Clone)]
pub struct LeagueSettings {
    /// Points awarded to the side whose opponent failed to turn up.
    pub no_show_win_points: i64,
    /// Timezone in which "today" is evaluated for upcoming/pending listings.
    pub timezone: Tz,
    /// Kick-off time stamped on generated fixtures.
    pub kickoff_time: NaiveTime,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            no_show_win_points: DEFAULT_NO_SHOW_WIN_POINTS,
            timezone: DEFAULT_TIMEZONE,
            kickoff_time: default_kickoff_time(),
        }
    }
}

pub fn default_kickoff_time() -> NaiveTime {
    NaiveTime::from_hms_opt(22, 30, 0).unwrap_or(NaiveTime::MIN)
}

impl LeagueSettings {
    pub fn today(&self) -> NaiveDate {
        self.local_date_at(Utc::now())
    }

    pub fn now_local_iso(&self) -> String {
        self.local_iso_at(Utc::now())
    }

    pub fn local_date_at(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.timezone).date_naive()
    }

    pub fn local_iso_at(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.timezone)
            .to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    /// `scheduled_at` value for a fixture played on `date`.
    pub fn kickoff_on(&self, date: NaiveDate) -> String {
        date.and_time(self.kickoff_time)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_local_date_crosses_midnight_in_league_timezone() {
        let settings = LeagueSettings::default();
        let late_utc = Utc.with_ymd_and_hms(2025, 3, 14, 23, 30, 0).unwrap();

        assert_eq!(
            settings.local_date_at(late_utc),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_local_iso_has_offset_and_second_precision() {
        let settings = LeagueSettings::default();
        let instant = Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap();

        assert_eq!(settings.local_iso_at(instant), "2025-07-01T12:00:00+02:00");
    }

    #[test]
    fn test_kickoff_uses_configured_time() {
        let settings = LeagueSettings::default();
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();

        assert_eq!(settings.kickoff_on(date), "2025-01-09 22:30:00");
    }
}
