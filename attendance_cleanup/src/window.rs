use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// Half-open `[start, end)` span covering one local calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    date: NaiveDate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Today, by the local wall clock.
    pub fn today() -> Self {
        Self::starting_on(Local::now().date_naive(), &Local)
    }

    /// Starts at midnight of `date` in `tz` and lasts exactly 24 hours.
    pub fn starting_on<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);
        // Where a DST jump skips midnight the day begins at the first local
        // time that exists.
        let start = (0..=12)
            .map(|step| midnight + Duration::minutes(15 * step))
            .find_map(|local| tz.from_local_datetime(&local).earliest())
            .map(|start| start.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&midnight));
        TimeWindow {
            date,
            start,
            end: start + Duration::hours(24),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        self.start <= *timestamp && *timestamp < self.end
    }
}
