//! The live rate table
//!
//! Holds the current [`RateIndex`] snapshot behind an `RwLock<Arc<_>>`.
//! Ingestion builds the replacement index before touching the lock, so the
//! write guard is held only for the pointer swap. Queries clone the `Arc`
//! and scan without holding any guard. Every caller sees either the old or
//! the new index in full.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Datelike, TimeZone, Utc};
use tracing::{debug, info, warn};

use rate_types::army_time::ArmyTime;
use rate_types::day::Day;
use rate_types::errors::{IngestError, QueryError};
use rate_types::rate::{PriceCents, QueryRequest, RateBatch};

use crate::clock::Clock;
use crate::index::RateIndex;
use crate::seed::{load_seed, SeedError};

pub struct RateTable {
    current: RwLock<Arc<RateIndex>>,
    clock: Arc<dyn Clock>,
}

impl RateTable {
    /// Create a table with an empty index.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            current: RwLock::new(Arc::new(RateIndex::empty())),
            clock,
        }
    }

    /// Create a table seeded from the rate document at `path`.
    pub fn from_seed_file(path: impl AsRef<Path>, clock: Arc<dyn Clock>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let batch = load_seed(path)?;
        let table = Self::new(clock);
        table.ingest(&batch)?;

        info!(
            path = %path.display(),
            rules = batch.len(),
            "Rate table seeded"
        );
        Ok(table)
    }

    /// Replace every rule with the contents of `batch`.
    ///
    /// All rules are normalized first. If any is invalid the current index
    /// is left untouched.
    pub fn ingest(&self, batch: &RateBatch) -> Result<(), IngestError> {
        let index = match RateIndex::build(batch, self.clock.now()) {
            Ok(index) => index,
            Err(e) => {
                warn!(error = %e, specs = batch.len(), "Rejected rate batch");
                return Err(e);
            }
        };

        let rules = index.rule_count();
        let days = index.days().count();
        self.install(index);

        info!(specs = batch.len(), rules, days, "Installed new rate index");
        Ok(())
    }

    /// Price of the parking window `[start, end]`.
    ///
    /// Both instants must fall on the same UTC calendar day. The bucket is
    /// chosen by the UTC weekday of `start`.
    pub fn query<Tz: TimeZone>(&self, start: &DateTime<Tz>, end: &DateTime<Tz>) -> Result<PriceCents, QueryError> {
        let start = start.with_timezone(&Utc);
        let end = end.with_timezone(&Utc);

        if start.date_naive() != end.date_naive() {
            debug!(%start, %end, "Query spans multiple days");
            return Err(QueryError::CrossDayRequest);
        }

        let day = Day::from(start.weekday());
        let result = self
            .snapshot()
            .lookup(day, ArmyTime::of(&start), ArmyTime::of(&end));

        debug!(%start, %end, %day, ?result, "Rate query");
        result
    }

    /// Price a decoded query request.
    pub fn query_request(&self, request: &QueryRequest) -> Result<PriceCents, QueryError> {
        self.query(&request.start_time, &request.end_time)
    }

    /// The index currently in effect.
    pub fn snapshot(&self) -> Arc<RateIndex> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    fn install(&self, index: RateIndex) {
        let index = Arc::new(index);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::FixedOffset;
    use rate_types::rate::RateSpec;

    fn clock() -> Arc<dyn Clock> {
        // Wednesday 2020-04-01, Chicago on CDT
        Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2020, 4, 1, 12, 0, 0).unwrap()))
    }

    fn spec(days: &str, times: &str, tz: &str, price: PriceCents) -> RateSpec {
        RateSpec {
            days: days.to_string(),
            times: times.to_string(),
            tz: tz.to_string(),
            price,
        }
    }

    fn utc(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 4, d, h, m, 0).unwrap()
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = RateTable::new(clock());
        assert!(table.snapshot().is_empty());
        assert_eq!(
            table.query(&utc(4, 7, 0), &utc(4, 20, 0)),
            Err(QueryError::NoRatesForDay { day: Day::Saturday })
        );
    }

    #[test]
    fn test_monday_round_trip() {
        let table = RateTable::new(clock());
        table
            .ingest(&RateBatch::new(vec![spec("mon,tues,thurs", "0900-2100", "America/Chicago", 1500)]))
            .unwrap();

        // Monday 2020-04-06, inside 14:00-02:00 UTC
        assert_eq!(table.query(&utc(6, 14, 30), &utc(6, 19, 30)), Ok(1500));
        // Friday has no bucket
        assert_eq!(
            table.query(&utc(3, 14, 30), &utc(3, 19, 30)),
            Err(QueryError::NoRatesForDay { day: Day::Friday })
        );
        // Monday, before the window opens
        assert_eq!(table.query(&utc(6, 13, 0), &utc(6, 15, 0)), Err(QueryError::RateUnavailable));
    }

    #[test]
    fn test_cross_day_request() {
        let table = RateTable::new(clock());
        table
            .ingest(&RateBatch::new(vec![spec("fri,sat", "0000-2400", "UTC", 700)]))
            .unwrap();

        assert_eq!(table.query(&utc(3, 23, 0), &utc(4, 1, 0)), Err(QueryError::CrossDayRequest));
    }

    #[test]
    fn test_cross_day_judged_in_utc() {
        let table = RateTable::new(clock());
        table
            .ingest(&RateBatch::new(vec![spec("fri", "0000-2400", "UTC", 700)]))
            .unwrap();

        // Same local date at -05:00, but 20:00 local is 01:00 UTC the next day
        let cdt = FixedOffset::west_opt(5 * 3600).unwrap();
        let start = cdt.with_ymd_and_hms(2020, 4, 3, 10, 0, 0).unwrap();
        let end = cdt.with_ymd_and_hms(2020, 4, 3, 20, 0, 0).unwrap();
        assert_eq!(table.query(&start, &end), Err(QueryError::CrossDayRequest));

        // Thursday evening at -05:00 is already Friday in UTC
        let start = cdt.with_ymd_and_hms(2020, 4, 2, 20, 0, 0).unwrap();
        let end = cdt.with_ymd_and_hms(2020, 4, 2, 22, 0, 0).unwrap();
        assert_eq!(table.query(&start, &end), Ok(700));
    }

    #[test]
    fn test_failed_ingest_keeps_snapshot() {
        let table = RateTable::new(clock());
        table
            .ingest(&RateBatch::new(vec![spec("mon", "0900-2100", "America/Chicago", 1500)]))
            .unwrap();
        let before = table.snapshot();

        let err = table
            .ingest(&RateBatch::new(vec![
                spec("wed", "0600-1800", "America/Chicago", 1750),
                spec("thurs", "0600-1800", "America/Chicago", 1750),
                spec("sun", "nine-five", "America/Chicago", 925),
            ]))
            .unwrap_err();
        assert!(matches!(err, IngestError::MalformedTimeRange { .. }));

        let after = table.snapshot();
        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(*before, *after);
    }

    #[test]
    fn test_ingest_replaces_everything() {
        let table = RateTable::new(clock());
        table
            .ingest(&RateBatch::new(vec![spec("sun", "0100-0700", "America/Chicago", 925)]))
            .unwrap();
        table
            .ingest(&RateBatch::new(vec![spec("mon", "0900-2100", "America/Chicago", 1500)]))
            .unwrap();

        let index = table.snapshot();
        assert!(index.bucket(Day::Sunday).is_none());
        assert_eq!(index.bucket(Day::Monday).map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_reingest_is_idempotent() {
        let table = RateTable::new(clock());
        let batch = RateBatch::new(vec![
            spec("mon,tues,thurs", "0900-2100", "America/Chicago", 1500),
            spec("mon,wed,sat", "0100-0500", "America/Chicago", 1000),
        ]);

        table.ingest(&batch).unwrap();
        let first = table.snapshot();
        table.ingest(&batch).unwrap();
        let second = table.snapshot();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_query_request() {
        let table = RateTable::new(clock());
        table
            .ingest(&RateBatch::new(vec![spec("wed", "0600-1800", "America/Chicago", 1750)]))
            .unwrap();

        let request: QueryRequest = serde_json::from_str(
            r#"{"start_time":"2015-07-01T07:20:00-05:00","end_time":"2015-07-01T08:00:00-05:00"}"#,
        )
        .unwrap();
        assert_eq!(table.query_request(&request), Ok(1750));
    }
}
