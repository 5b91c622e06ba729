//! Time normalization
//!
//! Turns one human-authored rule (day codes, a local `"HHMM-HHMM"` window and
//! an IANA zone) into UTC army-time windows, one per listed day.
//!
//! Each window is anchored on the next real occurrence of its weekday in the
//! rule's zone, counted from "now". The UTC offset used is therefore the one
//! in force on that date: the same rule ingested before and after a DST
//! change lands on a different UTC window.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use rate_types::army_time::ArmyTime;
use rate_types::day::{parse_day_codes, Day};
use rate_types::errors::IngestError;
use rate_types::range::{LocalClock, TimeRange};
use rate_types::rate::RateSpec;

use crate::index::WeekdayRule;

/// A normalized rule together with the local weekday it was requested for.
///
/// `requested` is the bucket key; `rule.weekday()` is the UTC weekday of the
/// window start and may differ from it.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRule {
    pub requested: Day,
    pub rule: WeekdayRule,
}

/// Normalize one rule spec against the given "now".
pub fn normalize(spec: &RateSpec, now: DateTime<Utc>) -> Result<Vec<NormalizedRule>, IngestError> {
    let days = parse_day_codes(&spec.days)?;
    let range = TimeRange::parse(&spec.times)?;
    let tz = resolve_timezone(&spec.tz)?;

    let today = now.with_timezone(&tz).date_naive();

    days.into_iter()
        .map(|day| -> Result<NormalizedRule, IngestError> {
            let anchor = anchor_date(today, day);
            let malformed = || IngestError::MalformedTimeRange {
                range: spec.times.clone(),
            };
            let start = local_instant(&tz, anchor, range.start).ok_or_else(malformed)?;
            let end = local_instant(&tz, anchor, range.end).ok_or_else(malformed)?;

            let start_clock = ArmyTime::of(&start);
            let mut end_clock = ArmyTime::of(&end);
            // Equal clocks on distinct instants is a full 24h window ("0000-2400").
            if end_clock < start_clock || (end_clock == start_clock && end > start) {
                end_clock = end_clock.wrapped();
            }

            let weekday = Day::from(start.with_timezone(&Utc).weekday());
            if weekday != day {
                debug!(
                    requested = %day,
                    utc_weekday = %weekday,
                    tz = %spec.tz,
                    "UTC window starts on a different weekday"
                );
            }

            debug!(
                day = %day,
                anchor = %anchor,
                start = %start_clock,
                end = %end_clock,
                price = spec.price,
                "Normalized rate window"
            );

            Ok(NormalizedRule {
                requested: day,
                rule: WeekdayRule::new(weekday, start_clock, end_clock, spec.price, spec.tz.clone()),
            })
        })
        .collect()
}

/// Look up an IANA zone name.
pub fn resolve_timezone(name: &str) -> Result<Tz, IngestError> {
    name.parse::<Tz>().map_err(|_| IngestError::UnknownTimezone {
        name: name.to_string(),
    })
}

/// First date on or after `today` that falls on `target` (0 to 6 days ahead).
pub fn anchor_date(today: NaiveDate, target: Day) -> NaiveDate {
    today
        .iter_days()
        .take(7)
        .find(|date| Day::from(date.weekday()) == target)
        .unwrap_or(today)
}

/// The instant a local clock reading occurs on `date` in `tz`.
///
/// A reading repeated by a DST fall-back resolves to its first occurrence.
/// A reading skipped by a spring-forward gap resolves to one hour later.
fn local_instant(tz: &Tz, date: NaiveDate, clock: LocalClock) -> Option<DateTime<Tz>> {
    let naive = date.and_time(NaiveTime::MIN) + Duration::minutes(clock.minutes_from_midnight());
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Some(instant),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => tz.from_local_datetime(&(naive + Duration::hours(1))).earliest(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(days: &str, times: &str, tz: &str, price: u32) -> RateSpec {
        RateSpec {
            days: days.to_string(),
            times: times.to_string(),
            tz: tz.to_string(),
            price,
        }
    }

    /// Friday 2026-10-16, Chicago on CDT (UTC-5)
    fn summer() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    /// Friday 2020-01-10, Chicago on CST (UTC-6)
    fn winter() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_chicago_weekday_window() {
        let rules = normalize(&spec("mon", "0900-2100", "America/Chicago", 1500), summer()).unwrap();
        assert_eq!(rules.len(), 1);

        let NormalizedRule { requested, rule } = &rules[0];
        assert_eq!(*requested, Day::Monday);
        assert_eq!(rule.weekday(), Day::Monday);
        assert_eq!(rule.start().value(), 1400.0);
        // 21:00 CDT is 02:00 UTC the next day
        assert_eq!(rule.end().value(), 2600.0);
        assert_eq!(rule.price(), 1500);
        assert_eq!(rule.source_tz(), "America/Chicago");
    }

    #[test]
    fn test_one_rule_per_day_code() {
        let rules = normalize(&spec("mon,tues,thurs", "0900-2100", "America/Chicago", 1500), summer()).unwrap();
        let days: Vec<Day> = rules.iter().map(|r| r.requested).collect();
        assert_eq!(days, vec![Day::Monday, Day::Tuesday, Day::Thursday]);
        assert!(rules.iter().all(|r| r.rule.start().value() == 1400.0));
    }

    #[test]
    fn test_anchor_depends_on_current_offset() {
        // Same rule, different "now": the DST offset in force moves the UTC window.
        let summer_rule = &normalize(&spec("mon", "0900-2100", "America/Chicago", 1500), summer()).unwrap()[0];
        let winter_rule = &normalize(&spec("mon", "0900-2100", "America/Chicago", 1500), winter()).unwrap()[0];

        assert_eq!(summer_rule.rule.start().value(), 1400.0);
        assert_eq!(winter_rule.rule.start().value(), 1500.0);
        assert_eq!(winter_rule.rule.end().value(), 2700.0);
        assert_ne!(summer_rule.rule, winter_rule.rule);
    }

    #[test]
    fn test_utc_weekday_can_differ_from_requested() {
        // 01:00 Monday in Tokyo (UTC+9) is 16:00 Sunday UTC
        let rules = normalize(&spec("mon", "0100-0500", "Asia/Tokyo", 800), summer()).unwrap();
        let NormalizedRule { requested, rule } = &rules[0];
        assert_eq!(*requested, Day::Monday);
        assert_eq!(rule.weekday(), Day::Sunday);
        assert_eq!(rule.start().value(), 1600.0);
        assert_eq!(rule.end().value(), 2000.0);
    }

    #[test]
    fn test_utc_window_needs_no_wrap() {
        let rules = normalize(&spec("wed", "0600-1800", "UTC", 1750), summer()).unwrap();
        assert_eq!(rules[0].rule.start().value(), 600.0);
        assert_eq!(rules[0].rule.end().value(), 1800.0);
        assert!(!rules[0].rule.end().is_past_midnight());
    }

    #[test]
    fn test_end_of_day_wraps() {
        let rules = normalize(&spec("sat", "1800-2400", "UTC", 500), summer()).unwrap();
        assert_eq!(rules[0].rule.start().value(), 1800.0);
        assert_eq!(rules[0].rule.end().value(), 2400.0);
    }

    #[test]
    fn test_full_day_window() {
        let rules = normalize(&spec("wed", "0000-2400", "UTC", 2), summer()).unwrap();
        assert_eq!(rules[0].rule.start().value(), 0.0);
        assert_eq!(rules[0].rule.end().value(), 2400.0);
    }

    #[test]
    fn test_anchor_date() {
        // 2026-10-16 is a Friday
        let friday = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(anchor_date(friday, Day::Friday), friday);
        assert_eq!(anchor_date(friday, Day::Saturday), NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        assert_eq!(anchor_date(friday, Day::Thursday), NaiveDate::from_ymd_opt(2026, 10, 22).unwrap());
    }

    #[test]
    fn test_anchor_uses_local_date() {
        // 02:00 UTC Saturday is still Friday evening in Chicago, so a Friday
        // rule anchors on that same evening's date rather than a week later.
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 2, 0, 0).unwrap();
        let tz = resolve_timezone("America/Chicago").unwrap();
        let today = now.with_timezone(&tz).date_naive();
        assert_eq!(anchor_date(today, Day::Friday), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    }

    #[test]
    fn test_spring_forward_gap() {
        // Sunday 2026-03-08: Chicago clocks jump from 02:00 to 03:00 CDT.
        let now = Utc.with_ymd_and_hms(2026, 3, 6, 12, 0, 0).unwrap();
        let rules = normalize(&spec("sun", "0230-0400", "America/Chicago", 300), now).unwrap();
        // 02:30 does not exist; it resolves to 03:30 CDT = 08:30 UTC
        assert_eq!(rules[0].rule.start().value(), 830.0);
        assert_eq!(rules[0].rule.end().value(), 900.0);
    }

    #[test]
    fn test_unknown_day_code() {
        let err = normalize(&spec("mon,someday", "0900-2100", "America/Chicago", 1500), summer()).unwrap_err();
        assert_eq!(
            err,
            IngestError::UnknownDayCode {
                code: "someday".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_range() {
        let err = normalize(&spec("mon", "0900to2100", "America/Chicago", 1500), summer()).unwrap_err();
        assert!(matches!(err, IngestError::MalformedTimeRange { .. }));
    }

    #[test]
    fn test_unknown_timezone() {
        let err = normalize(&spec("mon", "0900-2100", "Mars/Olympus_Mons", 1500), summer()).unwrap_err();
        assert_eq!(
            err,
            IngestError::UnknownTimezone {
                name: "Mars/Olympus_Mons".to_string()
            }
        );
    }
}
