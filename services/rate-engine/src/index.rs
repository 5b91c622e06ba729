//! Rate index snapshots
//!
//! A [`RateIndex`] maps each weekday to the rules requested for it, in the
//! order they were ingested. An index is never modified after it is built;
//! ingestion builds a fresh one and the table swaps it in.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use rate_types::army_time::ArmyTime;
use rate_types::day::Day;
use rate_types::errors::{IngestError, QueryError};
use rate_types::rate::{PriceCents, RateBatch};

use crate::normalizer::{normalize, NormalizedRule};

/// One normalized recurring price window.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayRule {
    /// UTC weekday of the window start. Informational only; lookups go by
    /// the bucket the rule is stored in.
    weekday: Day,
    start: ArmyTime,
    /// May exceed 2400 when the window runs past UTC midnight.
    end: ArmyTime,
    price: PriceCents,
    source_tz: String,
}

impl WeekdayRule {
    pub fn new(weekday: Day, start: ArmyTime, end: ArmyTime, price: PriceCents, source_tz: String) -> Self {
        debug_assert!(start <= end, "window end {end} before start {start}");
        Self {
            weekday,
            start,
            end,
            price,
            source_tz,
        }
    }

    pub fn weekday(&self) -> Day {
        self.weekday
    }

    pub fn start(&self) -> ArmyTime {
        self.start
    }

    pub fn end(&self) -> ArmyTime {
        self.end
    }

    pub fn price(&self) -> PriceCents {
        self.price
    }

    pub fn source_tz(&self) -> &str {
        &self.source_tz
    }

    /// Whether `[start, end]` lies fully inside this window.
    pub fn contains(&self, start: ArmyTime, end: ArmyTime) -> bool {
        self.start <= start && end <= self.end
    }
}

/// Immutable weekday → rules mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateIndex {
    buckets: BTreeMap<Day, Vec<WeekdayRule>>,
}

impl RateIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize every rule in `batch` and bucket it by the weekday it was
    /// requested for.
    ///
    /// Fails on the first invalid rule; no partial index is returned.
    pub fn build(batch: &RateBatch, now: DateTime<Utc>) -> Result<Self, IngestError> {
        let mut buckets: BTreeMap<Day, Vec<WeekdayRule>> = BTreeMap::new();

        for spec in &batch.rates {
            for NormalizedRule { requested, rule } in normalize(spec, now)? {
                buckets.entry(requested).or_default().push(rule);
            }
        }

        Ok(Self { buckets })
    }

    /// Rules stored for `day`, in ingestion order.
    pub fn bucket(&self, day: Day) -> Option<&[WeekdayRule]> {
        self.buckets.get(&day).map(Vec::as_slice)
    }

    /// Days that have at least one rule.
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.buckets.keys().copied()
    }

    pub fn rule_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }

    /// Price of the first rule on `day` containing `[start, end]`.
    pub fn lookup(&self, day: Day, start: ArmyTime, end: ArmyTime) -> Result<PriceCents, QueryError> {
        let rules = match self.bucket(day) {
            Some(rules) if !rules.is_empty() => rules,
            _ => return Err(QueryError::NoRatesForDay { day }),
        };

        rules
            .iter()
            .find(|rule| rule.contains(start, end))
            .map(WeekdayRule::price)
            .ok_or(QueryError::RateUnavailable)
    }
}
