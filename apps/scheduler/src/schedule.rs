//! Cron firing times in a named timezone.
//!
//! Expressions are either the five-field POSIX form (`0 6 * * 1`, weekday
//! 0 or 7 is Sunday) or the six/seven-field form with seconds understood
//! by the `cron` crate. Matching is done on local wall-clock time, then
//! resolved to an instant across DST transitions:
//! - a time skipped by a spring-forward gap fires one hour later
//! - a time repeated by a fall-back overlap fires once, at the earlier instant

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use cron::Schedule;
use thiserror::Error;

/// How far before "now" (in wall-clock terms) candidates are considered, so
/// a firing shifted forward out of a gap is not missed.
const LOOKBEHIND_HOURS: i64 = 2;

const WEEKDAY_NAMES: [&str; 8] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("expected 5, 6 or 7 cron fields, got '{0}'")]
    FieldCount(String),

    #[error("invalid cron expression '{expression}': {reason}")]
    Invalid { expression: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct CronSchedule {
    expression: String,
    schedule: Schedule,
    timezone: Tz,
}

impl CronSchedule {
    pub fn parse(expression: &str, timezone: Tz) -> Result<Self, ScheduleError> {
        let expression = expression.split_whitespace().collect::<Vec<_>>().join(" ");
        let normalized = normalize_expression(&expression)?;
        let schedule = Schedule::from_str(&normalized).map_err(|e| ScheduleError::Invalid {
            expression: expression.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            expression,
            schedule,
            timezone,
        })
    }

    /// The expression as configured.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Next firing strictly after `now`, or `None` if the expression never
    /// matches again.
    pub fn next_after(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let wall_now = now.with_timezone(&self.timezone).naive_local();
        // Wall-clock time is iterated as if it were UTC, which has no DST.
        let start = Utc.from_utc_datetime(&(wall_now - Duration::hours(LOOKBEHIND_HOURS)));

        self.schedule
            .after(&start)
            .filter_map(|wall| self.resolve(wall.naive_utc()))
            .find(|at| *at > now)
    }

    fn resolve(&self, wall: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.timezone
            .from_local_datetime(&wall)
            .earliest()
            .or_else(|| {
                self.timezone
                    .from_local_datetime(&(wall + Duration::hours(1)))
                    .earliest()
            })
            .map(|at| at.with_timezone(&Utc))
    }
}

impl fmt::Display for CronSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.expression, self.timezone.name())
    }
}

/// Turns a POSIX five-field expression into the `cron` crate's form: a
/// leading seconds field, and weekday numbers spelled out as names since
/// the crate counts weekdays from Sunday = 1.
fn normalize_expression(expression: &str) -> Result<String, ScheduleError> {
    let fields: Vec<&str> = expression.split(' ').filter(|f| !f.is_empty()).collect();
    match fields.len() {
        5 => {
            let weekdays = posix_weekdays(fields[4]).ok_or_else(|| ScheduleError::Invalid {
                expression: expression.to_string(),
                reason: format!("weekday field '{}' out of range", fields[4]),
            })?;
            Ok(format!("0 {} {}", fields[..4].join(" "), weekdays))
        }
        6 | 7 => Ok(expression.to_string()),
        _ => Err(ScheduleError::FieldCount(expression.to_string())),
    }
}

fn posix_weekdays(field: &str) -> Option<String> {
    let parts: Option<Vec<String>> = field
        .split(',')
        .map(|part| {
            let (base, step) = match part.split_once('/') {
                Some((base, step)) => (base, Some(step)),
                None => (part, None),
            };
            let base = match base.split_once('-') {
                Some((from, to)) => weekday_range(from, to)?,
                None => weekday_name(base)?,
            };
            Some(match step {
                Some(step) => format!("{}/{}", base, step),
                None => base,
            })
        })
        .collect();
    parts.map(|parts| parts.join(","))
}

fn weekday_range(from: &str, to: &str) -> Option<String> {
    // `5-7` ends on Sunday, which the crate only accepts as a separate item.
    if to == "7" && from != "0" && from != "7" {
        return Some(format!("{}-Sat,Sun", weekday_name(from)?));
    }
    Some(format!("{}-{}", weekday_name(from)?, weekday_name(to)?))
}

fn weekday_name(token: &str) -> Option<String> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return Some(token.to_string());
    }
    let index: usize = token.parse().ok()?;
    WEEKDAY_NAMES.get(index).map(|name| name.to_string())
}
