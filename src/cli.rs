use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_english::{Dialect, parse_date_string};
use clap::Parser;

use crate::error::ReportError;

#[derive(Parser, Debug)]
#[command(
    name = "daily-activity-report",
    version,
    about = "Print a daily report of assigned issues and reviewed pull requests, grouped by repository",
    long_about = None
)]
pub struct Cli {
  /// Report date: 2024-04-01, 2024/4/1, 04/01/2024 (month first), an RFC 3339 timestamp, or a phrase like "yesterday" (default: today)
  pub date: Option<String>,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

fn local_to_utc(naive: NaiveDateTime, offset: FixedOffset) -> Option<DateTime<Utc>> {
  offset.from_local_datetime(&naive).single().map(|dt| dt.with_timezone(&Utc))
}

/// Resolve the positional date argument to an instant.
///
/// Naive dates and timestamps are read in the report offset, so `2024-04-01`
/// always reports April 1st regardless of the host timezone. Numeric slash
/// dates are year-first (the title's own form) or month-first.
pub fn resolve_report_date(
  raw: Option<&str>,
  now: DateTime<Utc>,
  offset: FixedOffset,
) -> Result<DateTime<Utc>, ReportError> {
  let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
    return Ok(now);
  };

  if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
    return Ok(dt.with_timezone(&Utc));
  }

  if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
    if let Some(dt) = local_to_utc(naive, offset) {
      return Ok(dt);
    }
  }

  for fmt in DATE_FORMATS {
    if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
      if let Some(dt) = local_to_utc(d.and_time(NaiveTime::MIN), offset) {
        return Ok(dt);
      }
    }
  }

  parse_date_string(raw, now.with_timezone(&offset), Dialect::Us)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|_| ReportError::config(format!("cannot parse date {:?}", raw)))
}
