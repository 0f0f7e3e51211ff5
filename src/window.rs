use chrono::{DateTime, Duration, FixedOffset, NaiveTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// Day windows use a fixed UTC offset; DST-observing zones are only correct
// for the offset in effect when the configuration was resolved.

/// How the end of a day window is computed.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowPolicy {
  /// `until` is 23:59:59 local on the same date (inclusive end).
  EndOfDay,
  /// `until` is 00:00:00 local on the next date.
  StartOfNextDay,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DayWindow {
  pub since: DateTime<FixedOffset>,
  pub until: DateTime<FixedOffset>,
}

impl DayWindow {
  /// `since..until` in UTC, the form used by search range qualifiers.
  pub fn range_expr(&self) -> String {
    format!("{}..{}", utc_iso(self.since), utc_iso(self.until))
  }
}

fn utc_iso(dt: DateTime<FixedOffset>) -> String {
  dt.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Compute the window covering the calendar day that `date` falls on in `offset`.
pub fn day_window(date: DateTime<Utc>, offset: FixedOffset, policy: WindowPolicy) -> DayWindow {
  let local_date = date.with_timezone(&offset).date_naive();
  let midnight = local_date.and_time(NaiveTime::MIN);

  // Local wall time minus the offset gives the UTC instant; infallible for fixed offsets.
  let since_utc = Utc.from_utc_datetime(&(midnight - Duration::seconds(offset.local_minus_utc() as i64)));
  let since = since_utc.with_timezone(&offset);

  let until = match policy {
    WindowPolicy::EndOfDay => since + Duration::days(1) - Duration::seconds(1),
    WindowPolicy::StartOfNextDay => since + Duration::days(1),
  };

  DayWindow { since, until }
}

/// Build a fixed offset from hours in POSIX sign convention (JST is `-9`).
pub fn posix_offset(hours: i32) -> Option<FixedOffset> {
  if !(-23..=23).contains(&hours) {
    return None;
  }
  FixedOffset::west_opt(hours * 3600)
}
