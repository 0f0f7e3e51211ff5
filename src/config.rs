// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Resolve run settings (user, token, API version, offset, cap, activity classes) from an env-style lookup
// role: config/normalize
// inputs: lookup(key) -> Option<String>; a token fallback (gh CLI); the effective "now"
// outputs: Settings { user, source: SearchSource, report: ReportConfig }
// invariants:
// - Blank values count as unset
// - The HTTP source always carries a token; a fixture source needs none
// - utc_offset is a fixed offset; REPORT_TIMEZONE is resolved once at `now`
// - search_cap is within 1..=100; classes is non-empty
// errors: ReportError::Configuration naming the offending variable
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};

use crate::error::ReportError;
use crate::query::{ActivityClass, default_classes};
use crate::search::github_api::{DEFAULT_API_BASE, discover_token};
use crate::window::posix_offset;

pub const ENV_USER: &str = "GITHUB_USER";
pub const ENV_API_VERSION: &str = "GITHUB_API_VERSION";
pub const ENV_API_URL: &str = "GITHUB_API_URL";
pub const ENV_UTC_OFFSET: &str = "REPORT_UTC_OFFSET";
pub const ENV_TIMEZONE: &str = "REPORT_TIMEZONE";
pub const ENV_SEARCH_CAP: &str = "REPORT_SEARCH_CAP";
pub const ENV_CLASSES: &str = "REPORT_ACTIVITY_CLASSES";
pub const ENV_SEARCH_FIXTURE: &str = "DAR_TEST_SEARCH_JSON";

/// JST, in POSIX sign convention.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -9;
pub const DEFAULT_SEARCH_CAP: usize = 100;

/// Everything the aggregator and renderer need; no environment access past this point.
#[derive(Debug, Clone)]
pub struct ReportConfig {
  pub api_base: String,
  pub api_version: String,
  pub utc_offset: FixedOffset,
  pub search_cap: usize,
  pub classes: Vec<ActivityClass>,
}

/// Where search results come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchSource {
  /// The GitHub REST API, authenticated with `token`.
  Api { token: String },
  /// Canned responses keyed by predicate verb; replaces the network.
  Fixture(String),
}

#[derive(Debug, Clone)]
pub struct Settings {
  pub user: String,
  pub source: SearchSource,
  pub report: ReportConfig,
}

fn non_blank(lookup: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<String> {
  lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required(lookup: &dyn Fn(&str) -> Option<String>, key: &str) -> Result<String, ReportError> {
  non_blank(lookup, key).ok_or_else(|| ReportError::config(format!("{} is not set", key)))
}

fn resolve_offset(lookup: &dyn Fn(&str) -> Option<String>, now: DateTime<Utc>) -> Result<FixedOffset, ReportError> {
  if let Some(name) = non_blank(lookup, ENV_TIMEZONE) {
    let zone: chrono_tz::Tz = name
      .parse()
      .map_err(|_| ReportError::config(format!("{} is not a known timezone: {}", ENV_TIMEZONE, name)))?;

    return Ok(zone.offset_from_utc_datetime(&now.naive_utc()).fix());
  }

  let hours = match non_blank(lookup, ENV_UTC_OFFSET) {
    Some(raw) => raw
      .parse::<i32>()
      .map_err(|_| ReportError::config(format!("{} must be whole hours, got {:?}", ENV_UTC_OFFSET, raw)))?,
    None => DEFAULT_UTC_OFFSET_HOURS,
  };

  posix_offset(hours).ok_or_else(|| ReportError::config(format!("{} must be within -23..=23, got {}", ENV_UTC_OFFSET, hours)))
}

fn resolve_cap(lookup: &dyn Fn(&str) -> Option<String>) -> Result<usize, ReportError> {
  let Some(raw) = non_blank(lookup, ENV_SEARCH_CAP) else {
    return Ok(DEFAULT_SEARCH_CAP);
  };

  match raw.parse::<usize>() {
    Ok(n) if (1..=100).contains(&n) => Ok(n),
    _ => Err(ReportError::config(format!("{} must be between 1 and 100, got {:?}", ENV_SEARCH_CAP, raw))),
  }
}

fn resolve_classes(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Vec<ActivityClass>, ReportError> {
  let Some(raw) = non_blank(lookup, ENV_CLASSES) else {
    return Ok(default_classes());
  };

  let classes: Vec<ActivityClass> = serde_json::from_str(&raw)
    .map_err(|e| ReportError::config(format!("{} is not a valid class list: {}", ENV_CLASSES, e)))?;

  if classes.is_empty() {
    return Err(ReportError::config(format!("{} must list at least one class", ENV_CLASSES)));
  }

  Ok(classes)
}

/// Build settings from `lookup`, calling `token_fallback` only when no token variable is set
/// and no search fixture replaces the network.
pub fn load_settings(
  lookup: &dyn Fn(&str) -> Option<String>,
  token_fallback: &dyn Fn() -> Option<String>,
  now: DateTime<Utc>,
) -> Result<Settings, ReportError> {
  let source = match non_blank(lookup, ENV_SEARCH_FIXTURE) {
    Some(fixture) => SearchSource::Fixture(fixture),
    None => {
      let token = discover_token(lookup).or_else(token_fallback).ok_or_else(|| {
        ReportError::config("PERSONAL_ACCESS_TOKEN is not set (also checked GITHUB_TOKEN, GH_TOKEN, gh auth token)")
      })?;
      SearchSource::Api { token }
    }
  };

  let api_version = required(lookup, ENV_API_VERSION)?;
  let user = required(lookup, ENV_USER)?;

  let report = ReportConfig {
    api_base: non_blank(lookup, ENV_API_URL).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
    api_version,
    utc_offset: resolve_offset(lookup, now)?,
    search_cap: resolve_cap(lookup)?,
    classes: resolve_classes(lookup)?,
  };

  Ok(Settings {
    user,
    source,
    report,
  })
}
