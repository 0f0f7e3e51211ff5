// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Process-level helpers: stderr tracing setup, "now" resolution with test override, man page rendering
// role: utilities/helpers
// inputs: RUST_LOG; optional --now-override string; clap CommandFactory
// outputs: Installed tracing subscriber, effective now instant, man page text
// side_effects: init_tracing installs a global subscriber writing to stderr
// invariants:
// - Logs never go to stdout (stdout carries only the report)
// - parse_now_override accepts RFC3339 or naive %Y-%m-%dT%H:%M:%S (read as UTC); anything else is an error
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, NaiveDateTime, Utc};
use clap::CommandFactory;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::ReportError;

/// Install the stderr log subscriber, honoring `RUST_LOG` (default `warn`).
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// Parse a `--now-override` string. Accepts RFC3339 (e.g. 2024-04-01T12:00:00Z)
/// or a naive timestamp `%Y-%m-%dT%H:%M:%S`, taken as UTC.
pub fn parse_now_override(s: Option<&str>) -> Result<Option<DateTime<Utc>>, ReportError> {
  let Some(raw) = s else {
    return Ok(None);
  };

  DateTime::parse_from_rfc3339(raw)
    .ok()
    .map(|dt| dt.with_timezone(&Utc))
    .or_else(|| {
      NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|ndt| ndt.and_utc())
    })
    .map(Some)
    .ok_or_else(|| ReportError::config(format!("--now-override must be an RFC 3339 timestamp, got {:?}", raw)))
}

/// Returns the override when present, otherwise the current time.
pub fn effective_now(override_now: Option<DateTime<Utc>>) -> DateTime<Utc> {
  override_now.unwrap_or_else(Utc::now)
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
