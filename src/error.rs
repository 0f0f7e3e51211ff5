// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Domain error taxonomy for the report pipeline (configuration, transport, malformed references)
// role: errors/types
// outputs: ReportError used by config, search, aggregation; converted to anyhow at the binary boundary
// invariants: Every failure is fatal for the run; no variant is recovered internally
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
  /// Required input is missing or invalid; raised before any network call.
  #[error("configuration error: {0}")]
  Configuration(String),

  /// The search service could not be reached or answered with an error.
  #[error("search request failed: {0}")]
  Transport(String),

  /// A result's repository reference did not contain `/<segment>/<org>/<repo>`.
  #[error("malformed repository reference: {url:?}")]
  MalformedReference { url: String },
}

impl ReportError {
  pub fn config(msg: impl Into<String>) -> Self {
    ReportError::Configuration(msg.into())
  }

  pub fn transport(msg: impl Into<String>) -> Self {
    ReportError::Transport(msg.into())
  }
}
