// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Issue search seam: trait, backend selection, and search-response normalization
// role: search/namespace
// inputs: Settings (api base/version, token, optional fixture JSON)
// outputs: Box<dyn IssueSearch> returning ActivityRecord lists
// invariants: At most `cap` records per search; malformed repository references propagate as errors
// errors: Configuration for an invalid fixture; Transport for response shape problems
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod github_api;

use crate::config::{SearchSource, Settings};
use crate::error::ReportError;
use crate::ext::serde_json::JsonFetch;
use crate::model::{ActivityRecord, RawItem};

/// Search issues and pull requests with a pre-built query string.
///
/// Implementations make one request per call and never retry. Results past
/// `cap` are dropped without error.
pub trait IssueSearch: Send + Sync {
  fn search(&self, query: &str, cap: usize) -> Result<Vec<ActivityRecord>, ReportError>;
}

/// Build the backend named by the settings' search source.
pub fn build_search(settings: &Settings) -> Result<Box<dyn IssueSearch>, ReportError> {
  match &settings.source {
    SearchSource::Fixture(fixture) => Ok(Box::new(github_api::GithubFixtureSearch::from_json(fixture)?)),
    SearchSource::Api { token } => Ok(Box::new(github_api::GithubHttpSearch::new(
      settings.report.api_base.clone(),
      settings.report.api_version.clone(),
      token.clone(),
    ))),
  }
}

/// Turn a `/search/issues` response body into records, keeping the first `cap` items.
pub fn records_from_response(body: &serde_json::Value, cap: usize) -> Result<Vec<ActivityRecord>, ReportError> {
  if !body.fetch("items").exists() {
    return Err(ReportError::transport("search response has no `items` field"));
  }

  let items = body
    .fetch("items")
    .to::<Vec<RawItem>>()
    .ok_or_else(|| ReportError::transport("search response `items` has an unexpected shape"))?;

  items.into_iter().take(cap).map(ActivityRecord::from_raw).collect()
}
