// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: GitHub issue search backends (REST over ureq, env-provided fixture) and token discovery
// role: search/github-api
// inputs: API base URL, API version, token; or fixture JSON keyed by predicate verb
// outputs: ActivityRecord lists from GET /search/issues
// side_effects: One network call per search (HTTP backend); spawns `gh` for token fallback
// invariants:
// - No caching and no retries; a failed call is returned as Transport
// - per_page never exceeds the API maximum of 100
// - Token discovery prefers PERSONAL_ACCESS_TOKEN, then GITHUB_TOKEN, GH_TOKEN, `gh auth token`
// errors: Transport carries the HTTP status and GitHub's `message` when available
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::error::ReportError;
use crate::ext::serde_json::JsonFetch;
use crate::model::ActivityRecord;
use crate::search::{IssueSearch, records_from_response};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const MAX_PER_PAGE: usize = 100;

/// Discover a token from the environment: explicit PAT first, then the usual GitHub variables.
pub fn discover_token(lookup: &dyn Fn(&str) -> Option<String>) -> Option<String> {
  ["PERSONAL_ACCESS_TOKEN", "GITHUB_TOKEN", "GH_TOKEN"]
    .iter()
    .filter_map(|k| lookup(k))
    .map(|t| t.trim().to_string())
    .find(|t| !t.is_empty())
}

/// Ask the `gh` CLI for its token, if installed and logged in.
pub fn gh_cli_token() -> Option<String> {
  let output = std::process::Command::new("gh").args(["auth", "token"]).output().ok()?;

  if !output.status.success() {
    return None;
  }

  let t = String::from_utf8_lossy(&output.stdout).trim().to_string();

  if t.is_empty() { None } else { Some(t) }
}

pub struct GithubHttpSearch {
  agent: ureq::Agent,
  api_base: String,
  api_version: String,
  token: String,
}

impl GithubHttpSearch {
  pub fn new(api_base: String, api_version: String, token: String) -> Self {
    Self {
      agent: ureq::AgentBuilder::new().build(),
      api_base: api_base.trim_end_matches('/').to_string(),
      api_version,
      token,
    }
  }

  fn get_json(&self, query: &str, per_page: usize) -> Result<serde_json::Value, ReportError> {
    let url = format!("{}/search/issues", self.api_base);

    let resp = self
      .agent
      .get(&url)
      .set("Accept", "application/vnd.github+json")
      .set("X-GitHub-Api-Version", &self.api_version)
      .set("User-Agent", "daily-activity-report")
      .set("Authorization", &format!("Bearer {}", self.token))
      .query("q", query)
      .query("per_page", &per_page.to_string())
      .call();

    match resp {
      Ok(r) => r
        .into_json::<serde_json::Value>()
        .map_err(|e| ReportError::transport(format!("reading search response: {e}"))),
      Err(ureq::Error::Status(code, r)) => {
        let message = r
          .into_json::<serde_json::Value>()
          .ok()
          .and_then(|v| v.fetch("message").to::<String>())
          .unwrap_or_default();

        Err(ReportError::transport(format!("GET {url} returned HTTP {code}: {message}")))
      }
      Err(ureq::Error::Transport(t)) => Err(ReportError::transport(format!("GET {url}: {t}"))),
    }
  }
}

impl IssueSearch for GithubHttpSearch {
  fn search(&self, query: &str, cap: usize) -> Result<Vec<ActivityRecord>, ReportError> {
    let per_page = cap.clamp(1, MAX_PER_PAGE);
    let body = self.get_json(query, per_page)?;
    records_from_response(&body, cap)
  }
}

/// Canned search responses keyed by predicate verb, used by tests in place of the network.
///
/// A value may be a full response (`{"items": [...]}`), a bare item array, or a
/// string, which is returned as a transport failure with that message.
pub struct GithubFixtureSearch {
  responses: serde_json::Map<String, serde_json::Value>,
}

impl GithubFixtureSearch {
  pub fn from_json(raw: &str) -> Result<Self, ReportError> {
    let v: serde_json::Value = serde_json::from_str(raw)
      .map_err(|e| ReportError::config(format!("search fixture is not valid JSON: {e}")))?;

    match v {
      serde_json::Value::Object(responses) => Ok(Self { responses }),
      _ => Err(ReportError::config("search fixture must be a JSON object keyed by predicate")),
    }
  }
}

impl IssueSearch for GithubFixtureSearch {
  fn search(&self, query: &str, cap: usize) -> Result<Vec<ActivityRecord>, ReportError> {
    let verb = query.split(':').next().unwrap_or_default();

    match self.responses.get(verb) {
      None => Ok(Vec::new()),
      Some(serde_json::Value::String(msg)) => Err(ReportError::transport(msg.clone())),
      Some(serde_json::Value::Array(items)) => {
        records_from_response(&serde_json::json!({ "items": items }), cap)
      }
      Some(body) => records_from_response(body, cap),
    }
  }
}
