// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the activity record and the raw search item it is normalized from
// role: model/types
// outputs: ActivityRecord (title, url, organization, repository) and RawItem (search API shape)
// invariants: organization and repository are non-empty and come from /<segment>/<org>/<repo> of repository_url
// errors: MalformedReference when the repository reference cannot be split
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// One item from the issue search endpoint; unknown fields are ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RawItem {
  pub title: String,
  pub html_url: String,
  pub repository_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
  pub title: String,
  pub url: String,
  pub organization: String,
  pub repository: String,
}

impl ActivityRecord {
  pub fn from_raw(raw: RawItem) -> Result<Self, ReportError> {
    let (organization, repository) = parse_repository_reference(&raw.repository_url)?;

    Ok(ActivityRecord {
      title: raw.title,
      url: raw.html_url,
      organization,
      repository,
    })
  }
}

/// Split `https://host/repos/<org>/<repo>` into `(org, repo)`.
///
/// The path is indexed the way the API lays it out: segment 0 is the empty
/// string before the leading slash, 1 is `repos`, 2 the owner, 3 the name.
pub fn parse_repository_reference(url: &str) -> Result<(String, String), ReportError> {
  static RE_URL: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://[^/?#]+([^?#]*)").unwrap());

  let malformed = || ReportError::MalformedReference { url: url.to_string() };

  let path = RE_URL
    .captures(url)
    .and_then(|c| c.get(1))
    .map(|m| m.as_str())
    .ok_or_else(malformed)?;

  let segments: Vec<&str> = path.split('/').collect();

  if segments.len() < 4 {
    return Err(malformed());
  }

  let (organization, repository) = (segments[2], segments[3]);

  if organization.is_empty() || repository.is_empty() {
    return Err(malformed());
  }

  Ok((organization.to_string(), repository.to_string()))
}
