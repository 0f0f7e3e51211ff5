// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Run one search per activity class for a date/user and merge the results
// role: processing/aggregator
// inputs: IssueSearch backend, ReportConfig (offset, cap, classes), date, user
// outputs: Vec<ActivityRecord> in class order, then search order within a class
// side_effects: One search call per class, issued concurrently on the rayon pool
// invariants:
// - Merge waits for every search; any failure fails the whole run
// - len(output) == sum of per-class result lengths (no dedup across classes)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::model::ActivityRecord;
use crate::search::IssueSearch;

pub struct ActivityAggregator<'a> {
  search: &'a dyn IssueSearch,
  config: &'a ReportConfig,
}

impl<'a> ActivityAggregator<'a> {
  pub fn new(search: &'a dyn IssueSearch, config: &'a ReportConfig) -> Self {
    Self { search, config }
  }

  pub fn aggregate(&self, date: DateTime<Utc>, user: &str) -> Result<Vec<ActivityRecord>, ReportError> {
    // Indexed collect keeps class order regardless of completion order.
    let batches: Vec<Vec<ActivityRecord>> = self
      .config
      .classes
      .par_iter()
      .map(|class| -> Result<Vec<ActivityRecord>, ReportError> {
        let query = class.query(user, date, self.config.utc_offset);
        let found = self.search.search(&query, self.config.search_cap)?;
        tracing::debug!(query = %query, count = found.len(), "search finished");
        Ok(found)
      })
      .collect::<Result<_, ReportError>>()?;

    let merged: Vec<ActivityRecord> = batches.into_iter().flatten().collect();
    tracing::info!(total = merged.len(), classes = self.config.classes.len(), "merged activity");

    Ok(merged)
  }
}
