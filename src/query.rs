use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::window::{WindowPolicy, day_window};

/// Relationship between the user and an item, as a search qualifier.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Predicate {
  Assignee,
  ReviewedBy,
  Involves,
}

impl Predicate {
  pub fn as_str(&self) -> &'static str {
    match self {
      Predicate::Assignee => "assignee",
      Predicate::ReviewedBy => "reviewed-by",
      Predicate::Involves => "involves",
    }
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeField {
  Updated,
  Created,
}

impl TimeField {
  pub fn as_str(&self) -> &'static str {
    match self {
      TimeField::Updated => "updated",
      TimeField::Created => "created",
    }
  }
}

/// One kind of activity to collect: who-filter, which timestamp, which window end.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct ActivityClass {
  pub predicate: Predicate,
  pub time_field: TimeField,
  pub window: WindowPolicy,
}

impl ActivityClass {
  pub const fn new(predicate: Predicate, time_field: TimeField, window: WindowPolicy) -> Self {
    ActivityClass { predicate, time_field, window }
  }

  /// Issues assigned to the user, by update time.
  pub const ASSIGNED_ISSUES: ActivityClass =
    ActivityClass::new(Predicate::Assignee, TimeField::Updated, WindowPolicy::EndOfDay);

  /// Pull requests the user reviewed, by update time.
  pub const REVIEWED_PULL_REQUESTS: ActivityClass =
    ActivityClass::new(Predicate::ReviewedBy, TimeField::Updated, WindowPolicy::EndOfDay);

  /// e.g. `assignee:octo updated:2024-03-31T15:00:00Z..2024-04-01T14:59:59Z`
  pub fn query(&self, user: &str, date: DateTime<Utc>, offset: FixedOffset) -> String {
    let window = day_window(date, offset, self.window);

    format!(
      "{}:{} {}:{}",
      self.predicate.as_str(),
      user,
      self.time_field.as_str(),
      window.range_expr()
    )
  }
}

pub fn default_classes() -> Vec<ActivityClass> {
  vec![ActivityClass::ASSIGNED_ISSUES, ActivityClass::REVIEWED_PULL_REQUESTS]
}
