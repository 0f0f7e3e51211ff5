// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Sort merged activity by (organization, repository), group it into sections and emit report lines
// role: rendering/markdown
// inputs: Vec<ActivityRecord>, report date, fixed offset for the title date
// outputs: Report (title + sections) and its line rendering
// invariants:
// - Sort is stable and lexicographic on (organization, repository)
// - A new section starts whenever the (organization, repository) pair changes
// - Empty input renders the title line only
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Datelike, FixedOffset, Utc};

use crate::model::ActivityRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
  pub organization: String,
  pub repository: String,
  pub urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
  pub title: String,
  pub sections: Vec<Section>,
}

impl Report {
  /// Title, then for each section a blank line, `## org/repo` and one `- url` per item.
  pub fn lines(&self) -> Vec<String> {
    let mut out = vec![self.title.clone()];

    for s in &self.sections {
      out.push(String::new());
      out.push(format!("## {}/{}", s.organization, s.repository));
      out.extend(s.urls.iter().map(|u| format!("- {}", u)));
    }

    out
  }
}

pub struct ReportRenderer {
  offset: FixedOffset,
}

impl ReportRenderer {
  pub fn new(offset: FixedOffset) -> Self {
    Self { offset }
  }

  /// Calendar date in ja-JP short form, e.g. `2024/4/1`.
  pub fn title(&self, report_date: DateTime<Utc>) -> String {
    let d = report_date.with_timezone(&self.offset).date_naive();
    format!("# {}/{}/{} の活動報告", d.year(), d.month(), d.day())
  }

  pub fn build(&self, mut records: Vec<ActivityRecord>, report_date: DateTime<Utc>) -> Report {
    records.sort_by(|a, b| (&a.organization, &a.repository).cmp(&(&b.organization, &b.repository)));

    let mut sections: Vec<Section> = Vec::new();

    for r in records {
      match sections.last_mut() {
        Some(s) if s.organization == r.organization && s.repository == r.repository => s.urls.push(r.url),
        _ => sections.push(Section {
          organization: r.organization,
          repository: r.repository,
          urls: vec![r.url],
        }),
      }
    }

    Report {
      title: self.title(report_date),
      sections,
    }
  }

  pub fn render(&self, records: Vec<ActivityRecord>, report_date: DateTime<Utc>) -> Vec<String> {
    self.build(records, report_date).lines()
  }
}
