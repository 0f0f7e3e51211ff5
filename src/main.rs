use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

mod aggregate;
mod cli;
mod config;
mod error;
mod ext;
mod model;
mod query;
mod render;
mod search;
mod util;
mod window;

use crate::aggregate::ActivityAggregator;
use crate::cli::Cli;
use crate::render::ReportRenderer;

fn main() -> Result<()> {
  util::init_tracing();
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: settings and date (no network yet)
  let now = util::effective_now(util::parse_now_override(cli.now_override.as_deref())?);
  let env_lookup = |k: &str| std::env::var(k).ok();
  let settings = config::load_settings(&env_lookup, &search::github_api::gh_cli_token, now)?;
  let date = cli::resolve_report_date(cli.date.as_deref(), now, settings.report.utc_offset)?;

  // Phase 2: fan out searches and merge
  let backend = search::build_search(&settings)?;
  let records = ActivityAggregator::new(backend.as_ref(), &settings.report).aggregate(date, &settings.user)?;

  // Phase 3: group and print
  let lines = ReportRenderer::new(settings.report.utc_offset).render(records, date);
  let stdout = std::io::stdout();
  let mut out = stdout.lock();

  for line in lines {
    writeln!(out, "{}", line).context("writing report to stdout")?;
  }

  Ok(())
}
