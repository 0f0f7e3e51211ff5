//! test-support: helpers for the daily-activity-report integration tests.
//!
//! ```rust
//! use test_support::{init_tracing, report_cmd, search_fixture_json};
//!
//! #[test]
//! fn example() {
//!     init_tracing();
//!     let mut cmd = report_cmd();
//!     cmd.env("DAR_TEST_SEARCH_JSON", search_fixture_json());
//! }
//! ```

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

use std::path::{Path, PathBuf};

/// Name of the binary under test.
pub const BIN: &str = "daily-activity-report";

/// Variables the binary reads; cleared from every command so the host env cannot leak in.
pub const REPORT_ENV_VARS: &[&str] = &[
    "PERSONAL_ACCESS_TOKEN",
    "GITHUB_TOKEN",
    "GH_TOKEN",
    "GITHUB_USER",
    "GITHUB_API_VERSION",
    "GITHUB_API_URL",
    "REPORT_UTC_OFFSET",
    "REPORT_TIMEZONE",
    "REPORT_SEARCH_CAP",
    "REPORT_ACTIVITY_CLASSES",
    "DAR_TEST_SEARCH_JSON",
    "RUST_LOG",
];

/// Initialize `tracing` once, honoring `RUST_LOG` and writing via the test writer.
///
/// Safe to call from multiple tests; only the first call configures the global subscriber.
pub fn init_tracing() {
    static INIT: Lazy<()> = Lazy::new(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("warn,test=info"))
            .unwrap();
        // with_test_writer() causes logs to appear alongside failing tests only (cargo/nextest)
        let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
    });
    Lazy::force(&INIT);
}

/// Return the path to the repository's `tests/fixtures` directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("fixtures")
}

/// Deserialize a JSON fixture into `T` (enable `serde` feature).
#[cfg(feature = "serde")]
pub fn read_fixture_json<T, P>(rel_path: P) -> T
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = fixtures_dir().join(rel_path);
    let file = std::fs::File::open(&path)
        .unwrap_or_else(|e| panic!("failed to open fixture {}: {e}", path.display()));
    serde_json::from_reader::<_, T>(file)
        .unwrap_or_else(|e| panic!("failed to parse JSON fixture {}: {e}", path.display()))
}

/// The canned search backend input: assigned-issue and reviewed-PR responses keyed by predicate.
#[cfg(feature = "serde")]
pub fn search_fixture_json() -> String {
    let assigned: serde_json::Value = read_fixture_json("search_assignee.json");
    let reviewed: serde_json::Value = read_fixture_json("search_reviewed_by.json");
    serde_json::json!({ "assignee": assigned, "reviewed-by": reviewed }).to_string()
}

/// Run a binary target with `assert_cmd`, returning the ready-to-run `Command`.
pub fn cmd_bin(bin: &str) -> assert_cmd::Command {
    init_tracing();
    assert_cmd::Command::cargo_bin(bin).expect("binary target not found")
}

/// The report binary with report-related env cleared and the required settings filled in.
pub fn report_cmd() -> assert_cmd::Command {
    let mut cmd = cmd_bin(BIN);
    for k in REPORT_ENV_VARS {
        cmd.env_remove(k);
    }
    cmd.env("GITHUB_USER", "octo").env("GITHUB_API_VERSION", "2022-11-28");
    cmd
}
