use predicates::prelude::*;

#[test]
fn missing_user_fails_before_output() {
  let mut cmd = test_support::report_cmd();
  cmd
    .env_remove("GITHUB_USER")
    .env("DAR_TEST_SEARCH_JSON", "{}")
    .arg("2024-04-01")
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("GITHUB_USER is not set"));
}

#[test]
fn missing_api_version_fails() {
  let mut cmd = test_support::report_cmd();
  cmd
    .env_remove("GITHUB_API_VERSION")
    .env("DAR_TEST_SEARCH_JSON", "{}")
    .assert()
    .failure()
    .stderr(predicate::str::contains("GITHUB_API_VERSION is not set"));
}

#[test]
fn transport_failure_prints_nothing() {
  let fixture = serde_json::json!({
    "assignee": {"items": []},
    "reviewed-by": "API rate limit exceeded",
  });

  let mut cmd = test_support::report_cmd();
  cmd
    .env("DAR_TEST_SEARCH_JSON", fixture.to_string())
    .arg("2024-04-01")
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("API rate limit exceeded"));
}

#[test]
fn malformed_repository_reference_is_fatal() {
  let fixture = serde_json::json!({
    "assignee": [
      {"title": "x", "html_url": "https://github.com/acme/widgets/issues/1", "repository_url": "https://api.github.com/repos"}
    ],
  });

  let mut cmd = test_support::report_cmd();
  cmd
    .env("DAR_TEST_SEARCH_JSON", fixture.to_string())
    .arg("2024-04-01")
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("malformed repository reference"));
}

#[test]
fn unparseable_date_is_rejected() {
  let mut cmd = test_support::report_cmd();
  cmd
    .env("DAR_TEST_SEARCH_JSON", "{}")
    .arg("definitely not a date")
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot parse date"));
}

#[test]
fn invalid_offset_is_rejected() {
  let mut cmd = test_support::report_cmd();
  cmd
    .env("DAR_TEST_SEARCH_JSON", "{}")
    .env("REPORT_UTC_OFFSET", "+9.5")
    .assert()
    .failure()
    .stderr(predicate::str::contains("REPORT_UTC_OFFSET"));
}

#[test]
fn unparseable_now_override_is_rejected() {
  let mut cmd = test_support::report_cmd();
  cmd
    .env("DAR_TEST_SEARCH_JSON", "{}")
    .args(["--now-override", "garbage"])
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("--now-override"));
}
