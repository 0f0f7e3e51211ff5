use predicates::prelude::*;

fn stdout_of(cmd: &mut assert_cmd::Command) -> String {
  let out = cmd.output().unwrap();
  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  String::from_utf8(out.stdout).unwrap()
}

#[test]
fn groups_fixture_results_by_repository() {
  let mut cmd = test_support::report_cmd();
  cmd.env("DAR_TEST_SEARCH_JSON", test_support::search_fixture_json()).arg("2024-04-01");

  let expected = [
    "# 2024/4/1 の活動報告",
    "",
    "## acme/gears",
    "- https://github.com/acme/gears/pull/40",
    "- https://github.com/acme/gears/pull/40",
    "",
    "## acme/widgets",
    "- https://github.com/acme/widgets/issues/12",
    "- https://github.com/acme/widgets/pull/15",
    "",
    "## octo-org/handbook",
    "- https://github.com/octo-org/handbook/issues/3",
  ];

  assert_eq!(stdout_of(&mut cmd), format!("{}\n", expected.join("\n")));
}

#[test]
fn no_activity_prints_only_the_title() {
  let mut cmd = test_support::report_cmd();
  cmd.env("DAR_TEST_SEARCH_JSON", "{}").arg("2024-12-25");
  assert_eq!(stdout_of(&mut cmd), "# 2024/12/25 の活動報告\n");
}

#[test]
fn now_override_sets_the_default_date() {
  // 16:00 UTC is already the next day at UTC+9
  let mut cmd = test_support::report_cmd();
  cmd
    .env("DAR_TEST_SEARCH_JSON", "{}")
    .args(["--now-override", "2024-03-31T16:00:00Z"]);
  assert_eq!(stdout_of(&mut cmd), "# 2024/4/1 の活動報告\n");
}

#[test]
fn utc_offset_changes_the_local_day() {
  let mut cmd = test_support::report_cmd();
  cmd
    .env("DAR_TEST_SEARCH_JSON", "{}")
    .env("REPORT_UTC_OFFSET", "0")
    .args(["--now-override", "2024-03-31T16:00:00Z"]);
  assert_eq!(stdout_of(&mut cmd), "# 2024/3/31 の活動報告\n");
}

#[test]
fn search_cap_limits_each_class() {
  let mut cmd = test_support::report_cmd();
  cmd
    .env("DAR_TEST_SEARCH_JSON", test_support::search_fixture_json())
    .env("REPORT_SEARCH_CAP", "1")
    .arg("2024-04-01");

  let out = stdout_of(&mut cmd);
  assert!(out.contains("- https://github.com/acme/widgets/issues/12"));
  assert!(out.contains("- https://github.com/acme/widgets/pull/15"));
  assert!(!out.contains("handbook"));
  assert!(!out.contains("gears"));
}

#[test]
fn logs_stay_off_stdout() {
  let mut cmd = test_support::report_cmd();
  cmd
    .env("DAR_TEST_SEARCH_JSON", "{}")
    .env("RUST_LOG", "debug")
    .arg("2024-04-01")
    .assert()
    .success()
    .stdout(predicate::eq("# 2024/4/1 の活動報告\n"));
}

#[test]
fn slash_dates_name_the_same_day() {
  for raw in ["2024/4/1", "04/01/2024"] {
    let mut cmd = test_support::report_cmd();
    cmd.env("DAR_TEST_SEARCH_JSON", "{}").arg(raw);
    assert_eq!(stdout_of(&mut cmd), "# 2024/4/1 の活動報告\n", "input {raw}");
  }
}
