#[test]
fn gen_man_outputs_troff() {
  let mut cmd = test_support::report_cmd();
  let out = cmd.arg("--gen-man").output().unwrap();
  assert!(out.status.success());

  let s = String::from_utf8_lossy(&out.stdout);
  assert!(s.contains(".TH"));
  assert!(s.contains("daily-activity-report"));
}

#[test]
fn gen_man_needs_no_configuration() {
  let mut cmd = test_support::report_cmd();
  cmd.env_remove("GITHUB_USER").env_remove("GITHUB_API_VERSION");
  cmd.arg("--gen-man").assert().success();
}
