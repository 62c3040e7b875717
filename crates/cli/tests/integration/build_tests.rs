//! Tests for `fpmfile build`.

use predicates::prelude::*;

use super::common::TestEnv;

const EXAMPLE: &str = r#"
packages:
  - name: example
    source:
      mode: dir
    target:
      mode: deb
      version: "1.0"
    paths:
      - bla
"#;

const THREE_PACKAGES: &str = r#"
packages:
  - name: first
    source: {mode: dir}
    target: {mode: deb, version: "1.0"}
    paths: [a]
  - name: second
    source: {mode: dir}
    target: {mode: deb, version: "1.0"}
    paths: [b]
  - name: third
    source: {mode: dir}
    target: {mode: deb, version: "1.0"}
    paths: [c]
"#;

#[test]
fn builds_minimal_package() {
  let env = TestEnv::with_manifest(EXAMPLE);

  env
    .fpmfile_cmd()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("building package example..."))
    .stdout(predicate::str::contains("Created package"))
    .stdout(predicate::str::contains("Built 1 package(s)"));

  assert_eq!(env.invocations(), vec!["-s dir -t deb -v 1.0 -n example bla"]);
}

#[test]
fn build_is_the_default_command() {
  let env = TestEnv::with_manifest(EXAMPLE);

  env.fpmfile_cmd().assert().success();

  assert_eq!(env.invocations().len(), 1);
}

#[test]
fn relays_tool_output_verbatim() {
  let env = TestEnv::with_manifest(EXAMPLE);

  env
    .fpmfile_cmd()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains(
      "[-s]\n[dir]\n[-t]\n[deb]\n[-v]\n[1.0]\n[-n]\n[example]\n[bla]\n",
    ));
}

#[test]
fn builds_in_declaration_order() {
  let env = TestEnv::with_manifest(THREE_PACKAGES);

  env.fpmfile_cmd().arg("build").assert().success();

  let invocations = env.invocations();
  assert_eq!(invocations.len(), 3);
  assert!(invocations[0].ends_with("-n first a"));
  assert!(invocations[1].ends_with("-n second b"));
  assert!(invocations[2].ends_with("-n third c"));
}

#[test]
fn tool_failure_exits_two_and_stops() {
  let env = TestEnv::with_manifest(THREE_PACKAGES);

  env
    .fpmfile_cmd()
    .arg("build")
    .env("FAKE_FPM_FAIL", "second")
    .assert()
    .code(2)
    .stdout(predicate::str::contains("fake-fpm: cannot package second"))
    .stderr(predicate::str::contains("failed for package second"));

  let invocations = env.invocations();
  assert_eq!(invocations.len(), 2);
  assert!(!invocations.iter().any(|line| line.contains("third")));
}

#[test]
fn missing_name_exits_one_without_invoking_tool() {
  let env = TestEnv::with_manifest(
    r#"
packages:
  - source: {mode: dir}
    target: {mode: deb, version: "1.0"}
    paths: [bla]
"#,
  );

  env
    .fpmfile_cmd()
    .arg("build")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("package[0].name"));

  assert!(env.invocations().is_empty());
}

#[test]
fn invalid_later_package_prevents_every_build() {
  let env = TestEnv::with_manifest(
    r#"
packages:
  - name: fine
    source: {mode: dir}
    target: {mode: deb, version: "1.0"}
    paths: [a]
  - name: broken
    source: {mode: dir}
    target: {mode: deb}
    paths: [b]
"#,
  );

  env
    .fpmfile_cmd()
    .arg("build")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("error in package broken"))
    .stderr(predicate::str::contains("target.version"));

  assert!(env.invocations().is_empty());
}

#[test]
fn empty_manifest_succeeds_without_invocations() {
  let env = TestEnv::with_manifest("packages: []\n");

  env
    .fpmfile_cmd()
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("no packages to build"));

  assert!(env.invocations().is_empty());
}

#[test]
fn missing_manifest_exits_one() {
  let env = TestEnv::with_manifest(EXAMPLE);
  std::fs::remove_file(&env.manifest_path).unwrap();

  env
    .fpmfile_cmd()
    .arg("build")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("failed to read manifest"));
}

#[test]
fn malformed_manifest_exits_one() {
  let env = TestEnv::with_manifest("packages: [\n");

  env
    .fpmfile_cmd()
    .arg("build")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("failed to parse manifest"));

  assert!(env.invocations().is_empty());
}

#[test]
fn branch_ref_uses_run_number() {
  let env = TestEnv::from_fixture("packages.yml");

  env
    .fpmfile_cmd()
    .arg("build")
    .env("GITHUB_REF", "refs/heads/main")
    .env("GITHUB_RUN_NUMBER", "42")
    .assert()
    .success();

  let invocations = env.invocations();
  assert_eq!(invocations.len(), 2);
  assert!(invocations[0].contains("-v 42.main -x *.swp -n example-agent"));
  assert!(invocations[1].contains("-v 1.0 -C etc -n example-config"));
}

#[test]
fn tag_ref_uses_tag_name() {
  let env = TestEnv::from_fixture("packages.yml");

  env
    .fpmfile_cmd()
    .arg("build")
    .env("GITHUB_REF", "refs/tags/v2.3.1")
    .assert()
    .success();

  assert!(env.invocations()[0].contains("-v v2.3.1 "));
}

#[test]
fn unset_ref_fails_validation() {
  let env = TestEnv::from_fixture("packages.yml");

  env
    .fpmfile_cmd()
    .arg("build")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("error in package example-agent"))
    .stderr(predicate::str::contains("target.version"));
}

#[test]
fn run_number_flag_overrides_environment() {
  let env = TestEnv::from_fixture("packages.yml");

  env
    .fpmfile_cmd()
    .args(["build", "--run-number", "7"])
    .env("GITHUB_REF", "refs/heads/dev")
    .env("GITHUB_RUN_NUMBER", "42")
    .assert()
    .success();

  assert!(env.invocations()[0].contains("-v 7.dev "));
}

#[test]
fn manifest_path_flag() {
  let env = TestEnv::with_manifest("packages: []\n");
  let other = env.temp.path().join("other.yml");
  std::fs::write(&other, EXAMPLE).unwrap();

  env
    .fpmfile_cmd()
    .arg("build")
    .arg("--file")
    .arg(&other)
    .assert()
    .success();

  assert_eq!(env.invocations().len(), 1);
}

#[test]
fn missing_tool_exits_two() {
  let env = TestEnv::with_manifest(EXAMPLE);

  env
    .fpmfile_cmd()
    .args(["build", "--tool", "/nonexistent/fpm"])
    .assert()
    .code(2)
    .stderr(predicate::str::contains("failed to run /nonexistent/fpm"));
}
