mod common;

use common::TestEnv;
use predicates::str::contains;

const COMMANDS: &[&str] = &["list", "getMaxDepth"];

#[test]
fn every_registered_command_dispatches_to_itself() {
    let env = TestEnv::new();
    let root = env.root.to_str().expect("utf8 path").to_string();

    for name in COMMANDS {
        env.cmd()
            .args([name, root.as_str()])
            .assert()
            .success()
            .stdout(contains(format!("invoking {name}(\"{root}\")")));
    }
}

#[test]
fn usage_lists_every_registered_command_exactly_once() {
    let env = TestEnv::new();

    for bogus in ["bogus", "LIST", "getmaxdepth", "-", "-x", "--help", "-V"] {
        let out = env
            .cmd()
            .arg(bogus)
            .assert()
            .success()
            .stderr(contains(format!("{bogus} is not a valid option.")))
            .get_output()
            .stdout
            .clone();
        let stdout = String::from_utf8(out).expect("utf8 stdout");
        for name in COMMANDS {
            let line = format!("    {name}");
            assert_eq!(
                stdout.lines().filter(|l| *l == line).count(),
                1,
                "{name} listed once for {bogus}"
            );
        }
    }
}

#[test]
fn arguments_are_forwarded_verbatim() {
    let env = TestEnv::new();
    env.cmd()
        .args(["list", "--json", "two words"])
        .assert()
        .success()
        .stdout(contains("invoking list(\"--json\", \"two words\")"));
}

#[test]
fn flag_like_arguments_reach_the_handler() {
    let env = TestEnv::new();
    env.cmd()
        .args(["getMaxDepth", "--help"])
        .assert()
        .success()
        .stdout(contains("invoking getMaxDepth(\"--help\")"))
        .stderr(contains("path does not exist: --help"));
    env.cmd()
        .args(["list", "--version"])
        .assert()
        .success()
        .stdout(contains("invoking list(\"--version\")"))
        .stdout(contains("- getMaxDepth"));
}
