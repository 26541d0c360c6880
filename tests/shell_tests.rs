use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{setup_test_config, streaks};

#[test]
fn test_shell_creates_habit() {
    let cfg = setup_test_config("shell_create");

    streaks()
        .args(["--config", &cfg, "--test", "shell"])
        .write_stdin("new\ntitle   Journal  \nicon 📓\ncolor brown\nday mon\nday wed\nday mon\nshow\ncommit\nlist\nquit\n")
        .assert()
        .success()
        .stdout(contains("Reminder days: [Mon, Wed]"))
        .stdout(contains("Reminder days: [Wed]"))
        .stdout(contains("Pick a time  09:00"))
        .stdout(contains("Added habit 'Journal'"))
        .stdout(contains("[h4]"))
        .stdout(contains("streaks>").not());
}

#[test]
fn test_shell_blank_title_is_gated() {
    let cfg = setup_test_config("shell_blank");

    streaks()
        .args(["--config", &cfg, "--test", "shell"])
        .write_stdin("new\ntitle    \nshow\ncommit\nlist\n")
        .assert()
        .success()
        .stdout(contains("Add: disabled"))
        .stdout(contains("Add is disabled"))
        .stdout(contains("[h4]").not())
        .stdout(contains("Open draft discarded"));
}

#[test]
fn test_shell_errors_do_not_stop_session() {
    let cfg = setup_test_config("shell_errors");

    streaks()
        .args(["--config", &cfg, "--test", "shell"])
        .write_stdin("commit\nfly\nnew\ncolor mint\ncancel\nlist\n")
        .assert()
        .success()
        .stderr(contains("No draft is open"))
        .stderr(contains("Unknown command: fly"))
        .stderr(contains("not part of the palette"))
        .stdout(contains("Draft discarded"))
        .stdout(contains("Meditate"));
}

#[test]
fn test_shell_remove_and_log() {
    let cfg = setup_test_config("shell_remove");

    streaks()
        .args(["--config", &cfg, "--test", "shell"])
        .write_stdin("remove h2\nremove h2\nlog\n")
        .assert()
        .success()
        .stdout(contains("Removed habit 'Read' (h2)"))
        .stderr(contains("No habit matches id 'h2'"))
        .stdout(contains("seed (samples)"))
        .stdout(contains("remove (h2)"));
}
