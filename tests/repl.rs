use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::prelude::*;
use std::path::Path;

fn carpark_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("carpark").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("CARPARK_DATA_FILE")
        .env_remove("CARPARK_LOG_FILTER")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("carpark.toml"))
        .arg("--data-file")
        .arg(dir.join("carparks.json"));
    cmd
}

const SEED: &str = "\
add TBM4 -a Blk 2 Telok Blangah Street --lots 220 --car-type car --night -w MON -w SUN
add ACB -a Blk 270/271 Albert Centre Basement --lots 95 --car-type car --car-type motorcycle --free -w 'MON 07:00-22:30'
add HG55 -a Blk 102 Punggol Field --lots 40 --car-type heavy --night -w 'SAT 22:00-07:00'
";

#[test]
fn test_add_and_list() {
    let temp_dir = tempfile::tempdir().unwrap();
    carpark_cmd(temp_dir.path())
        .write_stdin(format!("{SEED}list\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("New car park added: TBM4 (Blk 2 Telok Blangah Street)"))
        .stdout(predicate::str::contains("Listed all car parks"))
        .stdout(predicate::str::contains("3. HG55"));

    assert!(temp_dir.path().join("carparks.json").exists());
}

#[test]
fn test_data_survives_restart() {
    let temp_dir = tempfile::tempdir().unwrap();
    carpark_cmd(temp_dir.path())
        .write_stdin(SEED)
        .assert()
        .success();

    carpark_cmd(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ACB"))
        .stdout(predicate::str::contains("Punggol Field"));
}

#[test]
fn test_delete_resolves_against_filtered_view() {
    let temp_dir = tempfile::tempdir().unwrap();
    carpark_cmd(temp_dir.path())
        .write_stdin(format!("{SEED}find punggol\ndelete 1\nlist\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 car park listed!"))
        .stdout(predicate::str::contains("Deleted Car Park: HG55 (Blk 102 Punggol Field)"))
        .stdout(predicate::str::contains("2. ACB"))
        .stdout(predicate::str::contains("3. HG55").not());
}

#[test]
fn test_undo_redo() {
    let temp_dir = tempfile::tempdir().unwrap();
    carpark_cmd(temp_dir.path())
        .write_stdin(format!("{SEED}clear\nundo\nredo\nredo\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Car park list has been cleared!"))
        .stdout(predicate::str::contains("Undo success!"))
        .stdout(predicate::str::contains("Redo success!"))
        .stdout(predicate::str::contains("No more commands to redo!"));
}

#[test]
fn test_nothing_to_undo_on_fresh_start() {
    let temp_dir = tempfile::tempdir().unwrap();
    carpark_cmd(temp_dir.path())
        .write_stdin("undo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No more commands to undo!"));
}

#[test]
fn test_errors_do_not_stop_the_prompt() {
    let temp_dir = tempfile::tempdir().unwrap();
    carpark_cmd(temp_dir.path())
        .write_stdin(format!("{SEED}add tbm4 -a Somewhere Else\nselect 9\nfly away\nselect 2\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "This car park already exists in the car park list: TBM4",
        ))
        .stdout(predicate::str::contains("The car park index provided is invalid: 9"))
        .stderr(predicate::str::contains("fly"))
        .stdout(predicate::str::contains("Selected Car Park: 2"))
        .stdout(predicate::str::contains("Free parking:  yes"));
}

#[test]
fn test_filter_and_edit() {
    let temp_dir = tempfile::tempdir().unwrap();
    carpark_cmd(temp_dir.path())
        .write_stdin(format!(
            "{SEED}filter --day sat --from 23:00 --to 06:00\nedit 1 --lots 45\nselect 1\n"
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 car park listed!"))
        .stdout(predicate::str::contains("Edited Car Park: HG55"))
        .stdout(predicate::str::contains("Total lots:    45"));
}

#[test]
fn test_history_lists_every_submitted_line() {
    let temp_dir = tempfile::tempdir().unwrap();
    carpark_cmd(temp_dir.path())
        .write_stdin("list\ndelete 5\nhistory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Entered commands (from most recent to earliest):",
        ))
        .stdout(predicate::str::contains("delete 5"));
}

#[test]
fn test_exit_stops_reading() {
    let temp_dir = tempfile::tempdir().unwrap();
    carpark_cmd(temp_dir.path())
        .write_stdin("exit\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No car parks yet.").not());
}

#[test]
fn test_unreadable_config_fails_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("carpark.toml"), "log_filter = [").unwrap();
    carpark_cmd(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Config error"));
}
