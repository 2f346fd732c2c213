use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn psysafe(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("psysafe").unwrap();
    cmd.env("HOME", home.path()).env_remove("PSYSAFE_LOG");
    cmd
}

#[test]
fn techniques_lists_table() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .arg("techniques")
        .assert()
        .success()
        .stdout(predicate::str::contains("square"))
        .stdout(predicate::str::contains("Задержка (7 сек)"))
        .stdout(predicate::str::contains("Диафрагмальное дыхание"));
}

#[test]
fn techniques_json() {
    let home = TempDir::new().unwrap();
    let output = psysafe(&home)
        .args(["techniques", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 3);
    assert_eq!(value["items"][1]["cycle_millis"], 19000);
}

#[test]
fn checklist_scores_items() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .args(["checklist", "1", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Результат: 3 из 6"));
}

#[test]
fn checklist_rejects_unknown_item() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .args(["checklist", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Checklist item 9"));
}

#[test]
fn burnout_json() {
    let home = TempDir::new().unwrap();
    let output = psysafe(&home)
        .args(["-o", "json", "burnout", "5", "4", "5", "4", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["score"], 23);
    assert_eq!(value["percentage"], 92);
    assert_eq!(value["risk"], "critical");
}

#[test]
fn burnout_rejects_level_above_five() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .args(["burnout", "1", "2", "3", "4", "6"])
        .assert()
        .failure();
}

#[test]
fn diary_add_and_history_persist() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .args(["diary", "add", "Сложный разговор", "-e", "Тревога"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Запись сохранена!"));

    psysafe(&home)
        .args(["diary", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Сложный разговор"))
        .stdout(predicate::str::contains("Тревога"));

    assert!(home.path().join(".psysafe").join("psysafe.db").exists());
}

#[test]
fn diary_rejects_blank_entry() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .args(["diary", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Пожалуйста, опишите ваше эмоциональное состояние",
        ));

    psysafe(&home)
        .args(["diary", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Пока нет сохраненных записей."));
}

#[test]
fn boundaries_require_one_area() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .args(["boundaries", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("хотя бы одну границу"));
}

#[test]
fn plan_round_trip() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .args(["plan", "set", "--triggers", "Давление сроками"])
        .assert()
        .success()
        .stdout(predicate::str::contains("План самообороны сохранен!"));

    psysafe(&home)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Давление сроками"))
        .stdout(predicate::str::contains("План загружен"));
}

#[test]
fn breathe_unknown_technique_fails() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .args(["breathe", "lion", "--plain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown breathing technique: 'lion'"));
}

#[test]
fn breathe_plain_runs_for_duration() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .args(["breathe", "square", "--plain", "--duration", "1s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Вдох"))
        .stdout(predicate::str::contains("Выберите технику для начала"))
        .stdout(predicate::str::contains("Session complete"));
}

#[test]
fn breathe_rejects_overflowing_duration() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .args(["breathe", "square", "--plain", "--duration", "999999999999999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn research_single_dataset() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .args(["research", "effectiveness"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/100"));
}

#[test]
fn completions_bash() {
    let home = TempDir::new().unwrap();
    psysafe(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("psysafe"));
}

#[test]
fn bad_config_is_reported() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".psysafe");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yaml"), "breathing:\n  default_technique: lion\n").unwrap();

    psysafe(&home)
        .arg("techniques")
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_technique"));
}
