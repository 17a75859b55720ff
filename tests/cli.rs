use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vibepay(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vibepay").unwrap();
    cmd.env("VIBEPAY_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_command_prints_hints() {
    let dir = TempDir::new().unwrap();
    vibepay(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("vibepay chat"));
}

#[test]
fn test_say_logs_expense() {
    let dir = TempDir::new().unwrap();
    vibepay(&dir)
        .args(["say", "gastei", "R$75", "com", "mercado"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Pronto! registrado como gasto em Alimentação no valor de R$ 75,00.",
        ));

    assert!(dir
        .path()
        .join("data")
        .join("vibepay-chat-state.json")
        .exists());
}

#[test]
fn test_session_persists_between_runs() {
    let dir = TempDir::new().unwrap();
    vibepay(&dir)
        .args(["say", "recebi R$500 de freelance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("destinar 10% (R$ 50,00)"));

    vibepay(&dir)
        .args(["say", "gastei 75,50 no mercado"])
        .assert()
        .success();

    vibepay(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 424,50"));

    vibepay(&dir)
        .args(["say", "quanto gastei?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Você recebeu R$ 500,00, gastou R$ 75,50 e está com saldo de R$ 424,50.",
        ));
}

#[test]
fn test_unrecognized_message_gets_help() {
    let dir = TempDir::new().unwrap();
    vibepay(&dir)
        .args(["say", "bom dia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ainda não entendi esse comando."));
}

#[test]
fn test_chat_reads_stdin() {
    let dir = TempDir::new().unwrap();
    vibepay(&dir)
        .arg("chat")
        .write_stdin("investi 200 no tesouro\nquais minhas metas?\nsair\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("registrado como gasto em Outros no valor de R$ 200,00."))
        .stdout(predicate::str::contains("Aqui vão suas metas atuais:"))
        .stdout(predicate::str::contains("Até logo!"));

    vibepay(&dir)
        .arg("transactions")
        .assert()
        .success()
        .stdout(predicate::str::contains("investi no tesouro"))
        .stdout(predicate::str::contains("investimento"));
}

#[test]
fn test_reset_clears_transactions() {
    let dir = TempDir::new().unwrap();
    vibepay(&dir)
        .args(["say", "gastei 30 no cinema"])
        .assert()
        .success();

    vibepay(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("começamos do zero"));

    vibepay(&dir)
        .arg("transactions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ainda sem transações"));
}

#[test]
fn test_corrupt_state_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("vibepay-chat-state.json"), "{ broken").unwrap();

    vibepay(&dir)
        .arg("goals")
        .assert()
        .success()
        .stdout(predicate::str::contains("Montar reserva de emergência"));
}

#[test]
fn test_say_requires_a_message() {
    let dir = TempDir::new().unwrap();
    vibepay(&dir).arg("say").assert().failure();
}
