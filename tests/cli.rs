use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn ledger(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("SAVINGS_LEDGER_DATA_DIR")
        .arg("--data-dir")
        .arg(dir);
    cmd
}

fn seed_balance(dir: &Path) {
    ledger(dir)
        .args(["transaction", "add", "Entrada", "1000", "Salário"])
        .assert()
        .success();
    ledger(dir)
        .args(["transaction", "add", "Saída", "300", "Aluguel"])
        .assert()
        .success();
}

#[test]
fn records_transactions_and_reports_balance() {
    let tmp = TempDir::new().unwrap();
    seed_balance(tmp.path());

    ledger(tmp.path())
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("Balance: R$ 700.00"));

    ledger(tmp.path())
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("Entrada - R$ 1000.00 (Salário)"))
        .stdout(contains("Saída - R$ 300.00 (Aluguel)"));

    let stored = std::fs::read_to_string(tmp.path().join("data").join("transacoes.txt")).unwrap();
    assert_eq!(stored, "Entrada;1000.00;Salário;\nSaída;300.00;Aluguel;\n");
}

#[test]
fn legacy_rows_survive_the_next_save() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(
        data.join("transacoes.txt"),
        "Entrada;1000.0;Salário;\nEntrada;1.0E7;Empréstimo;\n",
    )
    .unwrap();

    ledger(tmp.path())
        .args(["transaction", "add", "Entrada", "5", "Outros"])
        .assert()
        .success()
        .stdout(contains("Balance: R$ 10001005.00"));

    let stored = std::fs::read_to_string(data.join("transacoes.txt")).unwrap();
    assert_eq!(
        stored,
        "Entrada;1000.00;Salário;\nEntrada;10000000.00;Empréstimo;\nEntrada;5.00;Outros;\n"
    );
}

#[test]
fn funding_is_capped_by_target_and_persisted() {
    let tmp = TempDir::new().unwrap();
    seed_balance(tmp.path());

    ledger(tmp.path())
        .args(["goal", "create", "Viagem", "--target", "500"])
        .assert()
        .success()
        .stdout(contains("Viagem"));

    ledger(tmp.path())
        .args(["goal", "fund", "Viagem", "600"])
        .assert()
        .success()
        .stdout(contains("Moved R$ 500.00 into goal 'Viagem'"))
        .stdout(contains("Balance: R$ 200.00"));

    ledger(tmp.path())
        .args(["goal", "fund", "Viagem", "100"])
        .assert()
        .code(3)
        .stderr(contains("Goal already reached"));

    let goals = std::fs::read_to_string(tmp.path().join("data").join("metas.txt")).unwrap();
    assert_eq!(goals, "Viagem;500.00;500.00\n");

    let transactions =
        std::fs::read_to_string(tmp.path().join("data").join("transacoes.txt")).unwrap();
    assert!(transactions.ends_with("Saída;500.00;Adicionar à Meta;Viagem\n"));
}

#[test]
fn funding_request_through_transaction_add() {
    let tmp = TempDir::new().unwrap();
    seed_balance(tmp.path());

    ledger(tmp.path())
        .args(["goal", "create", "Jar"])
        .assert()
        .success();

    ledger(tmp.path())
        .args([
            "transaction",
            "add",
            "Entrada",
            "100",
            "Adicionar à Meta",
            "--goal",
            "Jar",
        ])
        .assert()
        .success()
        .stdout(contains("Moved R$ 100.00 into goal 'Jar'"))
        .stdout(contains("Balance: R$ 600.00"));

    ledger(tmp.path())
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(contains("Jar: R$ 100.00 (no target)"));
}

#[test]
fn funding_without_balance_fails() {
    let tmp = TempDir::new().unwrap();

    ledger(tmp.path())
        .args(["goal", "create", "Casa", "--target", "1000"])
        .assert()
        .success();

    ledger(tmp.path())
        .args(["goal", "fund", "Casa", "50"])
        .assert()
        .failure()
        .stderr(contains("Insufficient balance"));

    ledger(tmp.path())
        .args(["goal", "fund", "Carro", "50"])
        .assert()
        .code(3)
        .stderr(contains("Goal not found: Carro"));
}

#[test]
fn remove_rejects_positions_outside_the_list() {
    let tmp = TempDir::new().unwrap();
    seed_balance(tmp.path());

    ledger(tmp.path())
        .args(["transaction", "remove", "9"])
        .assert()
        .failure()
        .stderr(contains("out of range"));

    ledger(tmp.path())
        .args(["transaction", "remove", "2"])
        .assert()
        .success()
        .stdout(contains("Balance: R$ 1000.00"));
}

#[test]
fn invalid_amount_is_rejected_without_writing() {
    let tmp = TempDir::new().unwrap();

    ledger(tmp.path())
        .args(["transaction", "add", "Entrada", "abc", "Salário"])
        .assert()
        .code(2)
        .stderr(contains("Invalid amount"));

    assert!(!tmp.path().join("data").join("transacoes.txt").exists());
}

#[test]
fn unreadable_settings_exit_with_general_failure() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.json"), "not json").unwrap();

    ledger(tmp.path())
        .arg("balance")
        .assert()
        .code(1)
        .stderr(contains("Configuration error"));
}

#[test]
fn categories_are_listed_per_kind() {
    let tmp = TempDir::new().unwrap();

    ledger(tmp.path())
        .args(["categories", "saida"])
        .assert()
        .success()
        .stdout(contains("Aluguel"))
        .stdout(contains("Salário").not());
}

#[test]
fn data_dir_can_come_from_environment() {
    let tmp = TempDir::new().unwrap();

    Command::cargo_bin("ledger")
        .unwrap()
        .env_remove("RUST_LOG")
        .env("SAVINGS_LEDGER_DATA_DIR", tmp.path())
        .args(["transaction", "add", "Entrada", "42,50", "Outros"])
        .assert()
        .success();

    assert!(tmp.path().join("data").join("transacoes.txt").exists());
}

#[test]
fn export_writes_csv() {
    let tmp = TempDir::new().unwrap();
    seed_balance(tmp.path());
    let out = tmp.path().join("out.csv");

    ledger(tmp.path())
        .args(["export", "csv"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Exported 2 rows"));

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("kind,amount,category,goal\n"));
}
