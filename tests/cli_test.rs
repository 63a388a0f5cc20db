use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_balance-alert"))
        .args(args)
        .output()
        .expect("run balance-alert")
}

fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("balance-alert-cli-{}-{name}.yaml", std::process::id()));
    fs::write(&path, content).expect("write temp config");
    path
}

#[test]
fn test_missing_config_flag_exits_1_with_usage() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: balance-alert -c"));
}

#[test]
fn test_empty_config_path_exits_1_with_usage() {
    let output = run(&["-c", ""]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: balance-alert -c"));
}

#[test]
fn test_nonexistent_config_file_exits_2() {
    let output = run(&["-c", "/nonexistent/config.yaml"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error reading config file"));
}

#[test]
fn test_unparseable_config_file_exits_2() {
    let path = write_config("unparseable", "EthRpc: [unclosed\n");
    let output = run(&["-c", path.to_str().unwrap()]);
    let _ = fs::remove_file(&path);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error parsing config file"));
}

#[test]
fn test_malformed_address_entry_exits_2() {
    let path = write_config(
        "bad-entry",
        r#"
EthRpc: "https://ethereum.publicnode.com"
BalanceAlert: 1.0
AlertTitle: "Alert"
QywxBot: ["key"]
EthAddress:
  - "0x28C6c06298d514Db089934071355E5743bf21d60"
"#,
    );
    let output = run(&["-c", path.to_str().unwrap()]);
    let _ = fs::remove_file(&path);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_malformed_rpc_endpoint_exits_3() {
    let path = write_config(
        "bad-endpoint",
        r#"
EthRpc: "not a url"
BalanceAlert: 1.0
AlertTitle: "Alert"
QywxBot: ["key"]
EthAddress:
  - "hot-wallet:0x28C6c06298d514Db089934071355E5743bf21d60"
"#,
    );
    let output = run(&["-c", path.to_str().unwrap()]);
    let _ = fs::remove_file(&path);

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid RPC endpoint"));
}
