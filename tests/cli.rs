//! 命令行集成测试

use assert_cmd::Command;

const CREDENTIAL_VARS: [&str; 3] = [
    "OPENAI_API_KEY",
    "OPENAI_API_KEY_GPT",
    "NEXT_PUBLIC_OPENAI_API_KEY",
];

fn pollyglot() -> Command {
    let mut cmd = Command::cargo_bin("pollyglot").unwrap();
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd.env("POLLYGLOT_REMOTE_ENABLED", "false");
    cmd
}

#[test]
fn test_translate_defaults_to_french() {
    let output = pollyglot().args(["Hello", "cat"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Bonjour chat\n");
}

#[test]
fn test_target_language_option() {
    let output = pollyglot()
        .args(["--to", "es", "good", "night"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "buen noche\n");
}

#[test]
fn test_json_output() {
    let output = pollyglot()
        .args(["--json", "--offline", "--to", "Japanese", "water"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["translation"], "水");
    assert_eq!(result["mode"], "offline");
}

#[test]
fn test_empty_text_exits_with_usage_error() {
    let output = pollyglot().arg("").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_text_is_rejected() {
    pollyglot().assert().failure();
}

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("pollyglot-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_bad_override_does_not_drop_credential() {
    let mut cmd = pollyglot();
    cmd.env_remove("POLLYGLOT_REMOTE_ENABLED")
        .env("OPENAI_API_KEY", "sk-test")
        .env("POLLYGLOT_REMOTE_TIMEOUT", "0")
        // 无人监听的端口，远程调用必然失败
        .env("POLLYGLOT_API_BASE_URL", "http://127.0.0.1:9");

    let output = cmd.args(["--json", "good", "morning"]).output().unwrap();

    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["mode"], "offline-fallback");
    assert_eq!(result["translation"], "bon matin");
}

#[test]
fn test_dotenv_log_level_is_honored() {
    let dir = scratch_dir("dotenv");
    std::fs::write(dir.join(".env"), "POLLYGLOT_LOG_LEVEL=debug\n").unwrap();

    let output = pollyglot()
        .current_dir(&dir)
        .env_remove("RUST_LOG")
        .env_remove("POLLYGLOT_LOG_LEVEL")
        .arg("hello")
        .output()
        .unwrap();
    std::fs::remove_dir_all(&dir).ok();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("DEBUG"));
}

#[test]
fn test_web_binary_generates_example_config() {
    let dir = scratch_dir("example-config");
    let path = dir.join("pollyglot.toml");

    Command::cargo_bin("pollyglot-web")
        .unwrap()
        .arg("--generate-config")
        .arg(&path)
        .assert()
        .success();

    let config =
        pollyglot::translation::ConfigManager::load_from_file(&path.to_string_lossy()).unwrap();
    std::fs::remove_dir_all(&dir).ok();

    assert_eq!(config.model, "gpt-4o-mini");
    assert!(config.validate().is_ok());
}
