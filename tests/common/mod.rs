#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn dayjot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dayjot").unwrap();
    cmd.env_remove("DAYJOT_ROOT");
    cmd.env_remove("DAYJOT_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Run `dayjot init` on `path`
pub fn init_journal(path: &Path) {
    dayjot_cmd().arg("init").arg(path).assert().success();
}

/// Write an entry and return its short id (JE-xxxxxx) from the confirmation line
pub fn write_entry(root: &Path, date: &str, text: &str) -> String {
    let output = dayjot_cmd()
        .current_dir(root)
        .args(["write", date, "--text", text])
        .output()
        .unwrap();
    assert!(output.status.success(), "write failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .split_whitespace()
        .find(|word| word.starts_with("JE-"))
        .map(str::to_string)
        .expect("confirmation line carries the short id")
}
