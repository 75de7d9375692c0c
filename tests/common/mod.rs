use assert_cmd::Command;

pub fn moodjour_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodjour").unwrap();
    cmd.env_remove("MOODJOUR_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
