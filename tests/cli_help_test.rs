#[cfg(test)]
mod cli_help_tests {
    use assert_cmd::prelude::*;
    use std::process::Command;

    const GROUPS: [&str; 16] = [
        "login",
        "raw",
        "apparatus",
        "exposure",
        "incident",
        "incident-exposure",
        "exposure-location",
        "exposure-fire",
        "exposure-apparatus",
        "exposure-narrative",
        "exposure-member",
        "exposure-user-role",
        "station",
        "user",
        "user-contact-info",
        "config",
    ];

    #[test]
    fn test_cli_help_output() {
        let mut cmd = Command::cargo_bin("ercli").unwrap();

        let assert_result = cmd.arg("--help").assert().success();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stdout);

        assert!(help_output.contains("Usage:"));
        assert!(help_output.contains("Options:"));
        assert!(help_output.contains("Commands:"));

        for group in GROUPS {
            assert!(
                help_output.contains(group),
                "help output is missing the '{}' command",
                group
            );
        }

        assert!(help_output.contains("--config"));
        assert!(help_output.contains("--token"));
        assert!(help_output.contains("--limit"));
        assert!(help_output.contains("--tenant-flow"));
        assert!(help_output.contains("-h, --help"));
        assert!(help_output.contains("-V, --version"));
        assert!(help_output.contains("ercli"));
    }

    #[test]
    fn test_cli_subcommand_help_outputs() {
        for group in GROUPS {
            let mut cmd = Command::cargo_bin("ercli").unwrap();
            let assert_result = cmd.arg(group).arg("--help").assert().success();
            let output = assert_result.get_output();
            let help_output = String::from_utf8_lossy(&output.stdout);

            assert!(help_output.contains("Usage:"));
            assert!(help_output.contains(group));
        }
    }

    #[test]
    fn test_raw_lists_every_method() {
        let mut cmd = Command::cargo_bin("ercli").unwrap();
        let assert_result = cmd.args(["raw", "--help"]).assert().success();
        let help_output = String::from_utf8_lossy(&assert_result.get_output().stdout).to_string();

        for method in ["delete", "get", "patch", "post", "put"] {
            assert!(help_output.contains(method));
        }
    }

    #[test]
    fn test_no_arguments_prints_usage() {
        let mut cmd = Command::cargo_bin("ercli").unwrap();
        cmd.assert().failure();
    }

    #[test]
    fn test_version_flag() {
        let mut cmd = Command::cargo_bin("ercli").unwrap();
        let assert_result = cmd.arg("--version").assert().success();
        let output = String::from_utf8_lossy(&assert_result.get_output().stdout).to_string();
        assert!(output.contains(env!("CARGO_PKG_VERSION")));
    }
}
