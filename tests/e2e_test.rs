/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const FIXTURE: &str = "tests/fixtures/pn-depends.dot";

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal query
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("oe-depends")
            .args(["-f", FIXTURE, "busybox"])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("oe-depends").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("oe-depends")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 0: "not found" is informational output, not an error
    #[test]
    fn test_exit_code_unknown_package() {
        cargo_bin_cmd!("oe-depends")
            .args(["-f", FIXTURE, "no-such-package"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("not found"));
    }

    /// Exit code 1: Bad depth argument
    #[test]
    fn test_exit_code_bad_depth() {
        cargo_bin_cmd!("oe-depends")
            .args(["-f", FIXTURE, "-d", "abc", "busybox"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Bad depth argument: abc"))
            .stderr(predicate::str::contains("Usage"));
    }

    /// Exit code 1: Negative depth is rejected too
    #[test]
    fn test_exit_code_negative_depth() {
        cargo_bin_cmd!("oe-depends")
            .args(["-f", FIXTURE, "-d=-2", "busybox"])
            .assert()
            .code(1);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("oe-depends")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("oe-depends")
            .args(["--format", "yaml"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - missing graph file
    #[test]
    fn test_exit_code_missing_graph_file() {
        cargo_bin_cmd!("oe-depends")
            .args(["-f", "/nonexistent/pn-depends.dot", "busybox"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Graph file not found"))
            .stderr(predicate::str::contains("bitbake -g"));
    }
}

#[test]
fn test_e2e_package_index() {
    cargo_bin_cmd!("oe-depends")
        .args(["-f", FIXTURE])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "busybox\ncore-image-minimal\ngcc\nupdate-rc.d\n",
        ));
}

#[test]
fn test_e2e_flat_dependencies() {
    cargo_bin_cmd!("oe-depends")
        .args(["-f", FIXTURE, "busybox"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Package [ busybox ] depends on"))
        .stdout(predicate::str::contains("\tglibc"))
        .stdout(predicate::str::contains("\tupdate-rc.d"));
}

#[test]
fn test_e2e_tree_dependencies() {
    cargo_bin_cmd!("oe-depends")
        .args(["-f", FIXTURE, "-t", "core-image-minimal"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Package [ core-image-minimal ] depends on",
        ))
        .stdout(predicate::str::contains("\tbusybox\n\t\tupdate-rc.d"));
}

#[test]
fn test_e2e_reverse_dependencies() {
    cargo_bin_cmd!("oe-depends")
        .args(["-f", FIXTURE, "-r", "glibc"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Package [ glibc ] is needed by"))
        .stdout(predicate::str::contains("\tbusybox"))
        .stdout(predicate::str::contains("\tgcc"));
}

#[test]
fn test_e2e_depth_limit() {
    cargo_bin_cmd!("oe-depends")
        .args(["-f", FIXTURE, "-t", "-d", "1", "core-image-minimal"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\tbusybox"))
        .stdout(predicate::str::contains("update-rc.d").not());
}

#[test]
fn test_e2e_wildcard_multiple_matches() {
    cargo_bin_cmd!("oe-depends")
        .args(["-f", FIXTURE, "g*"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("gcc\nglibc\n"))
        .stdout(predicate::str::contains("depends on").not());
}

#[test]
fn test_e2e_wildcard_no_match() {
    cargo_bin_cmd!("oe-depends")
        .args(["-f", FIXTURE, "zzz*"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("No package found matching [ zzz* ]"));
}

#[test]
fn test_e2e_verbose_loop_diagnostics() {
    cargo_bin_cmd!("oe-depends")
        .args(["-f", FIXTURE, "-v", "busybox"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Dependency loop detected"))
        .stderr(predicate::str::contains("package(s)"));
}

#[test]
fn test_e2e_quiet_by_default() {
    cargo_bin_cmd!("oe-depends")
        .args(["-f", FIXTURE, "busybox"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Dependency loop").not());
}

#[test]
fn test_e2e_json_format() {
    cargo_bin_cmd!("oe-depends")
        .args(["-f", FIXTURE, "--format", "json", "busybox"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"kind\": \"flat\""))
        .stdout(predicate::str::contains("\"package\": \"busybox\""))
        .stdout(predicate::str::contains("\"generated\""));
}

#[test]
fn test_e2e_output_to_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output_path = temp_dir.path().join("report.txt");

    cargo_bin_cmd!("oe-depends")
        .args(["-f", FIXTURE, "-o"])
        .arg(&output_path)
        .arg("busybox")
        .assert()
        .code(0);

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert!(written.contains("Package [ busybox ] depends on"));
    assert!(written.contains("\tglibc"));
}

#[test]
fn test_e2e_show_parent_deps_expands_tree() {
    cargo_bin_cmd!("oe-depends")
        .args(["-f", FIXTURE, "-t", "-s", "core-image-minimal"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\tbusybox\n\t\tglibc"));
}
