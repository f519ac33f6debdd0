//! Integration tests for weave
//!
//! These drive the built binary and the two libraries together.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;
use weave_graph::{EdgeColor, EdgeListFile};

fn weave() -> Command {
    Command::new(env!("CARGO_BIN_EXE_weave"))
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = weave().arg("--help").output().expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Edge-colored graph drawing and single-header merging"));
    for command in ["draw", "bridges", "merge", "version"] {
        assert!(stdout.contains(command), "missing subcommand {}", command);
    }
}

#[test]
fn test_draw_dot_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("graph.dot");

    let status = weave()
        .args(["draw", "--preset", "bridges-head", "--format", "dot", "-o"])
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let dot = std::fs::read_to_string(&out).unwrap();
    assert!(dot.starts_with("graph weave {"));
    assert!(dot.contains("0 -- 1 [color=\"blue\", penwidth=1];"));

    // Highlighted edges come after normal ones.
    let blue = dot.find("0 -- 1").unwrap();
    let red = dot.find("3 -- 7 [color=\"red\"").unwrap();
    assert!(blue < red);
}

#[test]
fn test_draw_empty_preset_to_stdout() {
    let output = weave().args(["draw", "--preset", "empty"]).output().unwrap();
    assert!(output.status.success());
    let svg = String::from_utf8_lossy(&output.stdout);
    assert!(svg.starts_with("<svg"));
    assert!(!svg.contains("<line"));
}

#[test]
fn test_draw_strict_colors_rejects_unknown_label() {
    let dir = TempDir::new().unwrap();
    let edges = dir.path().join("edges.toml");
    std::fs::write(
        &edges,
        "[[edges]]\na = 0\nb = 1\ncolor = \"green\"\n",
    )
    .unwrap();

    let lenient = weave().arg("draw").arg("--edges").arg(&edges).output().unwrap();
    assert!(lenient.status.success());

    let strict = weave()
        .arg("draw")
        .arg("--edges")
        .arg(&edges)
        .arg("--strict-colors")
        .output()
        .unwrap();
    assert!(!strict.status.success());
    assert!(String::from_utf8_lossy(&strict.stderr).contains("green"));
}

#[test]
fn test_bridges_command_marks_sample_bridges() {
    let output = weave().args(["bridges", "--preset", "bridges"]).output().unwrap();
    assert!(output.status.success());

    let file = EdgeListFile::from_toml(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(file.edges.len(), 30);
    let highlighted: Vec<_> = file
        .edges
        .iter()
        .filter(|e| e.color == EdgeColor::Highlighted)
        .map(|e| e.endpoints())
        .collect();
    assert_eq!(highlighted, vec![(3, 7), (8, 14), (14, 17)]);
}

fn write(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
}

#[cfg(unix)]
#[test]
fn test_merge_with_failing_tool_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(&root.join("main.cpp"), "int main() {}\n");

    let output = weave()
        .current_dir(root)
        .args(["merge", "--tool", "false", "--entry", "main.cpp"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("exited with"));
    assert!(!root.join("single_header.cpp").exists());
}

#[test]
fn test_merge_rejects_bad_lib_argument() {
    let dir = TempDir::new().unwrap();
    let output = weave()
        .current_dir(dir.path())
        .args(["merge", "--lib", "missing-separator"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("INCLUDE=PATH"));
}

#[test]
fn test_draw_recolor_bridges_marks_bridges_red() {
    let dir = TempDir::new().unwrap();
    let edges = dir.path().join("edges.toml");
    let mut text = String::new();
    for (a, b) in [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)] {
        text.push_str(&format!("[[edges]]\na = {}\nb = {}\ncolor = \"blue\"\n\n", a, b));
    }
    write(&edges, &text);

    let output = weave()
        .arg("draw")
        .arg("--edges")
        .arg(&edges)
        .args(["--recolor-bridges", "--format", "dot"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let dot = String::from_utf8_lossy(&output.stdout);
    for cycle_edge in ["0 -- 1", "1 -- 2", "2 -- 0"] {
        assert!(dot.contains(&format!("{} [color=\"blue\"", cycle_edge)), "{}", dot);
    }
    assert!(dot.contains("2 -- 3 [color=\"red\", penwidth=2];"));
    assert!(dot.contains("3 -- 4 [color=\"red\", penwidth=2];"));
    assert_eq!(dot.matches("[color=\"red\"").count(), 2);
}

/// Stand-in preprocessor: copies the last argument (the entry point) to the
/// path following `-o`.
#[cfg(unix)]
fn write_copy_tool(path: &Path) {
    use std::io::Write as _;
    use std::os::unix::fs::PermissionsExt;

    let mut file = std::fs::File::create(path).unwrap();
    file.write_all(b"#!/bin/sh\nout=\"$2\"\nfor last; do :; done\ncp \"$last\" \"$out\"\n")
        .unwrap();
    file.sync_all().unwrap();
    drop(file);
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_merge_uses_config_file_and_flag_overrides() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let tool = root.join("copy-pp.sh");
    write_copy_tool(&tool);

    write(
        &root.join("main.cpp"),
        "#include <vendor/json.hpp>\n#include <vector>\nint main() { return 0; }\n",
    );
    write(&root.join("json.hpp"), "// vendored json\nstruct Json {};\n");
    // The configured tool would fail; the command-line flag replaces it.
    write(
        &root.join("weave-merge.toml"),
        r#"
tool = "false"
entry_point = "main.cpp"

[[libraries]]
include = "vendor/json.hpp"
source = "json.hpp"
"#,
    );

    let output = weave()
        .current_dir(root)
        .arg("merge")
        .arg("--tool")
        .arg(&tool)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(
        std::fs::read_to_string(root.join("out.hpp")).unwrap(),
        "#include <vector>\nint main() { return 0; }\n"
    );
    assert_eq!(
        std::fs::read(root.join("single_header.cpp")).unwrap(),
        b"// vendored json\nstruct Json {};\n#include <vector>\nint main() { return 0; }\n".to_vec()
    );
}
