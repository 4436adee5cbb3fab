//! Process-level checks against the built binary.

use std::process::Command;

fn termspin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_termspin"))
}

#[test]
fn unknown_model_fails_and_lists_keys() {
    let output = termspin()
        .args(["--model", "teapot", "--frames", "1"])
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no frame data on stdout");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("teapot"), "stderr: {stderr}");
    for key in ["cube", "wide-cube", "sphere", "torus"] {
        assert!(stderr.contains(key), "stderr should list '{key}': {stderr}");
    }
}

#[test]
fn list_prints_every_model() {
    let output = termspin().arg("--list").output().expect("binary runs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for key in ["cube", "wide-cube", "sphere", "torus"] {
        assert!(stdout.contains(key), "missing '{key}' in: {stdout}");
    }
}

#[test]
fn batch_render_is_deterministic() {
    let run = || {
        termspin()
            .args(["--model", "torus", "--frames", "3", "--width", "60", "--height", "24"])
            .output()
            .expect("binary runs")
    };
    let a = run();
    let b = run();
    assert!(a.status.success(), "stderr: {}", String::from_utf8_lossy(&a.stderr));
    assert!(!a.stdout.is_empty());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn batch_frames_are_separated_not_terminated() {
    let output = termspin()
        .args(["--frames", "3", "--width", "30", "--height", "10"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // clear-and-home goes between frames only
    assert_eq!(stdout.matches("\u{1b}[2J\u{1b}[H").count(), 2);
    assert!(!stdout.ends_with("\u{1b}[2J\u{1b}[H"));
}

#[test]
fn batch_frame_has_expected_shape() {
    let output = termspin()
        .args(["--model", "sphere", "--frames", "1", "--width", "40", "--height", "16"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 16);
    // rows reset their color at the end, and the solid is actually visible
    assert!(lines.iter().all(|l| l.ends_with("\u{1b}[0m")));
    assert!(stdout.contains("\u{1b}[38;2;"));
    let glyphs: String = stdout.chars().filter(|c| "█▓▒░".contains(*c)).collect();
    assert!(!glyphs.is_empty(), "no shaded glyphs in output");
}

#[test]
fn custom_shade_ramp_is_used() {
    let output = termspin()
        .args(["--frames", "1", "--width", "40", "--height", "16", "--shades", "#+. "])
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('█'));
    assert!(stdout.contains('#') || stdout.contains('+') || stdout.contains('.'));
}

#[test]
fn rejects_single_glyph_ramp() {
    let output = termspin()
        .args(["--shades", "x", "--frames", "1"])
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least 2"), "stderr: {stderr}");
}

#[test]
fn rejects_zero_sized_grid() {
    let output = termspin()
        .args(["--frames", "1", "--width", "0", "--height", "10"])
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
}

#[test]
fn animation_refuses_piped_stdout() {
    // no --frames and a captured (non-tty) stdout: refuse before touching
    // raw mode, leaking no escapes into the pipe
    let output = termspin().output().expect("binary runs");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "stdout: {:?}", String::from_utf8_lossy(&output.stdout));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--frames"), "stderr: {stderr}");
}

#[test]
fn write_options_emits_loadable_ron() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("termspin-cli-opts-{}.ron", std::process::id()));
    let output = termspin()
        .arg("--write-options")
        .arg(&path)
        .output()
        .expect("binary runs");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let text = std::fs::read_to_string(&path).expect("options file written");
    assert!(text.contains("depth_epsilon"));
    assert!(text.contains("\"#e0e0e0\""));

    // a written file round-trips through --options
    let output = termspin()
        .arg("--options")
        .arg(&path)
        .args(["--frames", "1", "--width", "30", "--height", "10"])
        .output()
        .expect("binary runs");
    let _ = std::fs::remove_file(&path);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(!output.stdout.is_empty());
}

#[test]
fn missing_options_file_is_an_error() {
    let output = termspin()
        .args(["--options", "/definitely/not/here.ron", "--frames", "1"])
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load options"), "stderr: {stderr}");
}
