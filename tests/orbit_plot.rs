use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn orbit_plot_renders_png_from_exported_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("path.csv");
    let png_path = dir.path().join("plots/orbit.png");

    Command::cargo_bin("orbit")
        .expect("orbit bin")
        .args([
            "--catalog",
            "data/observations.yaml",
            "--path-csv",
            csv_path.to_str().unwrap(),
            "--segments",
            "64",
        ])
        .assert()
        .success();

    Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            png_path.to_str().unwrap(),
            "--width",
            "320",
            "--height",
            "320",
            "--risk",
            "high",
            "--no-labels",
        ])
        .assert()
        .success();

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}

#[test]
fn orbit_plot_rejects_csv_without_coordinates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("bad.csv");
    fs::write(&csv_path, "index,a,b\n0,1,2\n1,3,4\n").unwrap();

    Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            dir.path().join("bad.png").to_str().unwrap(),
            "--no-labels",
        ])
        .assert()
        .failure();
}

#[test]
fn orbit_plot_logs_the_written_image() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("square.csv");
    let png_path = dir.path().join("square.png");
    fs::write(&csv_path, "index,x,y,z\n0,5,0,0\n1,0,5,0\n2,-5,0,0\n3,5,0,0\n").unwrap();

    Command::cargo_bin("orbit_plot")
        .expect("orbit_plot bin")
        .env("RUST_LOG", "info")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            png_path.to_str().unwrap(),
            "--width",
            "200",
            "--height",
            "200",
            "--no-labels",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote orbit plot"));
    assert!(png_path.exists());
}
