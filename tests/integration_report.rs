// tests/integration_report.rs
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use logreport_core::cli::ReportMode;
use logreport_core::engine::Engine;
use logreport_core::error::ReportError;
use logreport_core::reporting;
use logreport_core::scanner;

fn request_line(level: &str, handler: &str) -> String {
    format!("2025-03-28 12:44:46,000 {level} django.request: GET {handler} 204 OK")
}

fn write_log(dir: &TempDir, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn engine() -> Engine {
    Engine::new(ReportMode::Handlers)
}

#[test]
fn test_single_file_scenario() {
    let dir = TempDir::new().unwrap();
    let mut lines = Vec::new();
    for _ in 0..5 {
        lines.push(request_line("INFO", "/api/v1/reviews/"));
    }
    for _ in 0..6 {
        lines.push(request_line("INFO", "/admin/dashboard/"));
    }
    for _ in 0..2 {
        lines.push(request_line("ERROR", "/admin/dashboard/"));
    }
    // Noise the marker filter must drop.
    lines.push("2025-03-28 12:44:47,000 DEBUG django.db.backends: (0.41) SELECT".to_string());

    let path = write_log(&dir, "app1.log", &lines);
    let report = engine().scan(&[path]).unwrap();

    assert_eq!(report.handlers.get("/api/v1/reviews/").unwrap().info, 5);
    let dash = report.handlers.get("/admin/dashboard/").unwrap();
    assert_eq!(dash.info, 6);
    assert_eq!(dash.error, 2);
    let total = report.handlers.get("total").unwrap();
    assert_eq!(total.info, 11);
    assert_eq!(total.error, 2);
    assert_eq!(report.total_requests, 11);
}

#[test]
fn test_three_files_merge_to_188() {
    let dir = TempDir::new().unwrap();
    let app1: Vec<String> = (0..60).map(|_| request_line("INFO", "/api/v1/reviews/")).collect();
    let app2: Vec<String> = (0..62).map(|_| request_line("ERROR", "/admin/dashboard/")).collect();
    let app3: Vec<String> = (0..66)
        .map(|i| {
            if i < 30 {
                request_line("INFO", "/api/v1/reviews/")
            } else {
                request_line("WARNING", "/api/v1/cart/")
            }
        })
        .collect();

    let paths = vec![
        write_log(&dir, "app1.log", &app1),
        write_log(&dir, "app2.log", &app2),
        write_log(&dir, "app3.log", &app3),
    ];
    let report = engine().scan(&paths).unwrap();

    assert_eq!(report.total_requests, 188);
    assert_eq!(report.handlers.get("/api/v1/reviews/").unwrap().info, 90);
    assert_eq!(report.handlers.get("/admin/dashboard/").unwrap().error, 62);
    assert_eq!(report.handlers.get("/api/v1/cart/").unwrap().warning, 36);
    let total = report.handlers.get("total").unwrap();
    assert_eq!(total.sum(), 188);
}

#[test]
fn test_missing_file_fails_whole_report_regardless_of_position() {
    let dir = TempDir::new().unwrap();
    let good = write_log(&dir, "good.log", &[request_line("INFO", "/api/v1/users/")]);
    let missing = dir.path().join("abracadabra.log");

    for paths in [
        vec![missing.clone(), good.clone()],
        vec![good.clone(), missing.clone()],
    ] {
        let err = engine().scan(&paths).unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound { .. }));
        assert_eq!(
            err.to_string(),
            format!("File with path {} not found", missing.display())
        );
    }
}

#[test]
fn test_marker_free_file_yields_zero_totals() {
    let dir = TempDir::new().unwrap();
    let path = write_log(
        &dir,
        "quiet.log",
        &["2025-03-28 12:44:46,000 INFO django.db.backends: (0.12) SELECT".to_string()],
    );

    let scan = scanner::scan_file(&path, "django.request").unwrap();
    assert_eq!(scan.matches, 0);
    assert_eq!(scan.stats.len(), 1);
    assert_eq!(scan.stats.get("total").unwrap().sum(), 0);
}

#[test]
fn test_empty_file_list_is_a_noop() {
    let report = engine().scan(&[]).unwrap();
    assert!(report.handlers.is_empty());
    assert_eq!(report.total_requests, 0);
}

#[test]
fn test_malformed_marker_line_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_log(
        &dir,
        "bad.log",
        &["2025-03-28 12:44:46,000 django.request: GET /api/v1/orders/ 200".to_string()],
    );

    let err = engine().scan(&[path]).unwrap_err();
    assert!(matches!(err, ReportError::NoLevel { .. }));
}

#[test]
fn test_console_format() {
    let dir = TempDir::new().unwrap();
    let path = write_log(
        &dir,
        "app.log",
        &[
            request_line("INFO", "/api/v1/reviews/"),
            request_line("ERROR", "/admin/dashboard/"),
        ],
    );
    let report = engine().scan(&[path]).unwrap();
    let out = reporting::format_report(&report);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Total requests: 2");
    assert_eq!(lines[1], "");
    assert!(lines[2].starts_with("HANDLER"));
    assert!(lines[2].contains("DEBUG") && lines[2].contains("CRITICAL"));

    // Lexicographic row order, total row last with an empty label.
    assert!(lines[3].starts_with("/admin/dashboard/"));
    assert!(lines[4].starts_with("/api/v1/reviews/"));
    assert!(lines[5].starts_with(' '));
    assert!(!out.contains("total"));

    // Fixed-width columns: handler 25 wide, counts 10 wide, left-aligned.
    assert_eq!(&lines[2][..25], "HANDLER                  ");
    assert_eq!(&lines[2][25..35], "DEBUG     ");
    assert_eq!(&lines[4][25..35], "0         ");
    assert_eq!(&lines[4][35..45], "1         ");
}
