//! Integration Tests for the CV Download

use std::fs;

use tempfile::TempDir;
use termfolio::config::CvConfig;
use termfolio::download::save_cv;
use termfolio::Error;

fn cv_config(dir: &TempDir) -> CvConfig {
    let source = dir.path().join("CV.pdf");
    fs::write(&source, b"%PDF-1.7 test").unwrap();
    CvConfig {
        source,
        download_name: "Toczek Tomasz - Curriculum Vitae.pdf".to_string(),
        destination: Some(dir.path().join("Downloads")),
    }
}

#[test]
fn test_repeated_downloads_never_overwrite() {
    let dir = TempDir::new().unwrap();
    let config = cv_config(&dir);

    let first = save_cv(&config).unwrap();
    let second = save_cv(&config).unwrap();
    let third = save_cv(&config).unwrap();

    let names: Vec<_> = [&first, &second, &third]
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "Toczek Tomasz - Curriculum Vitae.pdf",
            "Toczek Tomasz - Curriculum Vitae (1).pdf",
            "Toczek Tomasz - Curriculum Vitae (2).pdf",
        ]
    );
    assert_eq!(fs::read(third).unwrap(), b"%PDF-1.7 test");
}

#[test]
fn test_missing_source_reports_resource_error() {
    let dir = TempDir::new().unwrap();
    let mut config = cv_config(&dir);
    config.source = dir.path().join("missing.pdf");

    let err = save_cv(&config).unwrap_err();
    assert!(matches!(err, Error::ResourceNotFound { .. }));
    assert!(!dir.path().join("Downloads").exists());
}
