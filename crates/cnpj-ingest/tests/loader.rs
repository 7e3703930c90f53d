use std::io::Write;
use std::path::Path;

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use cnpj_ingest::{IngestError, discover_sources, load_sources};

fn write_file(dir: &Path, name: &str, contents: &[u8]) {
    std::fs::write(dir.join(name), contents).unwrap();
}

fn write_zip(dir: &Path, name: &str, entries: &[(&str, &[u8])]) {
    let file = std::fs::File::create(dir.join(name)).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    for (entry_name, contents) in entries {
        writer
            .start_file(*entry_name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn missing_directory_is_fatal() {
    let error = load_sources(Path::new("/nonexistent/contatos")).unwrap_err();
    assert!(matches!(error, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn discovery_is_sorted_by_file_name() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "b.csv", b"CNPJ\n1\n");
    write_file(dir.path(), "a.csv", b"CNPJ\n2\n");
    write_file(dir.path(), "ignorado.txt", b"nada");

    let sources = discover_sources(dir.path()).unwrap();
    let names: Vec<String> = sources.iter().map(|s| s.name()).collect();
    assert_eq!(names, ["a.csv", "b.csv"]);
}

#[test]
fn loads_csv_files_in_order() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "b.csv", b"CNPJ,Nome\n2,Bia\n");
    write_file(dir.path(), "a.csv", b"CNPJ,Nome\n1,Ana\n");

    let outcome = load_sources(dir.path()).unwrap();
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.tables.len(), 2);
    assert_eq!(outcome.tables[0].source_name, "a.csv");
    assert_eq!(outcome.tables[0].rows[0], ["1", "Ana"]);
    assert_eq!(outcome.tables[1].source_name, "b.csv");
}

/// One broken file among good ones: the good ones load, the broken one
/// becomes a warning, the run never aborts.
#[test]
fn unreadable_file_is_skipped_with_warning() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "boa.csv", b"CNPJ,Nome\n1,Ana\n");
    write_file(dir.path(), "quebrada.xlsx", b"isto nao e um workbook");

    let outcome = load_sources(dir.path()).unwrap();
    assert_eq!(outcome.tables.len(), 1);
    assert_eq!(outcome.tables[0].source_name, "boa.csv");
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].origin, "quebrada.xlsx");
}

#[test]
fn archive_entries_are_loaded_with_prefixed_provenance() {
    let dir = TempDir::new().unwrap();
    write_zip(
        dir.path(),
        "upload.zip",
        &[
            ("contatos.csv", b"CNPJ,Nome\n1,Ana\n" as &[u8]),
            ("leiame.txt", b"ignorado"),
        ],
    );

    let outcome = load_sources(dir.path()).unwrap();
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.tables.len(), 1);
    assert_eq!(outcome.tables[0].source_name, "upload.zip/contatos.csv");
    assert_eq!(outcome.tables[0].sheet_name, "-");
}

#[test]
fn broken_archive_entry_is_skipped_with_warning() {
    let dir = TempDir::new().unwrap();
    write_zip(
        dir.path(),
        "upload.zip",
        &[
            ("boa.csv", b"CNPJ,Nome\n1,Ana\n" as &[u8]),
            ("ruim.xlsx", b"lixo"),
        ],
    );

    let outcome = load_sources(dir.path()).unwrap();
    assert_eq!(outcome.tables.len(), 1);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].origin, "upload.zip/ruim.xlsx");
}

#[test]
fn empty_directory_loads_nothing() {
    let dir = TempDir::new().unwrap();
    let outcome = load_sources(dir.path()).unwrap();
    assert!(outcome.tables.is_empty());
    assert!(outcome.warnings.is_empty());
}
