#![deny(unsafe_code)]

//! CSV export of unified contact records.
//!
//! Output uses the fixed canonical column order with display-label headers
//! and is UTF-8 encoded with a leading BOM so spreadsheet tools pick the
//! right decoder for accented text.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use cnpj_model::{UnifiedRecord, output_headers};

/// UTF-8 byte-order mark.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Writes records to a CSV file at `path`.
pub fn write_csv(path: &Path, records: &[UnifiedRecord]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create export file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(UTF8_BOM).context("write BOM")?;
    write_csv_to(&mut writer, records)?;
    writer.flush().context("flush export file")?;
    Ok(())
}

/// Writes records as CSV to any writer (no BOM; see [`write_csv`]).
pub fn write_csv_to<W: Write>(writer: W, records: &[UnifiedRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(output_headers())
        .context("write header row")?;
    for record in records {
        csv_writer
            .write_record(record.output_row())
            .context("write record row")?;
    }
    csv_writer.flush().context("flush csv writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<UnifiedRecord> {
        vec![
            UnifiedRecord {
                cnpj: "12.345.678/0001-99".to_string(),
                razao_social: "Empresa X".to_string(),
                nome: "Ana".to_string(),
                email: "a@x.com".to_string(),
                source: "planilha_a.xlsx".to_string(),
                sheet: "Contatos".to_string(),
                ..UnifiedRecord::default()
            },
            UnifiedRecord {
                cnpj: "12345678000199".to_string(),
                nome: "Bia".to_string(),
                notas: "prefere contato, por e-mail".to_string(),
                source: "planilha_b.csv".to_string(),
                sheet: "-".to_string(),
                ..UnifiedRecord::default()
            },
        ]
    }

    #[test]
    fn export_shape_is_stable() {
        let mut buffer = Vec::new();
        write_csv_to(&mut buffer, &sample_records()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        insta::assert_snapshot!(text, @r#"
        CNPJ,Razão Social,Nome,Cargo,E-mail,Telefone,Celular,Contatos adicionais/Notas,Setor/Área,Planilha,Aba
        12.345.678/0001-99,Empresa X,Ana,,a@x.com,,,,,planilha_a.xlsx,Contatos
        12345678000199,,Bia,,,,,"prefere contato, por e-mail",,planilha_b.csv,-
        "#);
    }

    #[test]
    fn file_export_starts_with_bom() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("contatos.csv");
        write_csv(&path, &sample_records()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert!(text.starts_with("CNPJ,Razão Social,"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn empty_export_still_carries_header() {
        let mut buffer = Vec::new();
        write_csv_to(&mut buffer, &[]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text.trim_end(),
            "CNPJ,Razão Social,Nome,Cargo,E-mail,Telefone,Celular,Contatos adicionais/Notas,Setor/Área,Planilha,Aba",
        );
    }
}
