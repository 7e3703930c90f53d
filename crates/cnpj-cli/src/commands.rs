use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use cnpj_cli::pipeline::{build_table, run_query};
use cnpj_map::ALIAS_TABLE;
use cnpj_model::{SHEET_LABEL, SOURCE_LABEL};
use cnpj_report::write_csv;

use crate::cli::{ExportArgs, SearchArgs};
use crate::summary::apply_table_style;
use crate::types::{ExportRunResult, SearchRunResult};

pub fn run_search(args: &SearchArgs) -> Result<SearchRunResult> {
    let output = run_query(&args.source_folder, &args.query)?;
    if let Some(path) = &args.export {
        write_csv(path, &output.matches)
            .with_context(|| format!("export matches to {}", path.display()))?;
        info!(path = %path.display(), records = output.matches.len(), "matches exported");
    }
    Ok(SearchRunResult {
        query: args.query.clone(),
        output,
        export: args.export.clone(),
    })
}

pub fn run_export(args: &ExportArgs) -> Result<ExportRunResult> {
    let table = build_table(&args.source_folder)?;
    write_csv(&args.output, &table.records)
        .with_context(|| format!("export table to {}", args.output.display()))?;
    info!(path = %args.output.display(), records = table.records.len(), "table exported");
    Ok(ExportRunResult {
        records: table.records.len(),
        warnings: table.warnings,
        output: args.output.clone(),
    })
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Coluna", "Apelidos reconhecidos"]);
    apply_table_style(&mut table);
    for (column, patterns) in ALIAS_TABLE {
        table.add_row(vec![column.label().to_string(), patterns.join(", ")]);
    }
    table.add_row(vec![SOURCE_LABEL.to_string(), "(proveniência: arquivo)".to_string()]);
    table.add_row(vec![SHEET_LABEL.to_string(), "(proveniência: aba)".to_string()]);
    println!("{table}");
    Ok(())
}
