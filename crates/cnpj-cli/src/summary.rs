use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, ContentArrangement, Table};

use cnpj_model::output_headers;

use crate::types::{ExportRunResult, SearchRunResult};

pub fn print_search_summary(result: &SearchRunResult) {
    println!("Consulta: {}", result.query);
    println!(
        "Fontes: {} tabela(s), {} registro(s) agregados",
        result.output.tables_loaded, result.output.records_total
    );

    if result.output.matches.is_empty() {
        println!("Nenhum contato encontrado.");
    } else {
        println!("{} contato(s) encontrado(s):", result.output.matches.len());
        let mut table = Table::new();
        table.set_header(output_headers().into_iter().map(Cell::new));
        apply_table_style(&mut table);
        for record in &result.output.matches {
            table.add_row(record.output_row());
        }
        println!("{table}");
    }

    if let Some(path) = &result.export {
        println!("Resultado exportado para: {}", path.display());
    }

    print_warnings(&result.output.warnings);
}

pub fn print_export_summary(result: &ExportRunResult) {
    println!(
        "{} registro(s) exportados para: {}",
        result.records,
        result.output.display()
    );
    print_warnings(&result.warnings);
}

fn print_warnings(warnings: &[cnpj_model::SourceWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("Avisos ({}):", warnings.len());
    for warning in warnings {
        println!("  - {warning}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
