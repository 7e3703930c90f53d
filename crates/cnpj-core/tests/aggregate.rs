use cnpj_core::aggregate;
use cnpj_model::{CanonicalColumn, RawTable};

fn table(source: &str, sheet: &str, headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        source,
        sheet,
        headers.iter().map(|h| (*h).to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|c| (*c).to_string()).collect())
            .collect(),
    )
}

#[test]
fn maps_variant_headers_onto_canonical_columns() {
    let tables = vec![
        table(
            "planilha_a.xlsx",
            "Aba 1",
            &["CNPJ", "Nome", "email"],
            &[&["12.345.678/0001-99", "Ana", "a@x.com"]],
        ),
        table(
            "planilha_b.csv",
            "-",
            &["cnpj_limpo", "NOME", "E-MAIL"],
            &[&["12345678000199", "Bia", "b@x.com"]],
        ),
    ];
    let aggregation = aggregate(&tables);
    assert_eq!(aggregation.len(), 2);
    assert!(aggregation.warnings.is_empty());

    let ana = &aggregation.records[0];
    assert_eq!(ana.cnpj, "12.345.678/0001-99");
    assert_eq!(ana.nome, "Ana");
    assert_eq!(ana.email, "a@x.com");
    assert_eq!(ana.telefone, "");
    assert_eq!(ana.celular, "");
    assert_eq!(ana.cargo, "");
    assert_eq!(ana.setor_area, "");
    assert_eq!(ana.source, "planilha_a.xlsx");
    assert_eq!(ana.sheet, "Aba 1");

    let bia = &aggregation.records[1];
    assert_eq!(bia.cnpj, "12345678000199");
    assert_eq!(bia.nome, "Bia");
    assert_eq!(bia.email, "b@x.com");
    assert_eq!(bia.source, "planilha_b.csv");
}

#[test]
fn preserves_table_and_row_order() {
    let tables = vec![
        table("b.csv", "-", &["CNPJ", "Nome"], &[
            &["1", "primeiro"],
            &["2", "segundo"],
        ]),
        table("a.csv", "-", &["CNPJ", "Nome"], &[&["3", "terceiro"]]),
    ];
    let aggregation = aggregate(&tables);
    let nomes: Vec<&str> = aggregation
        .records
        .iter()
        .map(|r| r.nome.as_str())
        .collect();
    assert_eq!(nomes, ["primeiro", "segundo", "terceiro"]);
}

#[test]
fn non_blank_row_count_is_preserved() {
    let tables = vec![
        table("a.csv", "-", &["CNPJ", "Nome"], &[
            &["11111111000111", "Ana"],
            &["", ""],
            &["22222222000122", "Bia"],
            &["  ", "  "],
        ]),
        table("b.csv", "-", &["cnpj", "contato_nome"], &[
            &["33333333000133", "Carla"],
        ]),
    ];
    let aggregation = aggregate(&tables);
    // 3 non-blank rows in, 3 records out; blank rows dropped silently.
    assert_eq!(aggregation.len(), 3);
    assert!(aggregation.warnings.is_empty());
}

#[test]
fn ragged_rows_are_dropped_with_warning() {
    let tables = vec![table(
        "torta.csv",
        "-",
        &["CNPJ", "Nome", "email"],
        &[
            &["11111111000111", "Ana", "a@x.com"],
            &["22222222000122", "Bia"],
            &["33333333000133", "Carla", "c@x.com", "extra"],
        ],
    )];
    let aggregation = aggregate(&tables);
    assert_eq!(aggregation.len(), 1);
    assert_eq!(aggregation.records[0].nome, "Ana");
    assert_eq!(aggregation.warnings.len(), 1);
    assert_eq!(aggregation.warnings[0].origin, "torta.csv");
    assert!(aggregation.warnings[0].message.contains("2 row(s)"));
}

/// One unusable table out of three: records from the two good tables are
/// returned alongside a warning naming the bad one. Never an empty result,
/// never a panic.
#[test]
fn partial_failure_is_isolated() {
    let tables = vec![
        table("boa_1.csv", "-", &["CNPJ", "Nome"], &[&["1", "Ana"]]),
        table("ruim.csv", "-", &["col_a", "col_b"], &[&["x", "y"]]),
        table("boa_2.csv", "-", &["CNPJ", "Nome"], &[&["2", "Bia"]]),
    ];
    let aggregation = aggregate(&tables);
    assert_eq!(aggregation.len(), 2);
    assert_eq!(aggregation.warnings.len(), 1);
    assert_eq!(aggregation.warnings[0].origin, "ruim.csv");
}

#[test]
fn table_without_key_column_still_contributes_rows() {
    let tables = vec![table(
        "sem_cnpj.csv",
        "-",
        &["Nome", "E-mail"],
        &[&["Ana", "a@x.com"]],
    )];
    let aggregation = aggregate(&tables);
    assert_eq!(aggregation.len(), 1);
    assert_eq!(aggregation.records[0].cnpj, "");
    assert_eq!(aggregation.records[0].nome, "Ana");
}

#[test]
fn empty_tables_contribute_nothing() {
    let tables = vec![
        table("vazia.csv", "-", &["CNPJ", "Nome"], &[]),
        table("cheia.csv", "-", &["CNPJ", "Nome"], &[&["1", "Ana"]]),
    ];
    let aggregation = aggregate(&tables);
    assert_eq!(aggregation.len(), 1);
    assert!(aggregation.warnings.is_empty());
}

#[test]
fn cells_are_trimmed() {
    let tables = vec![table(
        "espacos.csv",
        "-",
        &["CNPJ", "Nome"],
        &[&["  12345678000199  ", "  Ana  "]],
    )];
    let aggregation = aggregate(&tables);
    assert_eq!(aggregation.records[0].cnpj, "12345678000199");
    assert_eq!(aggregation.records[0].nome, "Ana");
}

#[test]
fn sheet_name_appears_in_warning_origin() {
    let tables = vec![table(
        "pasta.xlsx",
        "Aba 2",
        &["sem", "correspondencia"],
        &[&["x", "y"]],
    )];
    let aggregation = aggregate(&tables);
    assert!(aggregation.is_empty());
    assert_eq!(aggregation.warnings[0].origin, "pasta.xlsx (Aba 2)");
}

#[test]
fn unused_canonical_columns_stay_empty() {
    let tables = vec![table(
        "minima.csv",
        "-",
        &["cnpj"],
        &[&["12345678000199"]],
    )];
    let aggregation = aggregate(&tables);
    let record = &aggregation.records[0];
    for column in CanonicalColumn::ALL {
        if column == CanonicalColumn::Cnpj {
            assert_eq!(record.get(column), "12345678000199");
        } else {
            assert_eq!(record.get(column), "");
        }
    }
}
