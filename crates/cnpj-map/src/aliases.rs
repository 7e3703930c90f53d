//! The shared alias table: canonical column → recognized header variants.
//!
//! One constant, consumed by the resolver, instead of per-call dictionaries.
//! Patterns are stored pre-normalized (see [`crate::normalize_header`]): a
//! pattern matches when it is a substring of the normalized header cell.

use cnpj_model::CanonicalColumn;

/// Alias patterns per canonical column, in resolution priority order.
///
/// The vocabulary covers the header variants observed in circulating
/// contact spreadsheets: Portuguese and shorthand spellings, with accents
/// and separators already folded away. Bare "contato" is deliberately not
/// a Nome alias: under substring matching it would also claim
/// "contatos adicionais" columns, which belong to Notas.
pub const ALIAS_TABLE: &[(CanonicalColumn, &[&str])] = &[
    (CanonicalColumn::Cnpj, &["cnpj", "cnpjlimpo"]),
    (
        CanonicalColumn::RazaoSocial,
        &["razaosocial", "nomeempresa", "empresa"],
    ),
    (CanonicalColumn::Nome, &["nomecontato", "nome"]),
    (CanonicalColumn::Cargo, &["cargo", "posicao", "funcao"]),
    (CanonicalColumn::Email, &["email"]),
    (
        CanonicalColumn::Telefone,
        &["telefonefixo", "telefoneresidencial", "telefone", "tel"],
    ),
    (CanonicalColumn::Celular, &["celular", "whatsapp", "cel"]),
    (
        CanonicalColumn::Notas,
        &["contatosadicionais", "notas", "observacoes", "comentarios"],
    ),
    (
        CanonicalColumn::SetorArea,
        &["setor", "area", "segmento", "segmentacao"],
    ),
];

/// Returns the alias patterns registered for one canonical column.
#[must_use]
pub fn aliases_for(column: CanonicalColumn) -> &'static [&'static str] {
    ALIAS_TABLE
        .iter()
        .find(|(c, _)| *c == column)
        .map(|(_, patterns)| *patterns)
        .unwrap_or(&[])
}
