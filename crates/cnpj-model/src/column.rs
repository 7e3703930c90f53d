//! Canonical column set for the unified contact table.
//!
//! Every input spreadsheet, whatever its header vocabulary, is mapped onto
//! this fixed set of columns. The enum order is the resolution priority
//! order and also the output column order, followed by the two provenance
//! columns (`Planilha`, `Aba`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A target field of the unified contact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalColumn {
    /// Company tax identifier. The search key.
    Cnpj,
    /// Legal company name.
    RazaoSocial,
    /// Contact person name.
    Nome,
    /// Contact role/position.
    Cargo,
    /// Contact e-mail address.
    Email,
    /// Landline phone.
    Telefone,
    /// Mobile phone.
    Celular,
    /// Free-form notes / additional contacts.
    Notas,
    /// Business sector or area.
    SetorArea,
}

impl CanonicalColumn {
    /// All canonical columns in priority (and output) order.
    pub const ALL: [CanonicalColumn; 9] = [
        CanonicalColumn::Cnpj,
        CanonicalColumn::RazaoSocial,
        CanonicalColumn::Nome,
        CanonicalColumn::Cargo,
        CanonicalColumn::Email,
        CanonicalColumn::Telefone,
        CanonicalColumn::Celular,
        CanonicalColumn::Notas,
        CanonicalColumn::SetorArea,
    ];

    /// Display label used for output headers (CSV export, result tables).
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalColumn::Cnpj => "CNPJ",
            CanonicalColumn::RazaoSocial => "Razão Social",
            CanonicalColumn::Nome => "Nome",
            CanonicalColumn::Cargo => "Cargo",
            CanonicalColumn::Email => "E-mail",
            CanonicalColumn::Telefone => "Telefone",
            CanonicalColumn::Celular => "Celular",
            CanonicalColumn::Notas => "Contatos adicionais/Notas",
            CanonicalColumn::SetorArea => "Setor/Área",
        }
    }
}

impl fmt::Display for CanonicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label of the provenance column recording the originating file.
pub const SOURCE_LABEL: &str = "Planilha";

/// Label of the provenance column recording the originating sheet/tab.
pub const SHEET_LABEL: &str = "Aba";

/// Output header row: canonical labels followed by the provenance labels.
#[must_use]
pub fn output_headers() -> Vec<&'static str> {
    let mut headers: Vec<&'static str> = CanonicalColumn::ALL.iter().map(|c| c.label()).collect();
    headers.push(SOURCE_LABEL);
    headers.push(SHEET_LABEL);
    headers
}
