use serde::{Deserialize, Serialize};

use crate::column::CanonicalColumn;

/// One raw table as produced by a source loader: a sheet of text cells with
/// an ordered header row and provenance labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    /// Name of the originating file or archive entry.
    pub source_name: String,
    /// Sheet/tab label within the source (`"-"` for single-table formats).
    pub sheet_name: String,
    /// Ordered header row.
    pub headers: Vec<String>,
    /// Data rows of raw text cells.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(
        source_name: impl Into<String>,
        sheet_name: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            sheet_name: sheet_name.into(),
            headers,
            rows,
        }
    }

    /// True when the table carries no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One row of the unified contact table: one value per canonical column
/// (empty string when the source had no matching column) plus provenance.
///
/// Records are immutable after aggregation; they live in memory for one
/// query cycle or inside the bounded-TTL cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedRecord {
    pub cnpj: String,
    pub razao_social: String,
    pub nome: String,
    pub cargo: String,
    pub email: String,
    pub telefone: String,
    pub celular: String,
    pub notas: String,
    pub setor_area: String,
    /// Originating file name.
    pub source: String,
    /// Originating sheet/tab label.
    pub sheet: String,
}

impl UnifiedRecord {
    /// Returns the value of a canonical column.
    #[must_use]
    pub fn get(&self, column: CanonicalColumn) -> &str {
        match column {
            CanonicalColumn::Cnpj => &self.cnpj,
            CanonicalColumn::RazaoSocial => &self.razao_social,
            CanonicalColumn::Nome => &self.nome,
            CanonicalColumn::Cargo => &self.cargo,
            CanonicalColumn::Email => &self.email,
            CanonicalColumn::Telefone => &self.telefone,
            CanonicalColumn::Celular => &self.celular,
            CanonicalColumn::Notas => &self.notas,
            CanonicalColumn::SetorArea => &self.setor_area,
        }
    }

    /// Sets the value of a canonical column.
    pub fn set(&mut self, column: CanonicalColumn, value: impl Into<String>) {
        let slot = match column {
            CanonicalColumn::Cnpj => &mut self.cnpj,
            CanonicalColumn::RazaoSocial => &mut self.razao_social,
            CanonicalColumn::Nome => &mut self.nome,
            CanonicalColumn::Cargo => &mut self.cargo,
            CanonicalColumn::Email => &mut self.email,
            CanonicalColumn::Telefone => &mut self.telefone,
            CanonicalColumn::Celular => &mut self.celular,
            CanonicalColumn::Notas => &mut self.notas,
            CanonicalColumn::SetorArea => &mut self.setor_area,
        };
        *slot = value.into();
    }

    /// True when every canonical field is empty (provenance ignored).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        CanonicalColumn::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    /// Cell values in output order: canonical columns then provenance.
    #[must_use]
    pub fn output_row(&self) -> Vec<&str> {
        let mut row: Vec<&str> = CanonicalColumn::ALL.iter().map(|c| self.get(*c)).collect();
        row.push(&self.source);
        row.push(&self.sheet);
        row
    }
}
