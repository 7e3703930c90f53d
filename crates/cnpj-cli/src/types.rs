use std::path::PathBuf;

use cnpj_cli::pipeline::QueryOutput;
use cnpj_model::SourceWarning;

#[derive(Debug)]
pub struct SearchRunResult {
    pub query: String,
    pub output: QueryOutput,
    pub export: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ExportRunResult {
    pub records: usize,
    pub warnings: Vec<SourceWarning>,
    pub output: PathBuf,
}
