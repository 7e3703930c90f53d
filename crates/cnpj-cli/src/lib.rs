//! Library components for the CNPJ search CLI.

pub mod logging;
pub mod pipeline;
