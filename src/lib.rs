//! Library surface for the DrugProt training-data converter.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod nlp;
pub mod prep;
