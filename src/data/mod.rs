//! Table loading layer for the DrugProt annotation files.

pub mod drugprot;
