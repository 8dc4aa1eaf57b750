//! Loaders for the three tab-separated DrugProt annotation tables.
//!
//! All three files are headerless TSV; columns map positionally onto the row
//! structs below. Beyond the column layout there is no validation: unknown
//! entity types load as-is and are simply never paired.

use std::path::Path;

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::info;

use crate::error::PrepError;

/// One document: identifier, title, and free-text body.
#[derive(Debug, Clone, Deserialize)]
pub struct AbstractRow {
    pub abstract_id: String,
    pub title: String,
    pub abstract_text: String,
}

/// One tagged chemical or gene mention.
///
/// Offsets are character offsets into the virtual buffer
/// `title + separator + abstract body` (one separator character).
#[derive(Debug, Clone, Deserialize)]
pub struct EntityRow {
    pub abstract_id: String,
    pub entity_number: String,
    pub entity_type: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub entity_string: String,
}

/// One annotated relation between two entities of the same abstract.
///
/// `arg1`/`arg2` carry the raw `Arg1:`/`Arg2:` prefixes around the
/// abstract-local entity numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationRow {
    pub abstract_id: String,
    pub drug_relation: String,
    pub arg1: String,
    pub arg2: String,
}

/// Load the abstracts table.
pub fn load_abstracts(path: &Path) -> Result<Vec<AbstractRow>, PrepError> {
    let rows: Vec<AbstractRow> = load_table(path)?;
    info!(rows = rows.len(), path = %path.display(), "loaded abstracts");
    Ok(rows)
}

/// Load the entity mentions table.
pub fn load_entities(path: &Path) -> Result<Vec<EntityRow>, PrepError> {
    let rows: Vec<EntityRow> = load_table(path)?;
    info!(rows = rows.len(), path = %path.display(), "loaded entities");
    Ok(rows)
}

/// Load the relation annotations table.
pub fn load_relations(path: &Path) -> Result<Vec<RelationRow>, PrepError> {
    let rows: Vec<RelationRow> = load_table(path)?;
    info!(rows = rows.len(), path = %path.display(), "loaded relations");
    Ok(rows)
}

fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, PrepError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(false)
        .from_path(path)
        .map_err(|source| PrepError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row = result.map_err(|source| PrepError::MalformedRow {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}
