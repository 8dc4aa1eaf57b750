//! Named failure kinds for the conversion pipeline.
//!
//! The policy is fail fast: any of these aborts the whole run with a
//! non-zero exit. A pair whose entities straddle a sentence boundary is not
//! an error; it simply produces an empty context and is filtered out later.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading tables or resolving entity references.
#[derive(Debug, Error)]
pub enum PrepError {
    /// A table file could not be opened or read.
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row did not match the expected column layout for its table.
    #[error("malformed row in {path}")]
    MalformedRow {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A pair referenced an entity number that does not resolve to exactly
    /// one row of the expected kind within its abstract.
    #[error(
        "abstract {abstract_id}: expected exactly one {kind} entity numbered \
         {entity_number}, found {found}"
    )]
    EntityLookup {
        abstract_id: String,
        kind: &'static str,
        entity_number: String,
        found: usize,
    },
}
