//! Training example records and JSONL output.

use std::{fs::File, io::BufWriter, io::Write, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::nlp::sentences::char_len;

/// One flat training example: the paired entity surface strings, their
/// shared sentence context, and the relation label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    pub entities: String,
    pub context: String,
    pub relation: String,
}

impl Example {
    /// Build a record, chemical listed before gene.
    pub fn new(chem_string: &str, gene_string: &str, context: String, relation: &str) -> Self {
        Self {
            entities: format!("{chem_string}, {gene_string}"),
            context,
            relation: relation.to_string(),
        }
    }
}

/// Crude non-empty-context filter: the sentence must be strictly longer than
/// the two entity surface strings combined. An empty context never passes.
pub fn passes_context_filter(context: &str, chem_string: &str, gene_string: &str) -> bool {
    char_len(context) > char_len(chem_string) + char_len(gene_string)
}

/// Write examples as newline-delimited JSON, one object per line.
pub fn write_jsonl(path: &Path, examples: &[Example]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for example in examples {
        serde_json::to_writer(&mut writer, example)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    info!(rows = examples.len(), path = %path.display(), "wrote training examples");
    Ok(())
}
