//! Command-line interface for drugprot-prep.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, instrument};

use crate::{config::Settings, data::drugprot, prep};

/// Top-level CLI definition. All flags default to the fixed DrugProt
/// training filenames, so a bare invocation converts in place.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Convert DrugProt annotations into JSONL training examples",
    long_about = None
)]
pub struct Cli {
    /// Reserved for emitting evaluation splits; currently has no effect.
    #[arg(long)]
    pub for_eval: bool,

    /// Tab-separated abstracts table: abstract_id, title, abstract.
    #[arg(long, default_value = "drugprot_training_abstracs.tsv")]
    pub abstracs: PathBuf,

    /// Tab-separated entities table: abstract_id, entity_number,
    /// entity_type, start_offset, end_offset, entity_string.
    #[arg(long, default_value = "drugprot_training_entities.tsv")]
    pub entities: PathBuf,

    /// Tab-separated relations table: abstract_id, drug_relation, arg1, arg2.
    #[arg(long, default_value = "drugprot_training_relations.tsv")]
    pub relations: PathBuf,

    /// Output file, newline-delimited JSON.
    #[arg(long, default_value = "relation_extraction_training_data.jsonl")]
    pub save_path: PathBuf,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Run the conversion end to end.
    #[instrument(skip_all)]
    pub fn dispatch(self, settings: Settings) -> Result<()> {
        let abstracts = drugprot::load_abstracts(&settings.join_data(&self.abstracs))?;
        let entities = drugprot::load_entities(&settings.join_data(&self.entities))?;
        let relations = drugprot::load_relations(&settings.join_data(&self.relations))?;

        let examples = prep::convert(&abstracts, &entities, &relations)?;

        let save_path = settings.join_output(&self.save_path);
        prep::examples::write_jsonl(&save_path, &examples)?;
        info!(examples = examples.len(), path = %save_path.display(), "conversion finished");
        Ok(())
    }
}
