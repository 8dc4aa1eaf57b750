//! Conversion pipeline: pair generation, labelling, and balancing.

pub mod context;
pub mod examples;
pub mod pairs;
pub mod relations;

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, instrument};

use crate::data::drugprot::{AbstractRow, EntityRow, RelationRow};
use crate::error::PrepError;
use self::examples::Example;
use self::pairs::EntityPartition;

/// Convert the three loaded tables into flat training examples.
///
/// Abstracts are processed in table order; within one abstract, positive
/// examples come first (relation insertion order), then negatives in pair
/// enumeration order. Negatives are capped at the number of positives
/// actually emitted for that abstract, so a document with no usable positive
/// contributes nothing.
#[instrument(skip_all)]
pub fn convert(
    abstracts: &[AbstractRow],
    entities: &[EntityRow],
    relations: &[RelationRow],
) -> Result<Vec<Example>, PrepError> {
    let entities_by_abstract = group_by_id(entities, |row| row.abstract_id.as_str());
    let relations_by_abstract = group_by_id(relations, |row| row.abstract_id.as_str());

    let mut out = Vec::new();
    for doc in abstracts {
        let doc_entities = entities_by_abstract
            .get(doc.abstract_id.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let doc_relations = relations_by_abstract
            .get(doc.abstract_id.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let before = out.len();
        convert_abstract(doc, doc_entities, doc_relations, &mut out)?;
        debug!(
            abstract_id = %doc.abstract_id,
            emitted = out.len() - before,
            "converted abstract"
        );
    }

    info!(count = out.len(), "assembled training examples");
    Ok(out)
}

fn convert_abstract(
    doc: &AbstractRow,
    doc_entities: &[&EntityRow],
    doc_relations: &[&RelationRow],
    out: &mut Vec<Example>,
) -> Result<(), PrepError> {
    let partition = EntityPartition::from_rows(&doc.abstract_id, doc_entities);
    let entity_pairs = partition.pairs();
    let relation_map = relations::parse_relations(doc_relations.iter().copied());

    // surface strings of every entity that takes part in an annotated relation
    let mut related_strings = HashSet::new();
    for (chem_id, gene_id) in relation_map.keys() {
        related_strings.insert(partition.chemical(chem_id)?.entity_string.clone());
        related_strings.insert(partition.gene(gene_id)?.entity_string.clone());
    }

    // candidate negatives: generated pairs without an annotated relation.
    // Only the gene side is screened against related_strings; a chemical that
    // takes part in a relation can still seed a negative pair.
    let mut negative_pairs = Vec::new();
    for pair in &entity_pairs {
        if relation_map.contains_key(pair) {
            continue;
        }
        let chem_string = &partition.chemical(&pair.0)?.entity_string;
        let gene_string = &partition.gene(&pair.1)?.entity_string;
        if !chem_string.is_empty() && related_strings.contains(gene_string) {
            continue;
        }
        negative_pairs.push(pair.clone());
    }

    // positives, in relation insertion order
    let mut emitted_pos = 0usize;
    let mut last_label: Option<String> = None;
    for ((chem_id, gene_id), label) in &relation_map {
        let chemical = partition.chemical(chem_id)?;
        let gene = partition.gene(gene_id)?;
        let ctx = context::pair_context(chemical, gene, &doc.title, &doc.abstract_text);

        if examples::passes_context_filter(&ctx, &chemical.entity_string, &gene.entity_string) {
            out.push(Example::new(
                &chemical.entity_string,
                &gene.entity_string,
                ctx,
                label,
            ));
            emitted_pos += 1;
            last_label = Some(label.clone());
        }
    }

    // negatives, capped at the emitted positive count; the label string is
    // carried over from the most recently emitted positive
    if let Some(label) = last_label {
        let mut neg_count = 0usize;
        for (chem_id, gene_id) in &negative_pairs {
            if neg_count >= emitted_pos {
                break;
            }
            let chemical = partition.chemical(chem_id)?;
            let gene = partition.gene(gene_id)?;
            let ctx = context::pair_context(chemical, gene, &doc.title, &doc.abstract_text);

            if examples::passes_context_filter(&ctx, &chemical.entity_string, &gene.entity_string)
            {
                out.push(Example::new(
                    &chemical.entity_string,
                    &gene.entity_string,
                    ctx,
                    &label,
                ));
                neg_count += 1;
            }
        }
    }

    Ok(())
}

/// Group table rows by abstract identifier, preserving row order within each
/// group. One pass over each table instead of a rescan per abstract.
fn group_by_id<'a, T, F>(rows: &'a [T], id: F) -> HashMap<&'a str, Vec<&'a T>>
where
    F: Fn(&T) -> &str,
{
    let mut groups: HashMap<&str, Vec<&T>> = HashMap::new();
    for row in rows {
        groups.entry(id(row)).or_default().push(row);
    }
    groups
}
