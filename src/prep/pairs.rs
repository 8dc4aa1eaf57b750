//! Chemical-gene pair enumeration for one abstract.

use crate::data::drugprot::EntityRow;
use crate::error::PrepError;

/// Gene subtypes merged into the gene side of a pair, in pairing order.
const GENE_TYPES: &[&str] = &["GENE-Y", "GENE-N", "GENE"];

/// One abstract's entities split into the two pairable kinds.
///
/// Chemicals keep their table row order. Genes merge the three subtypes,
/// `GENE-Y` rows first, then `GENE-N`, then `GENE`, each in row order, so
/// pair enumeration is deterministic.
#[derive(Debug, Clone)]
pub struct EntityPartition {
    abstract_id: String,
    chemicals: Vec<EntityRow>,
    genes: Vec<EntityRow>,
}

impl EntityPartition {
    /// Partition one abstract's entity rows. Entity types outside the
    /// chemical/gene vocabulary are dropped.
    pub fn from_rows(abstract_id: &str, rows: &[&EntityRow]) -> Self {
        let chemicals = rows
            .iter()
            .filter(|row| row.entity_type == "CHEMICAL")
            .map(|row| (*row).clone())
            .collect();

        let mut genes: Vec<EntityRow> = Vec::new();
        for gene_type in GENE_TYPES {
            genes.extend(
                rows.iter()
                    .filter(|row| row.entity_type == *gene_type)
                    .map(|row| (*row).clone()),
            );
        }

        Self {
            abstract_id: abstract_id.to_string(),
            chemicals,
            genes,
        }
    }

    /// Full cross-product of chemical x gene entity numbers, chemical first.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.chemicals.len() * self.genes.len());
        for chemical in &self.chemicals {
            for gene in &self.genes {
                pairs.push((chemical.entity_number.clone(), gene.entity_number.clone()));
            }
        }
        pairs
    }

    /// Resolve a chemical entity by number.
    pub fn chemical(&self, entity_number: &str) -> Result<&EntityRow, PrepError> {
        self.exactly_one(&self.chemicals, entity_number, "chemical")
    }

    /// Resolve a gene entity by number, across the merged subtypes.
    pub fn gene(&self, entity_number: &str) -> Result<&EntityRow, PrepError> {
        self.exactly_one(&self.genes, entity_number, "gene")
    }

    fn exactly_one<'a>(
        &self,
        rows: &'a [EntityRow],
        entity_number: &str,
        kind: &'static str,
    ) -> Result<&'a EntityRow, PrepError> {
        let matches: Vec<&EntityRow> = rows
            .iter()
            .filter(|row| row.entity_number == entity_number)
            .collect();
        if matches.len() == 1 {
            Ok(matches[0])
        } else {
            Err(PrepError::EntityLookup {
                abstract_id: self.abstract_id.clone(),
                kind,
                entity_number: entity_number.to_string(),
                found: matches.len(),
            })
        }
    }
}
