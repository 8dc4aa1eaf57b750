//! Relation annotation parsing for one abstract.

use indexmap::IndexMap;

use crate::data::drugprot::RelationRow;

/// Relation mapping keyed by stripped `(arg1, arg2)` entity numbers, valued
/// with the lowercased relation label. Insertion order is preserved; on a
/// duplicate key the later row's label wins without moving the key.
pub type RelationMap = IndexMap<(String, String), String>;

/// Parse one abstract's relation rows into a [`RelationMap`].
pub fn parse_relations<'a, I>(rows: I) -> RelationMap
where
    I: IntoIterator<Item = &'a RelationRow>,
{
    let mut map = RelationMap::new();
    for row in rows {
        let arg1 = arg_entity_number(&row.arg1, "Arg1:");
        let arg2 = arg_entity_number(&row.arg2, "Arg2:");
        map.insert((arg1, arg2), row.drug_relation.to_lowercase());
    }
    map
}

/// Strip surrounding whitespace and the given `ArgN:` prefix from a raw
/// argument field, leaving the bare entity number.
pub fn arg_entity_number(raw: &str, prefix: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix(prefix).unwrap_or(trimmed).to_string()
}
