use drugprot_prep::data::drugprot::{AbstractRow, EntityRow, RelationRow};
use drugprot_prep::prep::convert;

fn doc() -> AbstractRow {
    AbstractRow {
        abstract_id: "10".into(),
        title: "Chemical interactions.".into(),
        abstract_text: "Aspirin inhibits COX1 strongly. Ibuprofen reduced PTGS2 expression."
            .into(),
    }
}

fn entity(number: &str, kind: &str, start: usize, end: usize, text: &str) -> EntityRow {
    EntityRow {
        abstract_id: "10".into(),
        entity_number: number.into(),
        entity_type: kind.into(),
        start_offset: start,
        end_offset: end,
        entity_string: text.into(),
    }
}

fn entities() -> Vec<EntityRow> {
    vec![
        entity("T1", "CHEMICAL", 23, 30, "Aspirin"),
        entity("T2", "GENE-Y", 40, 44, "COX1"),
        entity("T3", "CHEMICAL", 55, 64, "Ibuprofen"),
        entity("T4", "GENE", 73, 78, "PTGS2"),
    ]
}

#[test]
fn positive_then_balanced_negative() {
    let abstracts = vec![doc()];
    let entities = entities();
    let relations = vec![RelationRow {
        abstract_id: "10".into(),
        drug_relation: "INHIBITOR".into(),
        arg1: "Arg1:T1".into(),
        arg2: "Arg2:T2".into(),
    }];

    let examples = convert(&abstracts, &entities, &relations).unwrap();
    assert_eq!(examples.len(), 2);

    // positive first
    assert_eq!(examples[0].entities, "Aspirin, COX1");
    assert_eq!(examples[0].context, "Aspirin inhibits COX1 strongly.");
    assert_eq!(examples[0].relation, "inhibitor");

    // one negative, capped by the single positive; the (Ibuprofen, COX1)
    // pair is excluded because COX1 takes part in a relation, and the
    // (Aspirin, PTGS2) pair spans two sentences so it has no context
    assert_eq!(examples[1].entities, "Ibuprofen, PTGS2");
    assert_eq!(examples[1].context, "Ibuprofen reduced PTGS2 expression.");
    assert_eq!(examples[1].relation, "inhibitor");
}

#[test]
fn no_relations_means_no_examples() {
    let abstracts = vec![doc()];
    let entities = entities();

    let examples = convert(&abstracts, &entities, &[]).unwrap();
    assert!(examples.is_empty());
}

#[test]
fn contexts_are_verbatim_substrings() {
    let abstracts = vec![doc()];
    let entities = entities();
    let relations = vec![RelationRow {
        abstract_id: "10".into(),
        drug_relation: "INHIBITOR".into(),
        arg1: "Arg1:T1".into(),
        arg2: "Arg2:T2".into(),
    }];

    let examples = convert(&abstracts, &entities, &relations).unwrap();
    assert!(!examples.is_empty());
    for example in &examples {
        assert!(abstracts[0].abstract_text.contains(&example.context));
    }
}

#[test]
fn relation_against_missing_entity_fails_fast() {
    let abstracts = vec![doc()];
    let entities = entities();
    let relations = vec![RelationRow {
        abstract_id: "10".into(),
        drug_relation: "INHIBITOR".into(),
        arg1: "Arg1:T9".into(),
        arg2: "Arg2:T2".into(),
    }];

    let err = convert(&abstracts, &entities, &relations).unwrap_err();
    assert!(err.to_string().contains("T9"));
}
