use drugprot_prep::data::drugprot::EntityRow;
use drugprot_prep::prep::context::pair_context;

fn entity(number: &str, kind: &str, start: usize, end: usize, text: &str) -> EntityRow {
    EntityRow {
        abstract_id: "1".into(),
        entity_number: number.into(),
        entity_type: kind.into(),
        start_offset: start,
        end_offset: end,
        entity_string: text.into(),
    }
}

#[test]
fn pair_spanning_two_sentences_has_no_context() {
    let title = "Aspirin blocks COX1.";
    let body = "Patients took aspirin. COX1 activity decreased significantly.";
    // offsets count from the start of "title + separator + body"
    let chemical = entity("T1", "CHEMICAL", 35, 42, "aspirin");
    let gene = entity("T2", "GENE-Y", 44, 48, "COX1");

    assert_eq!(pair_context(&chemical, &gene, title, body), "");
}

#[test]
fn pair_inside_one_sentence_returns_that_sentence() {
    let title = "A study.";
    let body = "Drug X inhibits Protein Y directly.";
    let chemical = entity("T1", "CHEMICAL", 9, 15, "Drug X");
    let gene = entity("T2", "GENE", 25, 34, "Protein Y");

    assert_eq!(
        pair_context(&chemical, &gene, title, body),
        "Drug X inhibits Protein Y directly."
    );
}

#[test]
fn second_sentence_can_be_the_context() {
    let title = "Chemical interactions.";
    let body = "Aspirin inhibits COX1 strongly. Ibuprofen reduced PTGS2 expression.";
    let chemical = entity("T3", "CHEMICAL", 55, 64, "Ibuprofen");
    let gene = entity("T4", "GENE", 73, 78, "PTGS2");

    assert_eq!(
        pair_context(&chemical, &gene, title, body),
        "Ibuprofen reduced PTGS2 expression."
    );
}

#[test]
fn entity_tagged_in_the_title_has_no_context() {
    let title = "Aspirin blocks COX1.";
    let body = "Patients took aspirin.";
    // "Aspirin" sits inside the title, before the separator
    let chemical = entity("T1", "CHEMICAL", 0, 7, "Aspirin");
    let gene = entity("T2", "GENE", 15, 19, "COX1");

    assert_eq!(pair_context(&chemical, &gene, title, body), "");
}
