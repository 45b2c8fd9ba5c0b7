use gedmap::{CommuneRow, Gazetteer, normalize, split_place_text};

/// Create a test correspondence row
fn row(postal: &str, name: &str, insee: &str) -> CommuneRow {
    CommuneRow {
        postal_code: postal.to_string(),
        nom_comm: name.to_string(),
        insee_com: insee.to_string(),
    }
}

#[test]
fn slash_joined_postal_codes_expand_to_separate_entries() {
    let gazetteer = Gazetteer::from_rows(vec![row("75001/75002", "Paris", "75056")]);

    assert_eq!(gazetteer.len(), 2);
    assert_eq!(gazetteer.resolve("75001", "Paris"), Some("75056"));
    assert_eq!(gazetteer.resolve("75002", "PARIS"), Some("75056"));
}

#[test]
fn resolution_is_case_and_diacritic_insensitive() {
    let gazetteer = Gazetteer::from_rows(vec![row("25000", "Besançon", "25056")]);

    assert_eq!(gazetteer.resolve("25000", "besancon"), Some("25056"));
    assert_eq!(gazetteer.resolve("25000", " BESANÇON "), Some("25056"));
}

#[test]
fn unknown_pairs_resolve_to_none() {
    let gazetteer = Gazetteer::from_rows(vec![row("75001", "Paris", "75056")]);

    assert_eq!(gazetteer.resolve("75001", "Lyon"), None);
    assert_eq!(gazetteer.resolve("69001", "Paris"), None);
}

#[test]
fn empty_resolver_misses_everything_but_keeps_raw_text() {
    let gazetteer = Gazetteer::default();
    assert!(gazetteer.is_empty());

    let occurrence = gazetteer.resolve_place("75001, Paris");
    assert_eq!(occurrence.city_raw.as_deref(), Some("Paris"));
    assert_eq!(occurrence.postal_code.as_deref(), Some("75001"));
    assert_eq!(occurrence.insee_code, None);
}

#[test]
fn place_split_is_order_insensitive() {
    assert_eq!(
        split_place_text("75001, Paris"),
        (Some("Paris".to_string()), Some("75001".to_string()))
    );
    assert_eq!(
        split_place_text("Paris, 75001"),
        (Some("Paris".to_string()), Some("75001".to_string()))
    );
}

#[test]
fn place_split_without_postal_code_keeps_first_part_as_city() {
    assert_eq!(
        split_place_text("Paris, France"),
        (Some("Paris".to_string()), None)
    );
    assert_eq!(split_place_text("Lyon"), (Some("Lyon".to_string()), None));
    assert_eq!(split_place_text(""), (None, None));
}

#[test]
fn both_orders_resolve_identically() {
    let gazetteer = Gazetteer::from_rows(vec![row("75001", "Paris", "75056")]);

    let a = gazetteer.resolve_place("75001, Paris");
    let b = gazetteer.resolve_place("Paris, 75001");
    assert_eq!(a, b);
    assert_eq!(a.insee_code.as_deref(), Some("75056"));
}

#[test]
fn later_tables_overwrite_earlier_entries() {
    let tables = [
        r#"[{"postal_code": "75001", "nom_comm": "Paris", "insee_com": "OLD"}]"#,
        r#"[{"postal_code": "75001", "nom_comm": "Paris", "insee_com": "75056"}]"#,
    ];
    let gazetteer = Gazetteer::from_json_slices(&tables).unwrap();
    assert_eq!(gazetteer.resolve("75001", "Paris"), Some("75056"));
}

#[test]
fn normalize_round_trips_index_and_lookup() {
    assert_eq!(normalize("Saint-Étienne"), normalize("saint-étienne"));
    assert_eq!(normalize("Orléans"), "ORLEANS");
}
