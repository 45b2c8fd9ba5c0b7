use std::path::PathBuf;

use gedmap::load_gazetteer;

/// Unique scratch directory for one test
async fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gedmap-{name}-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    dir
}

#[tokio::test]
async fn loads_and_merges_two_tables() {
    let dir = scratch_dir("merge").await;
    let first = dir.join("correspondance1.json");
    let second = dir.join("correspondance2.json");
    tokio::fs::write(
        &first,
        r#"[{"postal_code": "75001/75002", "nom_comm": "Paris", "insee_com": "75056"}]"#,
    )
    .await
    .unwrap();
    tokio::fs::write(
        &second,
        r#"[{"postal_code": "69001", "nom_comm": "Lyon", "insee_com": "69123"}]"#,
    )
    .await
    .unwrap();

    let gazetteer = load_gazetteer(&[&first, &second]).await.unwrap();
    assert_eq!(gazetteer.len(), 3);
    assert_eq!(gazetteer.resolve("75002", "paris"), Some("75056"));
    assert_eq!(gazetteer.resolve("69001", "Lyon"), Some("69123"));

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn missing_table_file_is_an_error() {
    let missing = std::env::temp_dir().join("gedmap-does-not-exist.json");
    assert!(load_gazetteer(&[&missing]).await.is_err());
}

#[tokio::test]
async fn malformed_table_is_an_error() {
    let dir = scratch_dir("malformed").await;
    let path = dir.join("broken.json");
    tokio::fs::write(&path, "{not json").await.unwrap();

    assert!(load_gazetteer(&[&path]).await.is_err());

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
