use std::fs;

use tempfile::TempDir;
use vox_core::persona::{Persona, PersonaRepository, PersonaSource, TechProficiency};
use vox_infrastructure::{JsonPersonaRepository, personas_from_slice};

fn persona(id: &str, name: &str) -> Persona {
    Persona {
        id: id.to_string(),
        name: name.to_string(),
        occupation: "Engineer".to_string(),
        location: Some("Berlin".to_string()),
        tech_proficiency: TechProficiency::High,
        behavioral_traits: vec!["curious".to_string()],
        source: PersonaSource::User,
    }
}

#[tokio::test]
async fn test_get_all_personas_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("personas.json");
    let repo = JsonPersonaRepository::with_path(store_path);

    // Should return empty vec for a non-existent file
    let personas = repo.get_all().await.expect("Should load personas");
    assert!(personas.is_empty(), "Should have no personas initially");
}

#[tokio::test]
async fn test_save_and_load_personas() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("personas.json");
    let repo = JsonPersonaRepository::with_path(store_path);

    let test_personas = vec![persona("test-id-1", "Alice"), persona("test-id-2", "Bob")];

    repo.save_all(&test_personas).await.expect("Should save personas");

    let loaded = repo.get_all().await.expect("Should load personas");
    assert_eq!(loaded.len(), 2, "Should load 2 personas");
    assert_eq!(loaded[0].name, "Alice");
    assert_eq!(loaded[1].name, "Bob");
    assert_eq!(loaded[0].tech_proficiency, TechProficiency::High);
}

#[tokio::test]
async fn test_save_replaces_store_wholesale() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("personas.json");
    let repo = JsonPersonaRepository::with_path(store_path);

    repo.save_all(&[persona("a", "Alice"), persona("b", "Bob")])
        .await
        .unwrap();
    repo.save_all(&[persona("c", "Cleo")]).await.unwrap();

    let loaded = repo.get_all().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Cleo");
}

#[tokio::test]
async fn test_malformed_store_is_treated_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("personas.json");
    fs::write(&store_path, "{ this is not json").unwrap();

    let repo = JsonPersonaRepository::with_path(store_path);
    let loaded = repo.get_all().await.expect("malformed store must not error");
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_non_list_store_is_treated_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("personas.json");
    fs::write(&store_path, r#"{"name": "not a list"}"#).unwrap();

    let repo = JsonPersonaRepository::with_path(store_path);
    let loaded = repo.get_all().await.unwrap();
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("nested").join("dir").join("personas.json");
    let repo = JsonPersonaRepository::with_path(store_path.clone());

    repo.save_all(&[persona("a", "Alice")]).await.unwrap();
    assert!(store_path.exists());
}

#[test]
fn test_personas_from_slice_skips_invalid_entries() {
    let json = br#"[
        {"id": "p-1", "name": "Ava", "occupation": "Nurse"},
        {"name": "missing required fields"},
        {"id": "p-2", "name": "Bob", "occupation": "Chef", "tech_proficiency": "High"}
    ]"#;

    let personas = personas_from_slice(json);
    assert_eq!(personas.len(), 2);
    assert_eq!(personas[0].name, "Ava");
    assert_eq!(personas[1].tech_proficiency, TechProficiency::High);
}

#[test]
fn test_personas_from_slice_rejects_non_list() {
    assert!(personas_from_slice(br#""just a string""#).is_empty());
    assert!(personas_from_slice(b"").is_empty());
}
