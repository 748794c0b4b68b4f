use lead_intake::collection::{JsonFileStore, LeadCollection, LeadStore, MemoryStore};
use lead_intake::ingestion::{import_leads_from_path, import_leads_from_str, ImportOptions};
use lead_intake::types::{LeadDraft, Niche, Stage, WebsiteStatus};
use lead_intake::CollectionError;

#[test]
fn json_store_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("leads.json"));
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn json_store_round_trips_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("leads.json"));

    let mut leads = LeadCollection::load(&store).unwrap();
    leads
        .add(LeadDraft {
            owner_name: "Jane Doe".to_string(),
            niche: Niche::Plumbing,
            website_status: WebsiteStatus::Professional,
            stage: Stage::DemoSent,
            ..LeadDraft::new("Drip Doctors")
        })
        .unwrap();
    leads.save(&store).unwrap();

    let reloaded = LeadCollection::load(&store).unwrap();
    assert_eq!(reloaded, leads);
}

#[test]
fn json_store_uses_camel_case_and_canonical_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");
    let store = JsonFileStore::new(&path);

    let mut leads = LeadCollection::default();
    leads
        .add(LeadDraft {
            stage: Stage::DemoSent,
            ..LeadDraft::new("Cool Air HVAC")
        })
        .unwrap();
    leads.save(&store).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let first = &raw[0];
    assert_eq!(first["companyName"], "Cool Air HVAC");
    assert_eq!(first["niche"], "HVAC");
    assert_eq!(first["websiteStatus"], "Unknown");
    assert_eq!(first["stage"], "demo_sent");
    assert!(first["createdAt"].is_string());
    assert!(first["id"].as_str().unwrap().starts_with("lead_"));
}

#[test]
fn json_store_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = JsonFileStore::new(&path).load_all().unwrap_err();
    assert!(matches!(err, CollectionError::Json(_)));
}

#[test]
fn committed_import_is_appended_after_existing_leads() {
    let store = MemoryStore::default();
    let mut leads = LeadCollection::load(&store).unwrap();
    leads.add(LeadDraft::new("Already Here")).unwrap();
    leads.save(&store).unwrap();

    let preview = import_leads_from_path("tests/fixtures/leads.csv", &ImportOptions::default()).unwrap();
    // Preview alone leaves the collection untouched.
    assert_eq!(leads.len(), 1);

    let added = preview.commit_into(&mut leads);
    assert_eq!(added, 2);
    leads.save(&store).unwrap();

    let names: Vec<String> = store
        .load_all()
        .unwrap()
        .into_iter()
        .map(|l| l.company_name)
        .collect();
    assert_eq!(names, vec!["Already Here", "ABC Plumbing", "Cool Air HVAC"]);
}

#[test]
fn failed_import_leaves_collection_untouched() {
    let store = MemoryStore::default();
    let mut leads = LeadCollection::default();
    leads.add(LeadDraft::new("Keep Me")).unwrap();
    leads.save(&store).unwrap();

    assert!(import_leads_from_str("Owner,Phone\nJane,555\n", &ImportOptions::default()).is_err());
    assert!(import_leads_from_str("Company\n", &ImportOptions::default()).is_err());

    assert_eq!(LeadCollection::load(&store).unwrap(), leads);
}

#[test]
fn imported_ids_are_unique_across_imports() {
    let mut leads = LeadCollection::default();
    for _ in 0..3 {
        import_leads_from_path("tests/fixtures/leads.csv", &ImportOptions::default())
            .unwrap()
            .commit_into(&mut leads);
    }
    assert_eq!(leads.len(), 6);

    let mut ids: Vec<&str> = leads.leads().iter().map(|l| l.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
fn committing_the_same_preview_twice_adds_nothing_the_second_time() {
    let preview = import_leads_from_path("tests/fixtures/leads.csv", &ImportOptions::default()).unwrap();
    let mut leads = LeadCollection::default();

    let first = preview.clone().commit_into(&mut leads);
    let second = preview.commit_into(&mut leads);

    assert_eq!(first, 2);
    assert_eq!(second, 0);
    assert_eq!(leads.len(), 2);
}

#[test]
fn loading_a_store_with_duplicate_ids_keeps_the_first() {
    let leads = import_leads_from_path("tests/fixtures/leads.csv", &ImportOptions::default())
        .unwrap()
        .into_leads();
    let mut stored = leads.clone();
    stored.push(leads[0].clone());
    let store = MemoryStore::new(stored);

    let loaded = LeadCollection::load(&store).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded, LeadCollection::new(leads));
}

#[test]
fn json_store_writes_to_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("leads.json"));
    assert_eq!(store.path(), dir.path().join("leads.json"));
    assert!(!store.path().exists());

    LeadCollection::default().save(&store).unwrap();
    assert!(store.path().exists());
    assert!(store.load_all().unwrap().is_empty());
}
