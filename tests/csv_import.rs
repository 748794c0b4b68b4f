use lead_intake::ingestion::{
    export_leads_csv, import_leads_from_path, import_leads_from_str, ImportOptions, ImportRequest,
    SkipReason, TEMPLATE_CSV,
};
use lead_intake::types::{Niche, Stage, WebsiteStatus};
use lead_intake::ImportError;

#[test]
fn import_from_path_happy_path() {
    let preview = import_leads_from_path("tests/fixtures/leads.csv", &ImportOptions::default()).unwrap();

    assert_eq!(preview.len(), 2);
    let leads = preview.leads();
    assert_eq!(leads[0].company_name, "ABC Plumbing");
    assert_eq!(leads[0].owner_name, "John Smith");
    assert_eq!(leads[0].phone, "5551234567");
    assert_eq!(leads[0].niche, Niche::Plumbing);
    assert_eq!(leads[0].website_status, WebsiteStatus::Basic);
    assert_eq!(leads[0].notes, "Called last week");
    assert_eq!(leads[0].stage, Stage::Cold);

    assert_eq!(leads[1].company_name, "Cool Air HVAC");
    assert_eq!(leads[1].niche, Niche::Hvac);
    assert_eq!(leads[1].website_status, WebsiteStatus::None);
    assert_eq!(leads[1].stage, Stage::Contacted);
}

#[test]
fn template_imports_like_the_fixture() {
    let preview = import_leads_from_str(TEMPLATE_CSV, &ImportOptions::default()).unwrap();
    let names: Vec<&str> = preview.leads().iter().map(|l| l.company_name.as_str()).collect();
    assert_eq!(names, vec!["ABC Plumbing", "Cool Air HVAC"]);
}

#[test]
fn messy_export_is_normalized_row_by_row() {
    let preview =
        import_leads_from_path("tests/fixtures/messy_export.csv", &ImportOptions::default()).unwrap();

    let stats = preview.stats();
    assert_eq!(stats.rows_read, 4);
    assert_eq!(stats.records, 3);
    assert_eq!(stats.rows_skipped, 1);
    assert_eq!(preview.skipped_rows()[0].line, 4);
    assert_eq!(preview.skipped_rows()[0].reason, SkipReason::MissingCompanyName);

    let leads = preview.leads();
    assert_eq!(leads[0].company_name, "Smith, Jones & Co");
    assert_eq!(leads[0].owner_name, "Ann Lee");
    assert_eq!(leads[0].phone, "555-000-1111");
    assert_eq!(leads[0].niche, Niche::Hvac);
    assert_eq!(leads[0].website_status, WebsiteStatus::Basic);
    assert_eq!(leads[0].notes, "wants quote, call Fri");
    assert_eq!(leads[0].stage, Stage::DemoSent);

    assert_eq!(leads[1].company_name, "Drip Doctors");
    // "REPAIR" contains "AIR", and the HVAC keywords are checked before "PLUMB".
    assert_eq!(leads[1].niche, Niche::Hvac);
    assert_eq!(leads[1].website_status, WebsiteStatus::Professional);
    assert_eq!(leads[1].stage, Stage::Closed);

    assert_eq!(leads[2].company_name, "Green Thumb");
    assert_eq!(leads[2].owner_name, "");
    assert_eq!(leads[2].niche, Niche::Hvac);
    assert_eq!(leads[2].website_status, WebsiteStatus::Unknown);
    assert_eq!(leads[2].stage, Stage::Cold);
}

#[test]
fn header_only_is_empty_import() {
    let err = import_leads_from_str(
        "Company Name,Owner Name,Phone,Niche,Website Status,Notes,Stage\n",
        &ImportOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ImportError::EmptyImport { .. }));
    assert!(err.to_string().contains("no leads to import"));
}

#[test]
fn header_without_company_column_is_missing_required_column() {
    let err = import_leads_from_str("Owner,Phone\nJane,555\n", &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, ImportError::MissingRequiredColumn { .. }));
    assert!(err.to_string().contains("missing required column"));

    let err = import_leads_from_str("Owner,Phone", &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, ImportError::MissingRequiredColumn { .. }));
}

#[test]
fn missing_file_is_unreadable_source() {
    let err = import_leads_from_path("tests/fixtures/does_not_exist.csv", &ImportOptions::default())
        .unwrap_err();
    assert!(matches!(err, ImportError::UnreadableSource(_)));
    assert!(err.to_string().starts_with("failed to read"));
}

#[test]
fn import_request_runs_path_import() {
    let req = ImportRequest {
        path: "tests/fixtures/leads.csv".into(),
        options: ImportOptions::default(),
    };
    assert_eq!(req.run().unwrap().len(), 2);
}

#[test]
fn export_then_reimport_keeps_categorical_values() {
    let text = "\
Business,Industry,Website,Pipeline,Notes
Heat Kings,heating,good,Demo Sent,\"follow up, maybe\"
Pipe Pros,plumbing services,simple,lost,
Yard Co,Landscaping,,negotiating,
";
    let first = import_leads_from_str(text, &ImportOptions::default()).unwrap();
    let exported = export_leads_csv(first.leads()).unwrap();
    assert!(exported.starts_with("Company Name,Owner Name,Phone,Niche,Website Status,Notes,Stage"));

    let second = import_leads_from_str(&exported, &ImportOptions::default()).unwrap();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.leads().iter().zip(second.leads()) {
        assert_eq!(a.company_name, b.company_name);
        assert_eq!(a.notes, b.notes);
        assert_eq!(a.niche, b.niche);
        assert_eq!(a.website_status, b.website_status);
        assert_eq!(a.stage, b.stage);
        assert_ne!(a.id, b.id);
    }

    assert_eq!(first.leads()[0].notes, "follow up, maybe");
    assert_eq!(first.leads()[1].stage, Stage::Lost);
    assert_eq!(first.leads()[2].website_status, WebsiteStatus::None);
}
