use chrono::{TimeZone, Utc};
use jobpost_extract::{extract, IngestPayload};

const PAGE: &str = r#"<html><head><title>Backend Engineer | Acme | LinkedIn</title></head><body><main>
  <div class="job-details">
    <h1 class="job-title">Backend Engineer</h1>
    <a class="company-name">Acme Corp</a>
    <span class="job-location">Berlin, Germany</span>
    <section><h2>About the job</h2>
      <p>Design, build and run the order services that power checkout for millions of customers.</p>
    </section>
  </div>
</main></body></html>"#;

#[test]
fn payload_carries_fields_and_provenance() {
    let result = extract(PAGE, "https://www.linkedin.com/jobs/view/77/?trk=x");
    let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
    let payload = result.to_payload("linkedin", at);

    assert_eq!(payload.title, "Backend Engineer");
    assert_eq!(payload.company, "Acme Corp");
    assert_eq!(payload.location, "Berlin, Germany");
    assert_eq!(payload.url, "https://www.linkedin.com/jobs/view/77/");
    assert_eq!(payload.raw_text, result.description);
    assert_eq!(payload.raw_data.source, "linkedin");
    assert_eq!(payload.raw_data.scraped_at, at);

    let used = &payload.raw_data.selectors_used;
    assert_eq!(used["title"], "found");
    assert_eq!(used["company"], "found");
    assert_eq!(used["location"], "found");
    assert_eq!(
        used["description"],
        format!("found_{}_chars", result.description.chars().count())
    );
}

#[test]
fn payload_json_matches_ingestion_shape() {
    let result = extract(PAGE, "https://www.linkedin.com/jobs/view/77/");
    let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
    let json = result.to_payload("linkedin", at).to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys.len(), 6);
    for key in ["title", "company", "location", "url", "raw_text", "raw_data"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["raw_data"]["scraped_at"], "2025-03-14T09:26:53Z");

    let back: IngestPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(back.raw_data.scraped_at, at);
}

#[test]
fn title_only_page_uses_title_as_raw_text() {
    let result = extract(r#"<body><h1 class="job-title">Data Analyst</h1></body>"#, "");
    let payload = result.to_payload("linkedin", Utc::now());

    assert!(result.description.is_empty());
    assert_eq!(payload.raw_text, "Data Analyst");
    assert_eq!(payload.raw_data.selectors_used["description"], "not_found");
}

#[test]
fn empty_page_gets_placeholder_title() {
    let payload = extract("", "").to_payload("indeed", Utc::now());

    assert_eq!(payload.title, "Untitled Position");
    assert_eq!(payload.raw_text, "");
    assert_eq!(payload.raw_data.source, "indeed");
}
