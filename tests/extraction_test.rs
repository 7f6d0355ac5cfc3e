use jobpost_extract::{extract, extract_with_options, Options, PageContext};

/// 200 characters of body text with no marker phrase in it.
fn paragraph_200() -> String {
    let para = format!(
        "{}{}",
        "Build reliable backend services and APIs. ".repeat(4),
        "x".repeat(32)
    );
    assert_eq!(para.chars().count(), 200);
    para
}

/// 300 characters of body text with no marker phrase in it.
fn body_300() -> String {
    let body = format!("{}{}", "Ship features weekly. ".repeat(13), "x".repeat(14));
    assert_eq!(body.chars().count(), 300);
    body
}

#[test]
fn detail_wrapper_with_heading_and_deep_paragraph() {
    let para = paragraph_200();
    let html = format!(
        r#"<html><body>
          <div class="job-details-wrapper">
            <span class="job-title">Backend Engineer</span>
            <div>
              <div><div class="detail-heading">About the job</div></div>
              <div><div><p>{para}</p></div></div>
            </div>
          </div>
        </body></html>"#
    );

    let result = extract(&html, "https://example.com/careers/42");

    assert_eq!(result.title, "Backend Engineer");
    // The selected anchor block holds the marker line and the paragraph.
    assert_eq!(result.description, format!("About the job {para}"));
    assert_eq!(result.diagnostics.description_source.as_deref(), Some("section"));
    assert_eq!(result.diagnostics.anchor_score, Some(2));
    assert!(result.is_job_page);
    assert!(result.diagnostics.wrapper_found);
}

#[test]
fn empty_tree_yields_empty_result() {
    let result = extract("", "");

    assert_eq!(result.title, "");
    assert_eq!(result.company, "");
    assert_eq!(result.location, "");
    assert_eq!(result.description, "");
    assert!(!result.is_job_page);
    assert_eq!(result.diagnostics.selectors_used["description"], "not_found");
}

#[test]
fn no_anchor_falls_through_to_whole_document() {
    let body = body_300();
    let html = format!(
        r#"<html><body>
          <div class="company-name">Acme Corp</div>
          <div class="description">{body}</div>
        </body></html>"#
    );

    let result = extract(&html, "https://example.com/careers");

    assert_eq!(result.diagnostics.anchors, 0);
    assert_eq!(result.company, "Acme Corp");
    assert_eq!(result.description, body);
    assert_eq!(result.diagnostics.description_source.as_deref(), Some("class_match"));
    assert!(result.is_job_page);
}

#[test]
fn collection_url_becomes_detail_url() {
    let result = extract(
        "<html><body><p>Nothing here</p></body></html>",
        ".../jobs/collections/?currentJobId=4821",
    );

    assert_eq!(result.url, "https://www.linkedin.com/jobs/view/4821");
    assert!(result.url.contains("4821"));
    assert!(result.is_job_page);
}

#[test]
fn collection_url_is_independent_of_fields() {
    let url = "https://www.linkedin.com/jobs/collections/recommended/?currentJobId=4821&origin=JYMBII";
    let with_fields = extract(
        r#"<body><h1 class="job-title">Backend Engineer</h1><span class="company-name">Acme</span></body>"#,
        url,
    );
    let without_fields = extract("<body></body>", url);

    assert_eq!(with_fields.url, "https://www.linkedin.com/jobs/view/4821");
    assert_eq!(with_fields.url, without_fields.url);
}

#[test]
fn search_list_and_detail_panel() {
    let para = "Own the ingestion pipeline end to end and mentor two engineers. ".repeat(3);
    let html = format!(
        r#"<html><head><title>(5) Jobs | LinkedIn</title></head><body>
          <header><nav>Home My Network Jobs</nav></header>
          <main class="scaffold-layout__main">
            <ul class="jobs-search-results__list">
              <li class="job-card-container">
                <a class="job-card-list__title">Frontend Developer</a>
                <span class="job-card-container__primary-description">Initech</span>
                <p>Overview: fast-paced team</p>
              </li>
            </ul>
            <div class="jobs-search__job-details--container">
              <div class="job-details-jobs-unified-top-card__container">
                <h1 class="job-details-jobs-unified-top-card__job-title">Data Platform Engineer</h1>
                <div class="job-details-jobs-unified-top-card__company-name"><a>Hooli</a></div>
                <span class="job-details-jobs-unified-top-card__bullet">Zurich, Switzerland</span>
              </div>
              <article class="jobs-description__container">
                <div class="jobs-description__content">
                  <h2>About the job</h2>
                  <div class="show-more-less-html__markup">{para}</div>
                  <button class="show-more-less-html__button" aria-label="Show more">Show more</button>
                </div>
              </article>
            </div>
          </main>
        </body></html>"#
    );

    let result = extract(
        &html,
        "https://www.linkedin.com/jobs/collections/recommended/?currentJobId=99",
    );

    assert_eq!(result.title, "Data Platform Engineer");
    assert_eq!(result.company, "Hooli");
    assert_eq!(result.location, "Zurich, Switzerland");
    assert!(result.description.starts_with("About the job"));
    assert!(result.description.contains("ingestion pipeline"));
    assert!(!result.description.contains("Frontend Developer"));
    assert_eq!(result.url, "https://www.linkedin.com/jobs/view/99");
    assert!(result.is_job_page);
}

#[test]
fn split_location_chips_are_joined() {
    let para = "Run the payments ledger and its reconciliation jobs across regions. ".repeat(2);
    let html = format!(
        r#"<html><body><main>
          <div class="jobs-search__job-details--container">
            <div class="job-details-jobs-unified-top-card__container">
              <h1 class="job-details-jobs-unified-top-card__job-title">Backend Engineer</h1>
              <div class="job-details-jobs-unified-top-card__company-name">Acme</div>
              <span class="job-details-jobs-unified-top-card__bullet">Berlin, Germany</span>
              <span class="job-details-jobs-unified-top-card__bullet">Hybrid</span>
            </div>
            <div class="jobs-description__content"><h2>About the job</h2><p>{para}</p></div>
          </div>
        </main></body></html>"#
    );

    let result = extract_with_options(&html, &PageContext::default(), &Options::default());

    assert_eq!(result.location, "Berlin, Germany Hybrid");
    assert!(result.diagnostics.wrapper_found);
}

#[test]
fn og_title_used_when_no_title_element() {
    let ctx = PageContext::new("https://example.com/jobs/1").with_og_title("Site Reliability Engineer");
    let result = extract_with_options("<body><p>x</p></body>", &ctx, &Options::default());
    assert_eq!(result.title, "Site Reliability Engineer");
}

#[test]
fn meta_og_title_read_from_document() {
    let html = r#"<html><head>
        <title>LinkedIn</title>
        <meta property="og:title" content="Security Engineer">
      </head><body></body></html>"#;
    let result = extract(html, "https://www.linkedin.com/jobs/view/5/");
    assert_eq!(result.title, "Security Engineer");
}

#[test]
fn description_truncated_to_limit() {
    let html = format!(
        r#"<body><div class="description">{}</div></body>"#,
        "abcdefghij".repeat(2_500)
    );
    let result = extract(&html, "");

    assert_eq!(result.description.chars().count(), 10_000);
    assert_eq!(result.diagnostics.lengths["description"], 10_000);
}

#[test]
fn custom_description_limit() {
    let html = format!(r#"<body><div class="description">{}</div></body>"#, "word ".repeat(100));
    let options = Options {
        max_description_len: 20,
        ..Options::default()
    };
    let result = extract_with_options(&html, &PageContext::default(), &options);
    assert_eq!(result.description, "word word word word ");
}
