//! Title, company and location extraction.
//!
//! Every field goes through the same three scopes: the resolved wrapper,
//! then any card/detail container in the document, then the whole document.
//! The title additionally passes a noise filter and falls back to the
//! document title and the `og:title` metadata.

use dom_query::{Document, NodeRef, Selection};
use regex::RegexBuilder;

use super::{first_success, non_empty, Strategy};
use crate::dom;
use crate::metadata::PageMetadata;
use crate::options::Options;
use crate::patterns::{ClassMatcher, COUNTER_PREFIX, LEADING_COUNTER};
use crate::selector;

/// Class-word lookup over wrapper, card containers, then the document.
///
/// Returns the first non-empty result, or an empty string.
#[must_use]
pub fn find_in_containers(
    doc: &Document,
    wrapper: Option<NodeRef>,
    words: &ClassMatcher,
    max_len: usize,
    options: &Options,
) -> String {
    let in_scope = |scope: Selection<'_>| non_empty(selector::first_non_empty_text(&scope, words, max_len));

    let tiers: [Strategy<'_, String>; 3] = [
        Box::new(|| wrapper.and_then(|w| in_scope(Selection::from(w)))),
        Box::new(|| {
            let all = selector::document_scope(doc);
            selector::collect_by_class(&all, &options.vocabulary.card_container)
                .into_iter()
                .find_map(|container| in_scope(Selection::from(container)))
        }),
        Box::new(|| in_scope(selector::document_scope(doc))),
    ];

    first_success(&tiers).unwrap_or_default()
}

/// True if `text` is site or feed chrome rather than a posting title.
///
/// Rejects strings under two characters, the bare site name (optionally
/// behind an unread counter such as `"(3)"`), anything else behind a
/// `"(N) "` counter (tab titles of a page with notifications), and any
/// string containing a known feed label.
#[must_use]
pub fn is_noise_title(text: &str, options: &Options) -> bool {
    let text = text.trim();
    if dom::char_len(text) < 2 {
        return true;
    }

    if COUNTER_PREFIX.is_match(text) {
        return true;
    }

    let lower = text.to_lowercase();
    let bare = LEADING_COUNTER.replace(&lower, "");
    if bare.trim() == options.site_name.to_lowercase() {
        return true;
    }

    options
        .vocabulary
        .feed_titles
        .iter()
        .any(|label| lower.contains(label.as_str()))
}

/// Removes a trailing `" | <site name> ..."` from a document title.
#[must_use]
pub fn strip_site_suffix(title: &str, site_name: &str) -> String {
    let title = title.trim();
    if site_name.is_empty() {
        return title.to_string();
    }
    let pattern = format!(r"\s+\|\s+{}.*", regex::escape(site_name));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.replace(title, "").trim().to_string(),
        Err(_) => title.to_string(),
    }
}

/// Resolves the posting title.
///
/// Order: class-based lookup (unless noise), document title (unless noise),
/// `og:title`, then the document title as-is.
#[must_use]
pub fn resolve_title(
    doc: &Document,
    wrapper: Option<NodeRef>,
    page: &PageMetadata,
    options: &Options,
) -> String {
    let doc_title = strip_site_suffix(&page.document_title, &options.site_name);
    let og_title = page.og_title.trim().to_string();

    let tiers: [Strategy<'_, String>; 4] = [
        Box::new(|| {
            let found = find_in_containers(
                doc,
                wrapper,
                &options.vocabulary.title_words,
                options.title_max_len,
                options,
            );
            non_empty(found).filter(|t| !is_noise_title(t, options))
        }),
        Box::new(|| non_empty(doc_title.clone()).filter(|t| !is_noise_title(t, options))),
        Box::new(|| non_empty(og_title.clone())),
        Box::new(|| non_empty(doc_title.clone())),
    ];

    first_success(&tiers).unwrap_or_default()
}

/// Resolves the hiring organization.
#[must_use]
pub fn resolve_company(doc: &Document, wrapper: Option<NodeRef>, options: &Options) -> String {
    find_in_containers(
        doc,
        wrapper,
        &options.vocabulary.company_words,
        options.company_max_len,
        options,
    )
}

/// Joined location chips inside the wrapper, else inside the first card
/// container that has any.
fn chips_in_containers(doc: &Document, wrapper: Option<NodeRef>, options: &Options) -> Option<String> {
    let chips = |scope: Selection<'_>| {
        non_empty(selector::collect_multiple_text(&scope, options.location_selectors.as_slice()))
    };

    wrapper.and_then(|w| chips(Selection::from(w))).or_else(|| {
        let all = selector::document_scope(doc);
        selector::collect_by_class(&all, &options.vocabulary.card_container)
            .into_iter()
            .find_map(|container| chips(Selection::from(container)))
    })
}

/// Resolves the location.
///
/// Split chips ("Berlin", "Hybrid") are joined before the class-word lookup
/// runs, since the lookup would stop at the first chip. Order: chips in the
/// wrapper or a card container, class-word lookup, chips anywhere.
#[must_use]
pub fn resolve_location(doc: &Document, wrapper: Option<NodeRef>, options: &Options) -> String {
    let tiers: [Strategy<'_, String>; 3] = [
        Box::new(|| chips_in_containers(doc, wrapper, options)),
        Box::new(|| {
            non_empty(find_in_containers(
                doc,
                wrapper,
                &options.vocabulary.location_words,
                options.location_max_len,
                options,
            ))
        }),
        Box::new(|| {
            non_empty(selector::collect_multiple_text(
                &selector::document_scope(doc),
                options.location_selectors.as_slice(),
            ))
        }),
    ];

    first_success(&tiers).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Options {
        Options::default()
    }

    #[test]
    fn noise_titles_are_rejected() {
        let o = opts();
        assert!(is_noise_title("LinkedIn", &o));
        assert!(is_noise_title("linkedin", &o));
        assert!(is_noise_title("(3) LinkedIn", &o));
        assert!(is_noise_title("Top job picks for you", &o));
        assert!(is_noise_title("Saved jobs", &o));
        assert!(is_noise_title("x", &o));
        assert!(is_noise_title("  ", &o));
        assert!(!is_noise_title("Backend Engineer", &o));
        assert!(!is_noise_title("LinkedIn Sales Engineer", &o));
    }

    #[test]
    fn counter_prefixed_titles_are_noise() {
        let o = opts();
        assert!(is_noise_title("(3) Backend Engineer | Acme", &o));
        assert!(is_noise_title("(12)\tMessaging", &o));
        assert!(is_noise_title("(3)LinkedIn", &o));
        assert!(!is_noise_title("(3)Backend Engineer", &o));
        assert!(!is_noise_title("Backend Engineer (3)", &o));
    }

    #[test]
    fn brand_follows_site_name() {
        let o = Options {
            site_name: "Brand".to_string(),
            ..Options::default()
        };
        assert!(is_noise_title("(3) Brand", &o));
        assert!(is_noise_title("BRAND", &o));
        assert!(!is_noise_title("LinkedIn Sales Engineer", &o));
    }

    #[test]
    fn site_suffix_is_stripped() {
        assert_eq!(
            strip_site_suffix("Backend Engineer | Acme | LinkedIn", "LinkedIn"),
            "Backend Engineer | Acme"
        );
        assert_eq!(strip_site_suffix("Backend Engineer | linkedin.com", "LinkedIn"), "Backend Engineer");
        assert_eq!(strip_site_suffix("Backend Engineer", "LinkedIn"), "Backend Engineer");
        assert_eq!(strip_site_suffix("  Backend Engineer ", ""), "Backend Engineer");
    }

    #[test]
    fn wrapper_scope_wins_over_document() {
        let doc = dom::parse(
            r#"<body>
                 <ul><li><span class="job-card__title">Other Job</span></li></ul>
                 <div id="w"><h1 class="job-title">Backend Engineer</h1></div>
               </body>"#,
        );
        let w = *doc.select("#w").nodes().first().unwrap();
        let o = opts();
        let title = find_in_containers(&doc, Some(w), &o.vocabulary.title_words, 200, &o);
        assert_eq!(title, "Backend Engineer");
    }

    #[test]
    fn card_container_tier_before_document() {
        let doc = dom::parse(
            r#"<body>
                 <div class="company">Sidebar Co</div>
                 <div class="top-card"><a class="company-name">Acme Corp</a></div>
               </body>"#,
        );
        let o = opts();
        assert_eq!(resolve_company(&doc, None, &o), "Acme Corp");
    }

    #[test]
    fn document_tier_as_last_resort() {
        let doc = dom::parse(r#"<body><span class="company-name">Acme Corp</span></body>"#);
        assert_eq!(resolve_company(&doc, None, &opts()), "Acme Corp");
    }

    #[test]
    fn wrapper_chips_join_with_default_vocabulary() {
        let doc = dom::parse(
            r#"<body>
                 <li class="job-card"><span class="job-card__location">Paris</span></li>
                 <div id="w">
                   <h1 class="job-title">Backend Engineer</h1>
                   <span class="job-details-jobs-unified-top-card__bullet">Berlin</span>
                   <span class="job-details-jobs-unified-top-card__bullet">Hybrid</span>
                 </div>
               </body>"#,
        );
        let w = *doc.select("#w").nodes().first().unwrap();
        assert_eq!(resolve_location(&doc, Some(w), &opts()), "Berlin Hybrid");
    }

    #[test]
    fn top_card_chips_join_without_wrapper() {
        let doc = dom::parse(
            r#"<body><div class="top-card-layout">
                 <span class="topcard__flavor--bullet">Lisbon, Portugal</span>
                 <span class="topcard__flavor--bullet">Remote</span>
               </div></body>"#,
        );
        assert_eq!(resolve_location(&doc, None, &opts()), "Lisbon, Portugal Remote");
    }

    #[test]
    fn location_class_lookup_without_chips() {
        let doc = dom::parse(r#"<body><div class="top-card"><span class="job-location">Oslo</span></div></body>"#);
        assert_eq!(resolve_location(&doc, None, &opts()), "Oslo");
    }

    #[test]
    fn location_joins_split_chips() {
        let doc = dom::parse(
            r#"<body><span class="topcard__flavor--bullet">Berlin</span><span class="topcard__flavor--bullet">Hybrid</span></body>"#,
        );
        let o = Options {
            vocabulary: crate::patterns::Vocabulary {
                location_words: ClassMatcher::new(&["nothing-matches-this"]).unwrap(),
                ..crate::patterns::Vocabulary::default()
            },
            ..Options::default()
        };
        assert_eq!(resolve_location(&doc, None, &o), "Berlin Hybrid");
    }

    #[test]
    fn noise_class_title_falls_back_to_document_title() {
        let doc = dom::parse(r#"<body><h1 class="title">(3) LinkedIn</h1></body>"#);
        let page = PageMetadata {
            document_title: "Backend Engineer | Acme | LinkedIn".to_string(),
            og_title: "OG Title".to_string(),
        };
        assert_eq!(resolve_title(&doc, None, &page, &opts()), "Backend Engineer | Acme");
    }

    #[test]
    fn noise_document_title_falls_back_to_og_title() {
        let doc = dom::parse("<body></body>");
        let page = PageMetadata {
            document_title: "(3) LinkedIn".to_string(),
            og_title: "Backend Engineer".to_string(),
        };
        assert_eq!(resolve_title(&doc, None, &page, &opts()), "Backend Engineer");
    }

    #[test]
    fn noise_document_title_kept_when_nothing_else() {
        let doc = dom::parse("<body></body>");
        let page = PageMetadata {
            document_title: "Jobs Home | LinkedIn".to_string(),
            og_title: String::new(),
        };
        assert_eq!(resolve_title(&doc, None, &page, &opts()), "Jobs Home");
    }

    #[test]
    fn empty_everything_is_empty_title() {
        let doc = dom::parse("<body></body>");
        assert_eq!(resolve_title(&doc, None, &PageMetadata::default(), &opts()), "");
    }
}
