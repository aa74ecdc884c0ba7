use docubuilder_router::{PLACEHOLDER_ROUTES, Router};
use docubuilder_types::{NavModel, Page};

fn router() -> Router {
    Router::new().expect("application routes are valid")
}

#[test]
fn core_pages_resolve_by_exact_path() {
    let router = router();
    assert_eq!(router.resolve("/").page, Page::Home);
    assert_eq!(router.resolve("/documents").page, Page::Documents);
    assert_eq!(router.resolve("/templates").page, Page::Templates);
    assert_eq!(router.resolve("/templates/gallery").page, Page::Templates);
    assert_eq!(router.resolve("/contacts").page, Page::Contacts);
}

#[test]
fn editor_accepts_optional_id() {
    let router = router();

    let with_id = router.resolve("/editor/42");
    assert_eq!(with_id.page, Page::Editor { id: Some("42".into()) });
    assert_eq!(with_id.page.heading(), "Dokument 42");
    assert_eq!(with_id.pattern.as_deref(), Some("/editor/:id"));

    let bare = router.resolve("/editor");
    assert_eq!(bare.page, Page::Editor { id: None });
    assert_eq!(bare.page.heading(), "Unbenanntes Dokument");
    assert_eq!(bare.pattern.as_deref(), Some("/editor"));
}

#[test]
fn settings_is_a_titled_placeholder() {
    let resolution = router().resolve("/settings");
    assert_eq!(resolution.page, Page::placeholder("Einstellungen"));
}

#[test]
fn every_placeholder_route_carries_its_title() {
    let router = router();
    for (path, title) in PLACEHOLDER_ROUTES {
        assert_eq!(router.resolve(path).page, Page::placeholder(*title), "path {path}");
    }
}

#[test]
fn unknown_paths_select_not_found_with_canonical_path() {
    let router = router();
    let resolution = router.resolve("/nope/");
    assert_eq!(resolution.page, Page::NotFound { path: "/nope".into() });
    assert_eq!(resolution.pattern, None);

    assert!(matches!(router.resolve("/editor/1/extra").page, Page::NotFound { .. }));
    assert!(matches!(router.resolve("/Documents").page, Page::NotFound { .. }));
}

#[test]
fn trailing_slash_query_and_fragment_are_ignored() {
    let router = router();
    let resolution = router.resolve("/documents/?view=grid#top");
    assert_eq!(resolution.page, Page::Documents);
    assert_eq!(resolution.path.as_str(), "/documents");
}

#[test]
fn percent_encoded_spellings_resolve_to_one_location() {
    let router = router();

    let encoded = router.resolve("/%64ocuments");
    assert_eq!(encoded.page, Page::Documents);
    assert_eq!(encoded.path.as_str(), "/documents");

    let spaced = router.resolve("/editor/Q3 Bericht");
    let escaped = router.resolve("/editor/Q3%20Bericht");
    assert_eq!(spaced.path, escaped.path);
    assert_eq!(spaced.page, Page::Editor { id: Some("Q3 Bericht".into()) });
    assert_eq!(escaped.page, spaced.page);
}

#[test]
fn every_sidebar_path_has_a_route() {
    let router = router();
    for path in NavModel::standard().paths() {
        let resolution = router.resolve(path);
        assert!(resolution.pattern.is_some(), "sidebar path {path} has no route");
    }
}

#[test]
fn table_lists_all_seventeen_patterns() {
    // five core routes, two editor variants, ten placeholders
    assert_eq!(router().table().len(), 17);
}

#[test]
fn resolution_page_serializes_for_cli_output() {
    let page = router().resolve("/editor/7").page;
    let json = serde_json::to_value(&page).expect("serialize");
    assert_eq!(json, serde_json::json!({ "page": "editor", "id": "7" }));
}
