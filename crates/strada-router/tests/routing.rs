//! End-to-end routing behavior through the public API.

use std::collections::HashMap;
use std::sync::Arc;

use strada_router::{
    MatchError, Matcher, Method, ParamValue, Route, RouteCollection, RouteError,
};

fn route(uri: &str, methods: &str) -> Route {
    Route::new(uri, methods).unwrap()
}

#[test]
fn methods_are_uppercased_and_duplicates_preserved() {
    let route = Route::new("/tests", "get,post,get").unwrap();
    assert_eq!(
        route.methods(),
        &[Method::Get, Method::Post, Method::Get]
    );
    assert_eq!(route.methods()[0].as_str(), "GET");
}

#[test]
fn construction_failures_are_immediate() {
    assert!(matches!(
        Route::new("tests", "GET"),
        Err(RouteError::InvalidUri { .. })
    ));
    assert!(matches!(
        Route::new("/tests/", "GET"),
        Err(RouteError::InvalidUri { .. })
    ));
    assert!(matches!(
        Route::new("/tests", "SOME"),
        Err(RouteError::InvalidMethods(_))
    ));
}

#[test]
fn last_registration_wins_by_identity() {
    let first = Arc::new(route("/tests", "GET").with_name("some.route").unwrap());
    let second = Arc::new(route("/tests", "GET").with_name("some.route").unwrap());

    let mut collection = RouteCollection::new();
    collection.add(Arc::clone(&first));
    collection.add(Arc::clone(&second));

    let found = collection
        .get_by_uri_and_method("/tests", Method::Get)
        .unwrap();
    assert!(Arc::ptr_eq(&found, &second));
    assert!(Arc::ptr_eq(
        &collection.get_by_name("some.route").unwrap(),
        &second
    ));
}

#[test]
fn exact_route_takes_precedence_over_pattern() {
    let pattern = Arc::new(route("/items/<str:id>", "GET"));
    let exact = Arc::new(route("/items/new", "GET"));

    let mut collection = RouteCollection::new();
    collection.add(Arc::clone(&pattern));
    collection.add(Arc::clone(&exact));
    let matcher = Matcher::new(collection);

    let matched = matcher.match_route("/items/new", Method::Get).unwrap();
    assert!(Arc::ptr_eq(&matched.route, &exact));
    assert!(matched.params.is_empty());

    // Other values still reach the pattern route.
    let matched = matcher.match_route("/items/old", Method::Get).unwrap();
    assert!(Arc::ptr_eq(&matched.route, &pattern));
    assert_eq!(matched.params.get_str("id"), Some("old"));
}

#[test]
fn int_placeholder_extracts_integer() {
    let matcher = Matcher::new(RouteCollection::from_routes([route(
        "/api/v1/tests/<int:test>",
        "GET",
    )]));

    let matched = matcher
        .match_route("/api/v1/tests/42", Method::Get)
        .unwrap();
    assert_eq!(matched.params.get("test"), Some(&ParamValue::Int(42)));

    assert!(matches!(
        matcher.match_route("/api/v1/tests/abc", Method::Get),
        Err(MatchError::NotFound { .. })
    ));
}

#[test]
fn method_mismatch_is_distinguished_from_not_found() {
    let matcher = Matcher::new(RouteCollection::from_routes([route(
        "/widgets/<int:id>",
        "GET",
    )]));

    match matcher.match_route("/widgets/5", Method::Delete) {
        Err(MatchError::MethodNotAllowed { allowed, .. }) => {
            assert_eq!(allowed, vec![Method::Get]);
        }
        other => panic!("expected MethodNotAllowed, got {other:?}"),
    }

    assert!(matches!(
        matcher.match_route("/missing/5", Method::Delete),
        Err(MatchError::NotFound { .. })
    ));
}

#[test]
fn literal_segment_wins_specificity_tie_break() {
    let by_name = Arc::new(route("/users/<str:name>", "GET"));
    let me = Arc::new(route("/users/me", "GET"));

    let mut collection = RouteCollection::new();
    collection.add(Arc::clone(&by_name));
    collection.add(Arc::clone(&me));
    let matcher = Matcher::new(collection);

    let matched = matcher.match_route("/users/me", Method::Get).unwrap();
    assert!(Arc::ptr_eq(&matched.route, &me));

    let matched = matcher.match_route("/users/alice", Method::Get).unwrap();
    assert!(Arc::ptr_eq(&matched.route, &by_name));
}

#[test]
fn uuid_placeholder_requires_canonical_form() {
    let matcher = Matcher::new(RouteCollection::from_routes([route(
        "/objects/<uuid:id>",
        "GET",
    )]));

    let id = "550e8400-e29b-41d4-a716-446655440000";
    let matched = matcher
        .match_route(&format!("/objects/{id}"), Method::Get)
        .unwrap();
    assert_eq!(matched.params.get_str("id"), Some(id));

    assert!(matcher
        .match_route("/objects/550e8400e29b41d4a716446655440000", Method::Get)
        .is_err());
}

#[test]
fn wildcard_captures_joined_remainder() {
    let matcher = Matcher::new(RouteCollection::from_routes([route(
        "/files/<path:rest>",
        "GET",
    )]));

    let matched = matcher
        .match_route("/files/docs/guide/intro.md", Method::Get)
        .unwrap();
    assert_eq!(matched.params.get_str("rest"), Some("docs/guide/intro.md"));

    // Trailing slashes miss the wildcard just like every other route shape.
    assert!(matches!(
        matcher.match_route("/files/docs/", Method::Get),
        Err(MatchError::NotFound { .. })
    ));
}

#[test]
fn different_segment_counts_never_match() {
    let matcher = Matcher::new(RouteCollection::from_routes([route(
        "/a/<str:x>/c",
        "GET",
    )]));

    assert!(matcher.match_route("/a/b", Method::Get).is_err());
    assert!(matcher.match_route("/a/b/c/d", Method::Get).is_err());
    assert!(matcher.match_route("/a/b/c", Method::Get).is_ok());
}

#[test]
fn reregistering_one_method_keeps_the_other() {
    let both = Arc::new(route("/things/<int:id>", "GET,POST"));
    let post_only = Arc::new(route("/things/<int:id>", "POST"));

    let mut collection = RouteCollection::new();
    collection.add(Arc::clone(&both));
    collection.add(Arc::clone(&post_only));
    let matcher = Matcher::new(collection);

    let get = matcher.match_route("/things/1", Method::Get).unwrap();
    let post = matcher.match_route("/things/1", Method::Post).unwrap();
    assert!(Arc::ptr_eq(&get.route, &both));
    assert!(Arc::ptr_eq(&post.route, &post_only));
}

#[test]
fn concurrent_reads_after_registration() {
    let mut collection = RouteCollection::new();
    collection.add(route("/users/<int:id>", "GET"));
    let matcher = Arc::new(Matcher::new(collection));

    let handles: Vec<_> = (0..4i64)
        .map(|i| {
            let matcher = Arc::clone(&matcher);
            std::thread::spawn(move || {
                let matched = matcher
                    .match_route(&format!("/users/{i}"), Method::Get)
                    .unwrap();
                assert_eq!(matched.params.get_int("id"), Some(i));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn url_for_round_trips_a_named_route() {
    let mut collection = RouteCollection::new();
    collection.add(
        route("/posts/<int:id>", "GET")
            .with_name("posts.detail")
            .unwrap(),
    );

    let params: HashMap<String, String> = [("id".to_string(), "42".to_string())]
        .into_iter()
        .collect();
    let url = collection.url_for("posts.detail", &params).unwrap();

    let matcher = Matcher::new(collection);
    let matched = matcher.match_route(&url, Method::Get).unwrap();
    assert_eq!(matched.params.get_int("id"), Some(42));
}

#[test]
fn params_serialize_for_the_host_layer() {
    let matcher = Matcher::new(RouteCollection::from_routes([route(
        "/posts/<int:id>/<str:slug>",
        "GET",
    )]));

    let matched = matcher.match_route("/posts/7/intro", Method::Get).unwrap();
    let json = serde_json::to_value(&matched.params).unwrap();
    assert_eq!(json, serde_json::json!({ "id": 7, "slug": "intro" }));
}
