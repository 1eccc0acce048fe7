//! # strada-router
//!
//! The route-definition and route-lookup core of an HTTP routing library.
//!
//! This crate provides:
//! - Immutable, validated route definitions with typed URI placeholders
//! - An indexed route collection with exact-URI and name lookup
//! - A matcher resolving (path, method) pairs without linear route scans
//! - Typed parameter extraction (`int`, `float`, `str`, `uuid`, `path`)
//! - Reverse URL generation for named routes
//!
//! The HTTP transport, request/response models, and handler dispatch live
//! outside this crate: the matcher receives a path string and a method and
//! returns a route handle, extracted parameters, or a typed miss.
//!
//! ## Quick Start
//!
//! ```
//! use strada_router::{MatchError, Matcher, Method, Route, RouteCollection};
//!
//! let mut collection = RouteCollection::new();
//! collection.add(Route::new("/users", "GET,POST").unwrap());
//! collection.add(Route::new("/users/<int:id>", "GET").unwrap());
//!
//! let matcher = Matcher::new(collection);
//!
//! let matched = matcher.match_route("/users/42", Method::Get).unwrap();
//! assert_eq!(matched.route.uri(), "/users/<int:id>");
//! assert_eq!(matched.params.get_int("id"), Some(42));
//!
//! // A path that matches a shape with the wrong method is a 405, not a 404.
//! match matcher.match_route("/users/42", Method::Delete) {
//!     Err(MatchError::MethodNotAllowed { allowed, .. }) => {
//!         assert_eq!(allowed, vec![Method::Get]);
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! ## Placeholder Syntax
//!
//! Routes use `<kind:name>` placeholder segments:
//!
//! ```
//! use strada_router::Route;
//!
//! let route = Route::new("/posts/<int:post>/files/<path:rest>", "GET").unwrap();
//! # assert_eq!(route.methods().len(), 1);
//! ```
//!
//! `int` matches signed digits, `float` digits with one decimal point, `str`
//! anything up to the next `/`, `uuid` the canonical 8-4-4-4-12 form, and
//! `path` consumes the rest of the path (final segment only). Extracted
//! values are converted: `int` to `i64`, `float` to `f64`, the rest kept as
//! strings.
//!
//! ## Precedence
//!
//! Patternless routes always win over patterns via an exact-URI index. Among
//! matching patterns, literal segments outrank placeholders position by
//! position, typed placeholders outrank the `path` wildcard, and remaining
//! ties go to the most recently registered route.
//!
//! ## Named Routes
//!
//! ```
//! use std::collections::HashMap;
//! use strada_router::{Route, RouteCollection};
//!
//! let mut collection = RouteCollection::new();
//! collection.add(
//!     Route::new("/users/<int:id>", "GET")
//!         .unwrap()
//!         .with_name("user_detail")
//!         .unwrap(),
//! );
//!
//! let params: HashMap<String, String> =
//!     [("id".to_string(), "123".to_string())].into_iter().collect();
//! assert_eq!(
//!     collection.url_for("user_detail", &params),
//!     Some("/users/123".to_string())
//! );
//! ```

mod collection;
mod error;
mod matcher;
mod method;
mod params;
mod pattern;
mod route;

pub use collection::RouteCollection;
pub use error::{MatchError, Result, RouteError};
pub use matcher::{Matcher, RouteMatch};
pub use method::{IntoMethods, Method};
pub use params::{ParamValue, PathParams};
pub use pattern::{ParamKind, PathPattern, PathSegment};
pub use route::{Handler, Resource, Route};
