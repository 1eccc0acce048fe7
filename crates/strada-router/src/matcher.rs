//! Request matching against the registered route set.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::trace;

use crate::collection::{PatternEntry, RouteCollection};
use crate::error::MatchError;
use crate::method::Method;
use crate::params::PathParams;
use crate::route::Route;

/// A successful match: the resolved route and its extracted parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The route that matched.
    pub route: Arc<Route>,
    /// Typed placeholder values extracted from the path.
    pub params: PathParams,
}

/// Resolves request paths against a [`RouteCollection`].
///
/// The matcher holds the collection and is stateless per call: the indexes
/// are maintained eagerly by [`RouteCollection::add`], so no separate build
/// step exists. [`match_route`](Self::match_route) takes `&self` and touches
/// no interior mutability, which makes a shared matcher (e.g. behind an
/// `Arc`) safe for concurrent lock-free reads once registration is done.
/// Registering after matching has begun requires `&mut` access via
/// [`collection_mut`](Self::collection_mut), so the borrow checker enforces
/// the single-writer rule.
///
/// # Example
///
/// ```
/// use strada_router::{Matcher, Method, Route, RouteCollection};
///
/// let mut collection = RouteCollection::new();
/// collection.add(Route::new("/api/v1/tests/<int:test>", "GET").unwrap());
///
/// let matcher = Matcher::new(collection);
/// let matched = matcher.match_route("/api/v1/tests/42", Method::Get).unwrap();
/// assert_eq!(matched.params.get_int("test"), Some(42));
/// ```
#[derive(Debug, Default)]
pub struct Matcher {
    collection: RouteCollection,
}

/// Best candidate seen so far while scanning pattern entries.
struct Candidate<'a> {
    entry: &'a PatternEntry,
    route: &'a Arc<Route>,
    /// Sequence of the registration that installed this (URI, method) slot.
    seq: u64,
    params: PathParams,
}

impl Matcher {
    /// Creates a matcher over a route collection.
    pub fn new(collection: RouteCollection) -> Self {
        Self { collection }
    }

    /// Returns the underlying collection.
    pub fn collection(&self) -> &RouteCollection {
        &self.collection
    }

    /// Returns the underlying collection for further registration.
    ///
    /// Exclusive access: no concurrent match calls can run while this borrow
    /// is alive.
    pub fn collection_mut(&mut self) -> &mut RouteCollection {
        &mut self.collection
    }

    /// Consumes the matcher, returning the collection.
    pub fn into_collection(self) -> RouteCollection {
        self.collection
    }

    /// Resolves a request path and method to a registered route.
    ///
    /// Patternless routes are consulted first via the exact-URI index and
    /// always win over a pattern that happens to also match the literal
    /// path. Pattern candidates are limited to those whose segment shape can
    /// fit the path; among several matches the most specific pattern wins,
    /// with registration order breaking exact ties.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotFound`] when no route shape matches the path
    /// at all, and [`MatchError::MethodNotAllowed`] (carrying the methods
    /// that would have matched) when a shape matched but the method did not.
    pub fn match_route(&self, path: &str, method: Method) -> Result<RouteMatch, MatchError> {
        if let Some(route) = self.collection.get_by_uri_and_method(path, method) {
            trace!(path, %method, uri = route.uri(), "exact match");
            return Ok(RouteMatch {
                route,
                params: PathParams::new(),
            });
        }

        // Methods that would have matched this path, for the 405 payload.
        let mut allowed: Vec<Method> = self.collection.methods_for_uri(path).collect();
        let mut shape_matched = !allowed.is_empty();

        let segment_count = path.split('/').skip(1).count();
        let mut best: Option<Candidate<'_>> = None;

        for entry in self.collection.pattern_candidates(segment_count) {
            let Some(params) = entry.pattern().match_path(path) else {
                continue;
            };

            shape_matched = true;
            for m in entry.methods() {
                if !allowed.contains(&m) {
                    allowed.push(m);
                }
            }

            let Some(&(ref route, seq)) = entry.route_for(method) else {
                continue;
            };

            let wins = best.as_ref().is_none_or(|current| {
                match entry.pattern().cmp_specificity(current.entry.pattern()) {
                    Ordering::Greater => true,
                    Ordering::Equal => seq > current.seq,
                    Ordering::Less => false,
                }
            });
            if wins {
                best = Some(Candidate {
                    entry,
                    route,
                    seq,
                    params,
                });
            }
        }

        if let Some(candidate) = best {
            trace!(
                path,
                %method,
                pattern = candidate.entry.pattern().pattern(),
                "pattern match"
            );
            return Ok(RouteMatch {
                route: Arc::clone(candidate.route),
                params: candidate.params,
            });
        }

        if shape_matched {
            allowed.sort_unstable();
            Err(MatchError::MethodNotAllowed {
                method,
                path: path.to_string(),
                allowed,
            })
        } else {
            Err(MatchError::NotFound {
                method,
                path: path.to_string(),
            })
        }
    }
}
