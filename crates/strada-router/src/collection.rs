//! Registered route storage and indexes.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::method::Method;
use crate::pattern::PathPattern;
use crate::route::Route;

/// A pattern route's slot in the pattern index.
#[derive(Debug, Clone)]
pub(crate) struct PatternEntry {
    /// The registered pattern URI this slot belongs to.
    uri: String,
    /// Compiled pattern, shared by every method on this URI.
    pattern: PathPattern,
    /// The route serving each method on this URI, with the sequence number
    /// of the registration that installed it. Recency is tracked per
    /// (URI, method): re-registering one method must not bump the tie-break
    /// precedence of the URI's other, untouched methods.
    by_method: HashMap<Method, (Arc<Route>, u64)>,
}

impl PatternEntry {
    pub(crate) fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// Methods served by this URI.
    pub(crate) fn methods(&self) -> impl Iterator<Item = Method> + '_ {
        self.by_method.keys().copied()
    }

    /// The route serving `method`, with its registration sequence.
    pub(crate) fn route_for(&self, method: Method) -> Option<&(Arc<Route>, u64)> {
        self.by_method.get(&method)
    }
}

/// Owns the registered routes and the indexes the matcher consults.
///
/// Three indexes are kept in sync on every [`add`](Self::add): an exact-URI
/// index for patternless routes, a pattern index bucketed by segment count
/// (wildcard patterns tracked separately), and a name index. Re-registering
/// an existing URI/method combination overwrites only that entry; name
/// collisions are last-write-wins.
#[derive(Debug, Default)]
pub struct RouteCollection {
    /// Exact-URI index: literal URI, then method, to route.
    by_uri: HashMap<String, HashMap<Method, Arc<Route>>>,
    /// Name index for reverse lookup.
    by_name: HashMap<String, Arc<Route>>,
    /// Pattern index for fixed-length patterns, bucketed by segment count.
    fixed: HashMap<usize, Vec<PatternEntry>>,
    /// Pattern index for `path`-wildcard patterns.
    wildcard: Vec<PatternEntry>,
    /// Next registration sequence number.
    next_seq: u64,
}

impl RouteCollection {
    /// Creates an empty collection with freshly-created indexes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from an initial sequence of routes.
    pub fn from_routes<I>(routes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arc<Route>>,
    {
        let mut collection = Self::new();
        for route in routes {
            collection.add(route);
        }
        collection
    }

    /// Registers a route, updating every index.
    ///
    /// Accepts a [`Route`] by value or an already-shared `Arc<Route>`.
    pub fn add(&mut self, route: impl Into<Arc<Route>>) {
        let route = route.into();
        debug!(uri = route.uri(), methods = ?route.methods(), "registering route");

        let by_method = self.by_uri.entry(route.uri().to_string()).or_default();
        for &method in route.methods() {
            by_method.insert(method, Arc::clone(&route));
        }

        if !route.pattern().is_static() {
            self.index_pattern(&route);
        }

        if let Some(name) = route.name() {
            self.by_name.insert(name.to_string(), Arc::clone(&route));
        }
    }

    /// Inserts or refreshes the pattern-index slot for `route`'s URI.
    fn index_pattern(&mut self, route: &Arc<Route>) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let bucket = if route.pattern().is_wildcard() {
            &mut self.wildcard
        } else {
            self.fixed
                .entry(route.pattern().segment_count())
                .or_default()
        };

        if let Some(entry) = bucket.iter_mut().find(|e| e.uri == route.uri()) {
            for &method in route.methods() {
                entry.by_method.insert(method, (Arc::clone(route), seq));
            }
        } else {
            let mut by_method = HashMap::new();
            for &method in route.methods() {
                by_method.insert(method, (Arc::clone(route), seq));
            }
            bucket.push(PatternEntry {
                uri: route.uri().to_string(),
                pattern: route.pattern().clone(),
                by_method,
            });
        }
    }

    /// Looks up a route by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<Route>> {
        self.by_name.get(name).cloned()
    }

    /// Looks up a route by literal URI and method.
    ///
    /// This consults the exact index only; pattern matching is the matcher's
    /// responsibility.
    pub fn get_by_uri_and_method(&self, uri: &str, method: Method) -> Option<Arc<Route>> {
        self.by_uri.get(uri).and_then(|row| row.get(&method)).cloned()
    }

    /// Generates a concrete URL for a named route.
    pub fn url_for(&self, name: &str, params: &HashMap<String, String>) -> Option<String> {
        self.by_name
            .get(name)
            .and_then(|route| route.pattern().reverse(params))
    }

    /// Returns the number of distinct registered URIs.
    pub fn len(&self) -> usize {
        self.by_uri.len()
    }

    /// Returns `true` when no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.by_uri.is_empty()
    }

    /// Methods registered for a literal URI, if any.
    pub(crate) fn methods_for_uri<'a>(&'a self, uri: &str) -> impl Iterator<Item = Method> + 'a {
        self.by_uri
            .get(uri)
            .into_iter()
            .flat_map(|row| row.keys().copied())
    }

    /// Pattern candidates for a request with the given segment count: the
    /// matching fixed-length bucket plus every wildcard whose fixed prefix
    /// fits.
    pub(crate) fn pattern_candidates(
        &self,
        segment_count: usize,
    ) -> impl Iterator<Item = &PatternEntry> {
        self.fixed.get(&segment_count).into_iter().flatten().chain(
            self.wildcard
                .iter()
                .filter(move |e| segment_count >= e.pattern.segment_count()),
        )
    }
}
