//! Error types for route construction and matching.

use thiserror::Error;

use crate::method::Method;

/// Errors raised while defining a route.
///
/// These are registration-time programmer errors: they surface immediately at
/// the point of invalid input and no partially-validated route survives them.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The URI pattern is malformed.
    #[error("invalid uri {uri:?}: {reason}")]
    InvalidUri {
        /// The offending pattern string.
        uri: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The method list could not be parsed or contains an unknown verb.
    #[error("invalid methods: {0}")]
    InvalidMethods(String),

    /// The route name is unusable.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// The resource reference has the wrong shape.
    #[error("invalid resource: {0}")]
    InvalidResource(String),
}

/// Outcome of a failed match.
///
/// Unlike [`RouteError`], these are ordinary request-time results the server
/// layer inspects to pick a 404 or 405 response. A path that matches no route
/// shape at all is [`MatchError::NotFound`]; a path whose shape matched but
/// whose method did not is [`MatchError::MethodNotAllowed`]. The two are
/// never conflated.
#[derive(Debug, Error)]
pub enum MatchError {
    /// No route matched the request path.
    #[error("no route matched: {method} {path}")]
    NotFound {
        /// The requested method.
        method: Method,
        /// The requested path.
        path: String,
    },

    /// The path matched a route shape, but not for this method.
    #[error("method not allowed: {method} for {path}")]
    MethodNotAllowed {
        /// The requested method.
        method: Method,
        /// The requested path.
        path: String,
        /// Methods that would have matched this path.
        allowed: Vec<Method>,
    },
}

/// Result type alias for route definition and registration.
pub type Result<T> = std::result::Result<T, RouteError>;
