//! Route definition and validation.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, RouteError};
use crate::method::{IntoMethods, Method};
use crate::pattern::PathPattern;

/// An opaque handler handle bound to a route.
///
/// The core stores and returns it without interpreting it; dispatch (and any
/// downcasting to a concrete handler signature) belongs to the server layer.
pub type Handler = Arc<dyn Any + Send + Sync>;

/// Handler binding carried by a route.
#[derive(Clone)]
pub enum Resource {
    /// A callable handle bound directly at registration time.
    Handler(Handler),
    /// A deferred reference in `module.path.ClassName@methodName` form,
    /// resolved by an external handler registry.
    Reference(String),
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handler(_) => f.write_str("Resource::Handler(..)"),
            Self::Reference(r) => write!(f, "Resource::Reference({r:?})"),
        }
    }
}

/// A single route definition.
///
/// A route is validated in full at construction; no partially-valid route
/// ever exists, and all fields are read-only afterwards.
///
/// # Example
///
/// ```
/// use strada_router::{Method, Route};
///
/// let route = Route::new("/api/v1/tests/<int:test>", "GET,POST")
///     .unwrap()
///     .with_name("tests.detail")
///     .unwrap();
/// assert_eq!(route.uri(), "/api/v1/tests/<int:test>");
/// assert_eq!(route.methods(), &[Method::Get, Method::Post]);
/// assert_eq!(route.name(), Some("tests.detail"));
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    /// The URI pattern string as registered.
    uri: String,
    /// Compiled form of the URI pattern.
    pattern: PathPattern,
    /// Allowed HTTP methods, order and duplicates preserved.
    methods: Vec<Method>,
    /// Optional route name for reverse lookup.
    name: Option<String>,
    /// Optional handler binding.
    resource: Option<Resource>,
}

impl Route {
    /// Creates a new route from a URI pattern and a method list.
    ///
    /// `methods` accepts a single method string (`"get"`), a comma-separated
    /// string (`"GET,POST"`), a slice/`Vec` of strings, or typed [`Method`]
    /// values.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidUri`] when the pattern is malformed and
    /// [`RouteError::InvalidMethods`] when the method list is empty or names
    /// an unknown verb.
    pub fn new(uri: &str, methods: impl IntoMethods) -> Result<Self> {
        let pattern = PathPattern::parse(uri)?;
        let methods = methods.into_methods()?;

        Ok(Self {
            uri: uri.to_string(),
            pattern,
            methods,
            name: None,
            resource: None,
        })
    }

    /// Sets the route name, used for reverse lookup.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidName`] when the name is empty.
    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RouteError::InvalidName(
                "name should be a non-empty string".to_string(),
            ));
        }
        self.name = Some(name);
        Ok(self)
    }

    /// Binds an opaque callable handle to the route.
    #[must_use]
    pub fn with_handler(mut self, handler: Handler) -> Self {
        self.resource = Some(Resource::Handler(handler));
        self
    }

    /// Binds a string resource reference to the route.
    ///
    /// The reference is shape-checked only, never resolved.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidResource`] unless the reference contains
    /// both a `.` and an `@`.
    pub fn with_resource(mut self, reference: impl Into<String>) -> Result<Self> {
        let reference = reference.into();
        if !reference.contains('.') || !reference.contains('@') {
            return Err(RouteError::InvalidResource(format!(
                "{reference:?} should be in the format package.module.ClassName@method"
            )));
        }
        self.resource = Some(Resource::Reference(reference));
        Ok(self)
    }

    /// Returns the URI pattern string.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the compiled URI pattern.
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// Returns the allowed methods, in registration order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Returns the route name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the bound resource, if set.
    pub fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }
}
