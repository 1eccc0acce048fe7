//! URI pattern parsing and matching.

use std::cmp::Ordering;
use std::collections::HashMap;

use regex::Regex;

use crate::error::{Result, RouteError};
use crate::params::{ParamValue, PathParams};

/// The typed placeholder kinds accepted inside `<kind:name>` segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// One or more ASCII digits, optional leading `-`; extracted as `i64`.
    Int,
    /// Digits with exactly one decimal point; extracted as `f64`.
    Float,
    /// One or more characters excluding `/`.
    Str,
    /// Canonical 8-4-4-4-12 hexadecimal UUID form.
    Uuid,
    /// One or more characters including `/`; consumes the rest of the path
    /// and is only valid as the final segment.
    Path,
}

impl ParamKind {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "str" => Some(Self::Str),
            "uuid" => Some(Self::Uuid),
            "path" => Some(Self::Path),
            _ => None,
        }
    }

    /// Returns the kind as it appears in pattern syntax.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Uuid => "uuid",
            Self::Path => "path",
        }
    }

    fn regex_fragment(self) -> &'static str {
        match self {
            Self::Int => "(-?[0-9]+)",
            Self::Float => "([0-9]+\\.[0-9]+)",
            Self::Str => "([^/]+)",
            Self::Uuid => {
                "([0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12})"
            }
            // Must not end in '/': pattern matching stays as strict about
            // trailing slashes as the exact-URI index.
            Self::Path => "(.*[^/])",
        }
    }

    /// Converts a raw captured value into its typed form.
    ///
    /// Returns `None` when the capture cannot be represented (an `int`
    /// capture overflowing `i64`), which eliminates the candidate.
    fn convert(self, raw: &str) -> Option<ParamValue> {
        match self {
            Self::Int => raw.parse::<i64>().ok().map(ParamValue::Int),
            Self::Float => raw.parse::<f64>().ok().map(ParamValue::Float),
            Self::Str | Self::Uuid | Self::Path => Some(ParamValue::Str(raw.to_string())),
        }
    }
}

/// A segment in a path pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// A literal string segment.
    Literal(String),
    /// A typed placeholder segment (e.g., `<int:id>`).
    Param {
        /// Parameter key used for extraction.
        name: String,
        /// Declared placeholder kind.
        kind: ParamKind,
    },
}

impl PathSegment {
    /// Specificity rank: literals outrank typed placeholders, which outrank
    /// the `path` wildcard.
    fn rank(&self) -> u8 {
        match self {
            Self::Literal(_) => 2,
            Self::Param {
                kind: ParamKind::Path,
                ..
            } => 0,
            Self::Param { .. } => 1,
        }
    }
}

/// A compiled path pattern for matching URLs.
///
/// Pattern syntax:
/// - `/users` - Literal path
/// - `/users/<int:id>` - Path with a typed placeholder
/// - `/files/<path:rest>` - Wildcard placeholder (matches rest of path)
///
/// # Example
///
/// ```
/// use strada_router::PathPattern;
///
/// let pattern = PathPattern::parse("/posts/<int:id>/comments/<int:comment_id>").unwrap();
/// let params = pattern.match_path("/posts/123/comments/456").unwrap();
/// assert_eq!(params.get_int("id"), Some(123));
/// assert_eq!(params.get_int("comment_id"), Some(456));
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// The original pattern string.
    pattern: String,
    /// Parsed segments.
    segments: Vec<PathSegment>,
    /// Compiled regex for matching.
    regex: Regex,
    /// Parameter names and kinds in order of appearance.
    params: Vec<(String, ParamKind)>,
}

fn invalid(uri: &str, reason: impl Into<String>) -> RouteError {
    RouteError::InvalidUri {
        uri: uri.to_string(),
        reason: reason.into(),
    }
}

fn parse_placeholder(uri: &str, segment: &str) -> Result<(String, ParamKind)> {
    let inner = segment
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| invalid(uri, format!("malformed placeholder segment {segment:?}")))?;

    let (kind_token, name) = inner
        .split_once(':')
        .ok_or_else(|| invalid(uri, format!("placeholder {segment:?} must be <kind:name>")))?;

    let kind = ParamKind::from_token(kind_token).ok_or_else(|| {
        invalid(
            uri,
            format!(
                "unknown placeholder kind {kind_token:?}, \
                 valid kinds are int, float, str, uuid, path"
            ),
        )
    })?;

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid(
            uri,
            format!("placeholder name {name:?} must be a non-empty identifier"),
        ));
    }

    Ok((name.to_string(), kind))
}

impl PathPattern {
    /// Parses and compiles a path pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidUri`] when the pattern does not start
    /// with `/`, ends with `/`, contains an empty segment, or contains a
    /// malformed, unknown, duplicated or misplaced placeholder.
    pub fn parse(pattern: &str) -> Result<Self> {
        if !pattern.starts_with('/') {
            return Err(invalid(pattern, "uri should start with a /"));
        }
        if pattern.ends_with('/') {
            return Err(invalid(pattern, "uri should not end with a /"));
        }

        let parts: Vec<&str> = pattern.split('/').skip(1).collect();
        let mut segments = Vec::with_capacity(parts.len());
        let mut params: Vec<(String, ParamKind)> = Vec::new();
        let mut regex_str = String::from("^");

        for (i, part) in parts.iter().enumerate() {
            regex_str.push('/');

            if part.is_empty() {
                return Err(invalid(pattern, "uri should not contain empty segments"));
            }

            if part.contains('<') || part.contains('>') {
                let (name, kind) = parse_placeholder(pattern, part)?;
                if params.iter().any(|(existing, _)| *existing == name) {
                    return Err(invalid(
                        pattern,
                        format!("duplicate placeholder name {name:?}"),
                    ));
                }
                if kind == ParamKind::Path && i + 1 != parts.len() {
                    return Err(invalid(
                        pattern,
                        "a path placeholder must be the final segment",
                    ));
                }
                regex_str.push_str(kind.regex_fragment());
                params.push((name.clone(), kind));
                segments.push(PathSegment::Param { name, kind });
            } else {
                regex_str.push_str(&regex::escape(part));
                segments.push(PathSegment::Literal((*part).to_string()));
            }
        }

        regex_str.push('$');

        let regex = Regex::new(&regex_str)
            .map_err(|e| invalid(pattern, format!("pattern did not compile: {e}")))?;

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
            regex,
            params,
        })
    }

    /// Attempts to match a path against this pattern.
    ///
    /// Returns the extracted, type-converted parameters if the path matches.
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let caps = self.regex.captures(path)?;

        let mut params = PathParams::new();

        for (i, (name, kind)) in self.params.iter().enumerate() {
            let raw = caps.get(i + 1)?.as_str();
            params.insert(name.clone(), kind.convert(raw)?);
        }

        Some(params)
    }

    /// Returns the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the parsed segments.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the number of segments in the pattern.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` when the pattern has no placeholders.
    pub fn is_static(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns `true` when the final segment is a `path` wildcard.
    pub fn is_wildcard(&self) -> bool {
        matches!(
            self.segments.last(),
            Some(PathSegment::Param {
                kind: ParamKind::Path,
                ..
            })
        )
    }

    /// Compares two patterns by specificity, segment by segment: a literal
    /// outranks a typed placeholder, a typed placeholder outranks the `path`
    /// wildcard, and when one pattern is a prefix of the other the longer
    /// one wins. `Ordering::Greater` means `self` is the more specific.
    pub(crate) fn cmp_specificity(&self, other: &Self) -> Ordering {
        self.segments
            .iter()
            .map(PathSegment::rank)
            .cmp(other.segments.iter().map(PathSegment::rank))
    }

    /// Generates a concrete path from parameter values.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use strada_router::PathPattern;
    ///
    /// let pattern = PathPattern::parse("/posts/<int:id>").unwrap();
    /// let params: HashMap<String, String> =
    ///     [("id".to_string(), "123".to_string())]
    ///     .into_iter()
    ///     .collect();
    /// let path = pattern.reverse(&params).unwrap();
    /// assert_eq!(path, "/posts/123");
    /// ```
    pub fn reverse(&self, params: &HashMap<String, String>) -> Option<String> {
        let mut path = String::new();

        for segment in &self.segments {
            path.push('/');
            match segment {
                PathSegment::Literal(s) => path.push_str(s),
                PathSegment::Param { name, .. } => path.push_str(params.get(name)?),
            }
        }

        Some(path)
    }
}
