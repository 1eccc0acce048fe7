//! HTTP methods accepted by routes.

use crate::error::{Result, RouteError};

/// HTTP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// GET method
    Get,
    /// POST method
    Post,
    /// PATCH method
    Patch,
    /// PUT method
    Put,
    /// DELETE method
    Delete,
    /// OPTIONS method
    Options,
    /// HEAD method
    Head,
}

impl Method {
    /// Parses a method from a string, case-insensitively.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PATCH" => Some(Self::Patch),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "OPTIONS" => Some(Self::Options),
            "HEAD" => Some(Self::Head),
            _ => None,
        }
    }

    /// Returns the method as an uppercase string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn parse_one(token: &str) -> Result<Method> {
    Method::from_str(token).ok_or_else(|| {
        RouteError::InvalidMethods(format!(
            "{token} is an invalid HTTP method, valid methods are \
             GET, POST, PATCH, PUT, DELETE, OPTIONS, HEAD"
        ))
    })
}

/// Conversion of the accepted method-list inputs into a validated sequence.
///
/// A route's methods may be given as a single method string (`"get"`), a
/// comma-separated string (`"GET,POST"`), a slice or `Vec` of strings, or
/// typed [`Method`] values. The resulting sequence preserves order and
/// duplicates; only emptiness and unknown verbs are rejected.
pub trait IntoMethods {
    /// Validates and converts `self` into a method sequence.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidMethods`] when the input is empty or any
    /// element is not one of the seven HTTP verbs.
    fn into_methods(self) -> Result<Vec<Method>>;
}

impl IntoMethods for Method {
    fn into_methods(self) -> Result<Vec<Method>> {
        Ok(vec![self])
    }
}

impl IntoMethods for Vec<Method> {
    fn into_methods(self) -> Result<Vec<Method>> {
        if self.is_empty() {
            return Err(RouteError::InvalidMethods(
                "at least one method is required".to_string(),
            ));
        }
        Ok(self)
    }
}

impl IntoMethods for &[Method] {
    fn into_methods(self) -> Result<Vec<Method>> {
        self.to_vec().into_methods()
    }
}

impl IntoMethods for &str {
    fn into_methods(self) -> Result<Vec<Method>> {
        self.split(',').map(parse_one).collect()
    }
}

impl IntoMethods for String {
    fn into_methods(self) -> Result<Vec<Method>> {
        self.as_str().into_methods()
    }
}

impl IntoMethods for &[&str] {
    fn into_methods(self) -> Result<Vec<Method>> {
        if self.is_empty() {
            return Err(RouteError::InvalidMethods(
                "at least one method is required".to_string(),
            ));
        }
        self.iter().map(|s| parse_one(s)).collect()
    }
}

impl IntoMethods for Vec<&str> {
    fn into_methods(self) -> Result<Vec<Method>> {
        self.as_slice().into_methods()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!(Method::from_str("GET"), Some(Method::Get));
        assert_eq!(Method::from_str("post"), Some(Method::Post));
        assert_eq!(Method::from_str("INVALID"), None);
    }

    #[test]
    fn test_single_str_becomes_list() {
        let methods = "GET".into_methods().unwrap();
        assert_eq!(methods, vec![Method::Get]);
    }

    #[test]
    fn test_str_is_uppercased() {
        assert_eq!("get".into_methods().unwrap(), vec![Method::Get]);
        assert_eq!(vec!["get"].into_methods().unwrap(), vec![Method::Get]);
    }

    #[test]
    fn test_comma_separated_str_splits() {
        let methods = "GET,POST".into_methods().unwrap();
        assert_eq!(methods, vec![Method::Get, Method::Post]);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let methods = "GET,GET".into_methods().unwrap();
        assert_eq!(methods, vec![Method::Get, Method::Get]);
    }

    #[test]
    fn test_all_seven_verbs() {
        let methods = "GET,POST,PUT,PATCH,DELETE,OPTIONS,HEAD"
            .into_methods()
            .unwrap();
        assert_eq!(methods.len(), 7);
    }

    #[test]
    fn test_unknown_verb_is_rejected() {
        assert!(matches!(
            "SOME".into_methods(),
            Err(RouteError::InvalidMethods(_))
        ));
        assert!(matches!(
            vec!["GET", "SOME"].into_methods(),
            Err(RouteError::InvalidMethods(_))
        ));
    }

    #[test]
    fn test_empty_inputs_are_rejected() {
        assert!(Vec::<Method>::new().into_methods().is_err());
        assert!(Vec::<&str>::new().into_methods().is_err());
        assert!("".into_methods().is_err());
    }
}
