use super::{Error, Scope};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

/// Diagnostic is a problem found at a location of a configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// JSON pointer of the offending location.
    pub path: String,
    pub error: Error,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        if self.path.is_empty() {
            write!(f, "{severity}: {}", self.error)
        } else {
            write!(f, "{severity}: {}: {}", self.path, self.error)
        }
    }
}

/// Diagnostics accumulate every problem found while transcoding a document.
///
/// A location holds at most one error: an error pushed at a location which
/// already has one is dropped, so that structural validation and conversion
/// don't report the same problem twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_error(&mut self, scope: Scope, error: Error) {
        let path = scope.to_string();

        if self
            .0
            .iter()
            .any(|d| d.severity == Severity::Error && d.path == path)
        {
            tracing::debug!(%path, %error, "dropping repeated error at location");
            return;
        }
        self.0.push(Diagnostic {
            severity: Severity::Error,
            path,
            error,
        });
    }

    pub fn push_warning(&mut self, scope: Scope, error: Error) {
        self.0.push(Diagnostic {
            severity: Severity::Warning,
            path: scope.to_string(),
            error,
        });
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.0
    }

    /// Map into `value` if there are no error-severity diagnostics,
    /// or into Self if there are.
    pub fn ok_or_errors<T>(self, value: T) -> Result<T, Self> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(value)
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for diagnostic in self.0.iter() {
            writeln!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_one_error_per_location() {
        let root = Scope::Root;
        let name = root.push_prop("name");
        let mut diagnostics = Diagnostics::new();

        Error::Invalid {
            message: "name cannot be empty".to_string(),
        }
        .push(name, &mut diagnostics);
        Error::MissingField { field: "name" }.push(name, &mut diagnostics);
        Error::Deprecated {
            field: "priority",
            instead: "set override.priority of each rule",
        }
        .push_warning(root.push_prop("priority"), &mut diagnostics);
        Error::NoVariantSelected.push(root, &mut diagnostics);

        insta::assert_snapshot!(diagnostics.to_string(), @r"
        error: /name: name cannot be empty
        warning: /priority: priority is deprecated: set override.priority of each rule
        error: type_definition must set one alert type, but none is set
        ");

        assert_eq!(diagnostics.errors().count(), 2);
        assert!(diagnostics.clone().ok_or_errors(()).is_err());
    }

    #[test]
    fn test_warnings_alone_succeed() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        Error::Deprecated {
            field: "priority",
            instead: "set override.priority of each rule",
        }
        .push_warning(root.push_prop("priority"), &mut diagnostics);

        assert!(!diagnostics.has_errors());
        assert_eq!(diagnostics.ok_or_errors(42).unwrap(), 42);
    }
}
