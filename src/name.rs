use derive_more::Deref;
use std::fmt;

/// Name of a component, property or parameter.
///
/// Names are case-insensitive. The original spelling is kept as is and only
/// uppercased when rendered, see the `Display` implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref)]
pub struct Name(String);

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as it was given
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Rendered form of the name: ASCII letters uppercased, everything else untouched.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_ascii_uppercase()
    }

    /// Case-insensitive comparison
    #[inline]
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.normalized())
    }
}
