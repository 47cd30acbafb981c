//! Render components and properties to iCalendar text.
//!
//! # Examples
//!
//! ```rust
//! use icalgen::{Component, Emitter};
//!
//! let mut event = Component::new("vevent");
//! event.add("summary", "foo");
//!
//! assert_eq!(event.generate(), "BEGIN:VEVENT\r\nSUMMARY:foo\r\nEND:VEVENT\r\n");
//! ```

mod error;
pub use error::GeneratorError;

mod fold;
pub use fold::fold;

mod ical;

use crate::DEFAULT_MAX_LINE_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Content lines longer than this many octets are folded
    pub max_line_length: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl GeneratorOptions {
    #[must_use]
    pub fn max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }
}

/// Produces CRLF terminated iCalendar text.
///
/// The strict `try_` methods fail on the first value that cannot be encoded.
/// The others leave such properties out, log an error and render the rest.
pub trait Emitter {
    fn try_generate_with(&self, options: &GeneratorOptions) -> Result<String, GeneratorError>;

    fn generate_with(&self, options: &GeneratorOptions) -> String;

    fn try_generate(&self) -> Result<String, GeneratorError> {
        self.try_generate_with(&GeneratorOptions::default())
    }

    fn generate(&self) -> String {
        self.generate_with(&GeneratorOptions::default())
    }
}
