//! Typed property and parameter values and their RFC 2445 encodings.

mod datetime;
pub use datetime::*;
mod duration;
pub use duration::*;
mod error;
pub use error::*;
mod offset;
pub use offset::*;
mod text;
pub use text::*;
mod value;
pub use value::*;
