const PARAM_DELIMITER: char = ';';
const VALUE_DELIMITER: char = ':';
const PARAM_NAME_DELIMITER: char = '=';
const LIST_DELIMITER: &str = ",";
const ENUM_LIST_DELIMITER: &str = ";";

/// Line terminator of every content line
pub const CRLF: &str = "\r\n";
/// Inserted between the parts of a folded content line
pub const FOLD_CONTINUATION: &str = "\r\n ";
/// RFC 2445 recommends content lines of at most 75 octets
pub const DEFAULT_MAX_LINE_LENGTH: usize = 75;

mod name;
pub use name::Name;

pub mod component;
pub use component::Component;

pub mod property;
pub use property::{Parameter, Property};

pub mod generator;
pub use generator::{Emitter, GeneratorError, GeneratorOptions, fold};

pub mod types;
pub use types::{Value, ValueError};
