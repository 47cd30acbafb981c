use crate::ValueError;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid value in property {property}: {source}")]
    InvalidValue {
        property: String,
        #[source]
        source: ValueError,
    },
}
