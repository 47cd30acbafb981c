/// Error arising when a value cannot be written in its RFC 2445 form
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    #[error("year {0} cannot be written with four digits")]
    YearOutOfRange(i32),
    #[error("UTC offset of {0} seconds does not fit into HHMM")]
    UtcOffsetOutOfRange(i32),
}
