//! Errors and error specific types for universal use

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
pub type CustomResult<T, E> = error_stack::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsingError {
    #[error("Failed to parse struct: {0}")]
    StructParseFailure(&'static str),
    #[error("Failed to serialize to {0} format")]
    EncodeError(&'static str),
    #[error("Failed to parse {value:?} as a decimal number")]
    StringToDecimalConversionFailure { value: String },
    #[error("Failed to convert the floating point value to a decimal")]
    FloatToDecimalConversionFailure,
    #[error("Failed to format date")]
    DateTimeFormattingFailure,
}
