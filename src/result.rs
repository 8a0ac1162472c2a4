//! Result and error types representing the outcome of code emission.

use thiserror::Error;

/// An emission error.
///
/// When the emitter fails to produce finalized machine code, it returns one
/// of these error codes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodegenError {
    /// A label was referenced by an instruction but never bound to an
    /// offset before finalization.
    #[error("Label {0} is used but never bound")]
    UnboundLabel(u32),

    /// A PC-relative reference resolved to an offset outside the range of
    /// its instruction field.
    #[error("PC-relative offset {offset} does not fit in a {kind} field")]
    OffsetOutOfRange {
        /// The label-use kind whose field overflowed.
        kind: &'static str,
        /// The resolved byte offset.
        offset: i64,
    },

    /// The code region grew beyond what a `CodeOffset` can address.
    #[error("Code for function is too large")]
    CodeTooLarge,
}

/// A convenient alias for a `Result` that uses `CodegenError` as the error
/// type.
pub type CodegenResult<T> = Result<T, CodegenError>;
