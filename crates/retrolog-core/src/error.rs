//! # Error Types
//!
//! Errors raised while rendering a log line.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.

use thiserror::Error;

use crate::types::ArgKind;

/// Main error type for template rendering and output
///
/// [`LevelPrinter::log`](crate::LevelPrinter::log) never returns these; they
/// are surfaced by the `try_*` operations and by [`Template`](crate::Template).
///
/// ## Error Categories
///
/// 1. **Template errors**: UnsupportedConversion, IncompleteSpecifier, FieldTooLarge
/// 2. **Argument errors**: MissingArgument, ArgumentMismatch
/// 3. **I/O errors**: Io (the output stream rejected the write)
#[derive(Error, Debug)]
pub enum LogError
{
    /// The template needs more arguments than were supplied
    ///
    /// `index` is the zero-based position of the first missing argument.
    /// `*` widths and precisions consume arguments too.
    #[error("Missing argument {index} for conversion '%{conversion}'")]
    MissingArgument
    {
        /// Position of the missing argument
        index: usize,
        /// Conversion character that wanted it
        conversion: char,
    },

    /// An argument cannot be rendered by the conversion that consumes it
    ///
    /// Examples:
    /// - `%s` given a float
    /// - `%f` given a string
    /// - `*` width given anything but an integer
    #[error("Argument {index} is {found}, which '%{conversion}' cannot render")]
    ArgumentMismatch
    {
        /// Position of the offending argument
        index: usize,
        /// Conversion character that consumed it
        conversion: char,
        /// Kind of the argument actually supplied
        found: ArgKind,
    },

    /// The template uses a conversion this engine does not implement
    ///
    /// `%n` (write-back) and `%a` (hex float) fall in this category, as does
    /// any character that is not a printf conversion at all.
    #[error("Unsupported conversion '%{conversion}' at byte {offset}")]
    UnsupportedConversion
    {
        /// The conversion character
        conversion: char,
        /// Byte offset of the `%` that started the specifier
        offset: usize,
    },

    /// The template ends in the middle of a conversion specifier
    #[error("Template ends inside the specifier starting at byte {offset}")]
    IncompleteSpecifier
    {
        /// Byte offset of the `%` that started the specifier
        offset: usize,
    },

    /// A width or precision exceeds `i32::MAX`
    ///
    /// Applies to counts written in the template and to `*` counts taken
    /// from the arguments. glibc refuses these with `EOVERFLOW`.
    #[error("Width or precision of '%{conversion}' exceeds {}", i32::MAX)]
    FieldTooLarge
    {
        /// Conversion character the count belongs to
        conversion: char,
    },

    /// I/O error while writing the rendered line
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, LogError>`
///
/// ```rust
/// use retrolog_core::error::LogResult;
/// fn foo() -> LogResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type LogResult<T> = std::result::Result<T, LogError>;
