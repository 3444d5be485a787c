//! Error types for classification, tokenization, and inventory loading

use thiserror::Error;

/// Validation failures over the input text
///
/// All variants describe problems with the string being tokenised, never
/// transient or system conditions. The first failing character aborts the
/// current word; no partial token list is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The word begins with a tie bar
    #[error("the word starts with a tie bar: {word}")]
    LeadingTieBar {
        /// The offending word, after normalisation
        word: String,
    },

    /// The word begins with a diacritic or length marker (strict mode only)
    #[error("the word starts with a diacritic: {word}")]
    LeadingDiacritic {
        /// The offending word, after normalisation
        word: String,
    },

    /// The word begins with a combining tone mark
    #[error("the word starts with a tone mark: {word}")]
    LeadingToneMark {
        /// The offending word, after normalisation
        word: String,
    },

    /// A character matched no known symbol class (strict mode only)
    #[error("unrecognised symbol '{symbol}' ({name})")]
    UnrecognizedSymbol {
        /// The unclassifiable character
        symbol: char,
        /// Its Unicode name, or the code point in U+XXXX form when unnamed
        name: String,
    },

    /// A classifier predicate received something other than exactly one character
    #[error("expected a string of exactly one character, got {got:?}")]
    InvalidArgument {
        /// The argument as received
        got: String,
    },
}

/// Result type for classification and tokenization operations
pub type Result<T> = std::result::Result<T, TokenError>;

/// Failures while loading a symbol inventory from its data source
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The data source could not be read
    #[error("failed to read inventory data: {0}")]
    Io(#[from] std::io::Error),

    /// A data line appeared before any recognised section header
    #[error("line {line}: symbol data before any recognised section header")]
    MissingSection {
        /// One-based line number in the symbol file
        line: usize,
    },

    /// A symbol field held zero or several characters
    #[error("line {line}: a symbol must be exactly one character")]
    MalformedSymbol {
        /// One-based line number in the symbol file
        line: usize,
    },

    /// A replacement line did not hold exactly two tab-separated fields
    #[error("line {line}: a replacement needs exactly two tab-separated fields")]
    MalformedReplacement {
        /// One-based line number in the replacements file
        line: usize,
    },

    /// A symbol was assigned to two classes that must stay disjoint
    #[error("symbol '{symbol}' appears in both {first} and {second}")]
    Disjointness {
        /// The doubly-assigned symbol
        symbol: char,
        /// First of the two clashing sections
        first: &'static str,
        /// Second of the two clashing sections
        second: &'static str,
    },
}
