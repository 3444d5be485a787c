//! IPA tokenisation: segment phonetic transcriptions into phoneme tokens
//!
//! Transcribed speech arrives as a flat string of IPA symbols; corpus
//! tools want it as a sequence of meaningful units: letters with their
//! attached diacritics, length marks, affricate ligatures, tone contours.
//! This crate classifies each character against a symbol inventory and
//! runs a small state machine over every word to build those units.
//!
//! The inventory is loaded once (the bundled chart, or caller-supplied
//! data files), is immutable afterwards, and can be read concurrently
//! without locking. All tokenisation is pure, synchronous, and O(input
//! length).
//!
//! # Example
//!
//! ```rust
//! use fonema_core::{IpaTokeniser, TokeniserConfig};
//!
//! let tokeniser = IpaTokeniser::new();
//! let tokens = tokeniser.tokenise("lit͡sɛ").unwrap();
//! assert_eq!(tokens, vec!["l", "i", "t͡s", "ɛ"]);
//!
//! let clusters = IpaTokeniser::with_config(
//!     TokeniserConfig::builder().diphthongs(true).build(),
//! )
//! .clusterise("t͡saɪ̯çən")
//! .unwrap();
//! assert_eq!(clusters, vec!["t͡s", "aɪ̯", "ç", "ə", "n"]);
//! ```

#![warn(missing_docs)]

pub mod chao;
pub mod classify;
mod cluster;
pub mod error;
pub mod group;
pub mod inventory;
pub mod normalize;
pub mod tokenizer;

pub use chao::replace_digits_with_chao;
pub use classify::SymbolClassifier;
pub use error::{InventoryError, Result, TokenError};
pub use group::{are_diphthong, group};
pub use inventory::SymbolInventory;
pub use normalize::{normalise, normalize};
pub use tokenizer::{IpaTokeniser, IpaTokenizer, TokeniserConfig, TokeniserConfigBuilder};

/// Tokenise text over the bundled chart with the given flags
pub fn tokenise(text: &str, config: &TokeniserConfig) -> Result<Vec<String>> {
    IpaTokeniser::with_config(*config).tokenise(text)
}

/// Alternate spelling of [`tokenise`]
pub fn tokenize(text: &str, config: &TokeniserConfig) -> Result<Vec<String>> {
    tokenise(text, config)
}

/// Cluster text over the bundled chart with the given flags
pub fn clusterise(text: &str, config: &TokeniserConfig) -> Result<Vec<String>> {
    IpaTokeniser::with_config(*config).clusterise(text)
}

/// Alternate spelling of [`clusterise`]
pub fn clusterize(text: &str, config: &TokeniserConfig) -> Result<Vec<String>> {
    clusterise(text, config)
}

/// [`tokenise`] with an additional user-supplied merge pass
pub fn tokenise_with<F>(text: &str, config: &TokeniserConfig, merge: F) -> Result<Vec<String>>
where
    F: Fn(&str, &str) -> bool,
{
    IpaTokeniser::with_config(*config).tokenise_with(text, merge)
}

/// [`clusterise`] with an additional user-supplied merge pass
pub fn clusterise_with<F>(text: &str, config: &TokeniserConfig, merge: F) -> Result<Vec<String>>
where
    F: Fn(&str, &str) -> bool,
{
    IpaTokeniser::with_config(*config).clusterise_with(text, merge)
}
