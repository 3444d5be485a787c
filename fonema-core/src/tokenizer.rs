//! The word scan and the public tokenisation surface
//!
//! [`tokenise_word`] is the per-word state machine; [`IpaTokeniser`] wraps
//! it with word splitting, the grouping passes, and a shared inventory.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::canonical_combining_class;

use crate::classify::SymbolClassifier;
use crate::cluster::clusterise_tokens;
use crate::error::{Result, TokenError};
use crate::group::{are_diphthong, group};
use crate::inventory::SymbolInventory;
use crate::normalize::normalise;

/// Flags controlling the tokenisation policy
///
/// All flags default to off: permissive classification, no substitute
/// replacement, no diphthong grouping, tones discarded, unclassifiable
/// symbols dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokeniserConfig {
    /// Reject anything outside the strict symbol chart
    pub strict: bool,
    /// Replace common non-IPA substitutes before scanning
    pub replace: bool,
    /// Merge adjacent vowel tokens that form diphthongs
    pub diphthongs: bool,
    /// Keep tone marks instead of discarding them as prosody
    pub tones: bool,
    /// Emit unclassifiable symbols as single-character tokens
    pub unknown: bool,
}

impl TokeniserConfig {
    /// Create a builder
    pub fn builder() -> TokeniserConfigBuilder {
        TokeniserConfigBuilder::default()
    }
}

/// Builder for [`TokeniserConfig`]
#[derive(Debug, Default)]
pub struct TokeniserConfigBuilder {
    config: TokeniserConfig,
}

impl TokeniserConfigBuilder {
    /// Reject anything outside the strict symbol chart
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Replace common non-IPA substitutes before scanning
    pub fn replace(mut self, replace: bool) -> Self {
        self.config.replace = replace;
        self
    }

    /// Merge adjacent vowel tokens that form diphthongs
    pub fn diphthongs(mut self, diphthongs: bool) -> Self {
        self.config.diphthongs = diphthongs;
        self
    }

    /// Keep tone marks instead of discarding them as prosody
    pub fn tones(mut self, tones: bool) -> Self {
        self.config.tones = tones;
        self
    }

    /// Emit unclassifiable symbols as single-character tokens
    pub fn unknown(mut self, unknown: bool) -> Self {
        self.config.unknown = unknown;
        self
    }

    /// Build the configuration
    pub fn build(self) -> TokeniserConfig {
        self.config
    }
}

/// Main entry point for IPA tokenisation
///
/// Holds a shared, immutable symbol inventory plus the flag set; cheap to
/// clone and safe to read from many threads at once.
#[derive(Debug, Clone)]
pub struct IpaTokeniser {
    inventory: Arc<SymbolInventory>,
    config: TokeniserConfig,
}

/// Alternate spelling of [`IpaTokeniser`]
pub type IpaTokenizer = IpaTokeniser;

impl IpaTokeniser {
    /// Create a tokeniser over the bundled chart with default flags
    pub fn new() -> Self {
        Self::with_config(TokeniserConfig::default())
    }

    /// Create a tokeniser over the bundled chart with the given flags
    pub fn with_config(config: TokeniserConfig) -> Self {
        Self {
            inventory: SymbolInventory::embedded(),
            config,
        }
    }

    /// Create a tokeniser over a caller-supplied inventory
    pub fn with_inventory(inventory: Arc<SymbolInventory>, config: TokeniserConfig) -> Self {
        Self { inventory, config }
    }

    /// The active flag set
    pub fn config(&self) -> &TokeniserConfig {
        &self.config
    }

    /// The inventory backing this tokeniser
    pub fn inventory(&self) -> &SymbolInventory {
        &self.inventory
    }

    /// Tokenise text into phoneme tokens
    ///
    /// Whitespace and underscores separate words; per-word token lists are
    /// concatenated. The first word that fails classification aborts the
    /// whole call.
    pub fn tokenise(&self, text: &str) -> Result<Vec<String>> {
        self.tokens(text, None::<fn(&str, &str) -> bool>)
    }

    /// Tokenise with an additional user-supplied merge pass
    ///
    /// The predicate runs after the diphthong pass (when enabled), within
    /// word boundaries only.
    pub fn tokenise_with<F>(&self, text: &str, merge: F) -> Result<Vec<String>>
    where
        F: Fn(&str, &str) -> bool,
    {
        self.tokens(text, Some(merge))
    }

    /// Tokenise text and merge the result into consonant and vowel clusters
    pub fn clusterise(&self, text: &str) -> Result<Vec<String>> {
        let classifier = SymbolClassifier::new(&self.inventory);
        let tokens = self.tokenise(text)?;
        Ok(clusterise_tokens(&classifier, tokens))
    }

    /// [`clusterise`](Self::clusterise) with an additional merge pass
    pub fn clusterise_with<F>(&self, text: &str, merge: F) -> Result<Vec<String>>
    where
        F: Fn(&str, &str) -> bool,
    {
        let classifier = SymbolClassifier::new(&self.inventory);
        let tokens = self.tokenise_with(text, merge)?;
        Ok(clusterise_tokens(&classifier, tokens))
    }

    fn tokens<F>(&self, text: &str, merge: Option<F>) -> Result<Vec<String>>
    where
        F: Fn(&str, &str) -> bool,
    {
        let classifier = SymbolClassifier::new(&self.inventory);
        let mut output = Vec::new();

        for word in split_words(text) {
            let mut tokens = tokenise_word(&classifier, word, &self.config)?;

            if self.config.diphthongs {
                tokens = group(|a, b| are_diphthong(&classifier, a, b), tokens);
            }
            if let Some(merge) = &merge {
                tokens = group(merge, tokens);
            }

            output.extend(tokens);
        }

        Ok(output)
    }
}

impl Default for IpaTokeniser {
    fn default() -> Self {
        Self::new()
    }
}

/// Words are maximal runs without whitespace or underscores
fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == '_')
        .filter(|word| !word.is_empty())
}

/// Scan one word into its token sequence
///
/// The branch order is load-bearing: the classes overlap in permissive
/// mode, and tone classification must run before the generic
/// suprasegmental arm whenever tone handling is on.
pub(crate) fn tokenise_word(
    classifier: &SymbolClassifier<'_>,
    word: &str,
    config: &TokeniserConfig,
) -> Result<Vec<String>> {
    let word = normalise(word, classifier.inventory());
    let word = if config.replace {
        classifier.replace_substitutes(&word)
    } else {
        word
    };

    let mut tokens: Vec<String> = Vec::new();
    let mut prev: Option<char> = None;

    for c in word.chars() {
        if classifier.letter(c, config.strict) {
            let joined = prev.is_some_and(|p| classifier.tie_bar(p));
            match tokens.last_mut() {
                Some(last) if joined => last.push(c),
                _ => tokens.push(c.to_string()),
            }
        } else if classifier.tie_bar(c) {
            match tokens.last_mut() {
                Some(last) => last.push(c),
                None => {
                    return Err(TokenError::LeadingTieBar { word: word.clone() });
                }
            }
        } else if classifier.diacritic(c, config.strict) || classifier.length(c) {
            match tokens.last_mut() {
                Some(last) => last.push(c),
                None if config.strict => {
                    return Err(TokenError::LeadingDiacritic { word: word.clone() });
                }
                // pre-aspiration and similar leading marks open a token
                None => tokens.push(c.to_string()),
            }
        } else if config.tones && classifier.tone(c, config.strict) {
            if canonical_combining_class(c) != 0 {
                match tokens.last_mut() {
                    Some(last) => last.push(c),
                    None => {
                        return Err(TokenError::LeadingToneMark { word: word.clone() });
                    }
                }
            } else {
                // spacing tone letters chain into contour tokens
                let contour = tokens
                    .last()
                    .and_then(|last| last.chars().last())
                    .is_some_and(|last| classifier.tone(last, config.strict));
                match tokens.last_mut() {
                    Some(last) if contour => last.push(c),
                    _ => tokens.push(c.to_string()),
                }
            }
        } else if classifier.suprasegmental(c, config.strict) {
            // prosody carries no segment of its own
        } else if config.strict {
            return Err(TokenError::UnrecognizedSymbol {
                symbol: c,
                name: char_name(c),
            });
        } else if config.unknown {
            tokens.push(c.to_string());
        }

        prev = Some(c);
    }

    Ok(tokens)
}

/// The Unicode name of a character, or its code point when unnamed
fn char_name(c: char) -> String {
    match unicode_names2::name(c) {
        Some(name) => name.to_string(),
        None => format!("U+{:04X}", c as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokeniser(config: TokeniserConfig) -> IpaTokeniser {
        IpaTokeniser::with_config(config)
    }

    #[test]
    fn test_plain_word() {
        let tokens = tokeniser(TokeniserConfig::default()).tokenise("nos").unwrap();
        assert_eq!(tokens, vec!["n", "o", "s"]);
    }

    #[test]
    fn test_tie_bar_joins_affricate() {
        let tokens = tokeniser(TokeniserConfig::default())
            .tokenise("lit͡sɛ")
            .unwrap();
        assert_eq!(tokens, vec!["l", "i", "t͡s", "ɛ"]);
    }

    #[test]
    fn test_length_attaches_after_tie_bar_pair() {
        let tokens = tokeniser(TokeniserConfig::default())
            .tokenise("miq͡χː")
            .unwrap();
        assert_eq!(tokens, vec!["m", "i", "q͡χː"]);
    }

    #[test]
    fn test_leading_tie_bar_fails() {
        let err = tokeniser(TokeniserConfig::default())
            .tokenise("͡ts")
            .unwrap_err();
        assert!(matches!(err, TokenError::LeadingTieBar { .. }));
    }

    #[test]
    fn test_leading_diacritic_strict_vs_permissive() {
        let strict = TokeniserConfig::builder().strict(true).build();
        let err = tokeniser(strict).tokenise("ʰta").unwrap_err();
        assert!(matches!(err, TokenError::LeadingDiacritic { .. }));

        // pre-aspiration opens its own token in permissive mode
        let tokens = tokeniser(TokeniserConfig::default()).tokenise("ʰta").unwrap();
        assert_eq!(tokens, vec!["ʰ", "t", "a"]);
    }

    #[test]
    fn test_strict_rejects_dark_l() {
        let strict = TokeniserConfig::builder().strict(true).build();
        let err = tokeniser(strict).tokenise("t͡ʃɛɫɔ").unwrap_err();
        match err {
            TokenError::UnrecognizedSymbol { symbol, name } => {
                assert_eq!(symbol, 'ɫ');
                assert!(!name.is_empty());
            }
            other => panic!("expected UnrecognizedSymbol, got {other:?}"),
        }

        let tokens = tokeniser(TokeniserConfig::default())
            .tokenise("t͡ʃɛɫɔ")
            .unwrap();
        assert_eq!(tokens, vec!["t͡ʃ", "ɛ", "ɫ", "ɔ"]);
    }

    #[test]
    fn test_diphthong_merge_toggle() {
        let apart = tokeniser(TokeniserConfig::default())
            .tokenise("t͡saɪ̯çən")
            .unwrap();
        assert_eq!(apart, vec!["t͡s", "a", "ɪ̯", "ç", "ə", "n"]);

        let merged = tokeniser(TokeniserConfig::builder().diphthongs(true).build())
            .tokenise("t͡saɪ̯çən")
            .unwrap();
        assert_eq!(merged, vec!["t͡s", "aɪ̯", "ç", "ə", "n"]);
    }

    #[test]
    fn test_tone_letters_form_contours() {
        let with_tones = tokeniser(TokeniserConfig::builder().tones(true).build());
        assert_eq!(with_tones.tokenise("˨˩˦").unwrap(), vec!["˨˩˦"]);
        assert_eq!(with_tones.tokenise("ma˥˩").unwrap(), vec!["m", "a", "˥˩"]);

        // without tone handling, tone letters are prosody and vanish
        let without = tokeniser(TokeniserConfig::default());
        assert!(without.tokenise("˨˩˦").unwrap().is_empty());
        assert_eq!(without.tokenise("ma˥˩").unwrap(), vec!["m", "a"]);
    }

    #[test]
    fn test_combining_tone_marks_attach() {
        let with_tones = tokeniser(TokeniserConfig::builder().tones(true).build());
        assert_eq!(with_tones.tokenise("má").unwrap(), vec!["m", "a\u{0301}"]);

        let err = with_tones.tokenise("\u{0301}ma").unwrap_err();
        assert!(matches!(err, TokenError::LeadingToneMark { .. }));
    }

    #[test]
    fn test_stress_and_breaks_are_discarded() {
        let tokens = tokeniser(TokeniserConfig::default())
            .tokenise("ˈmat.ka")
            .unwrap();
        assert_eq!(tokens, vec!["m", "a", "t", "k", "a"]);
    }

    #[test]
    fn test_unknown_symbols_kept_or_dropped() {
        let dropped = tokeniser(TokeniserConfig::default()).tokenise("a+b").unwrap();
        assert_eq!(dropped, vec!["a", "b"]);

        let kept = tokeniser(TokeniserConfig::builder().unknown(true).build())
            .tokenise("a+b")
            .unwrap();
        assert_eq!(kept, vec!["a", "+", "b"]);
    }

    #[test]
    fn test_replace_substitutes_flag() {
        let config = TokeniserConfig::builder().replace(true).build();
        let tokens = tokeniser(config).tokenise("ʧag:").unwrap();
        assert_eq!(tokens, vec!["t͡ʃ", "a", "ɡː"]);
    }

    #[test]
    fn test_replace_makes_dark_l_strict_compliant() {
        // without replacement the dark l fails the strict scan
        let strict = TokeniserConfig::builder().strict(true).build();
        assert!(tokeniser(strict).tokenise("ɫuna").is_err());

        let replaced = TokeniserConfig::builder().strict(true).replace(true).build();
        let tokens = tokeniser(replaced).tokenise("ɫuna").unwrap();
        assert_eq!(tokens, vec!["l\u{0334}", "u", "n", "a"]);
    }

    #[test]
    fn test_underscore_splits_like_whitespace() {
        let spaced = tokeniser(TokeniserConfig::default()).tokenise("va na").unwrap();
        let underscored = tokeniser(TokeniserConfig::default()).tokenise("va_na").unwrap();
        assert_eq!(spaced, underscored);
        assert_eq!(spaced, vec!["v", "a", "n", "a"]);
    }

    #[test]
    fn test_first_failing_word_aborts_call() {
        let strict = TokeniserConfig::builder().strict(true).build();
        let err = tokeniser(strict).tokenise("pa ɫa").unwrap_err();
        assert!(matches!(err, TokenError::UnrecognizedSymbol { .. }));
    }

    #[test]
    fn test_custom_merge_runs_within_words() {
        let tok = tokeniser(TokeniserConfig::default());
        let merged = tok.tokenise_with("pa ta", |_, _| true).unwrap();
        // each word collapses to one token; the word boundary survives
        assert_eq!(merged, vec!["pa", "ta"]);
    }

    #[test]
    fn test_empty_and_separator_only_input() {
        let tok = tokeniser(TokeniserConfig::default());
        assert!(tok.tokenise("").unwrap().is_empty());
        assert!(tok.tokenise("  _  ").unwrap().is_empty());
    }
}
