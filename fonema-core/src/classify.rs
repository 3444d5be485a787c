//! Per-character classification of IPA symbols
//!
//! Every public predicate takes a string that must hold exactly one
//! character and fails with [`TokenError::InvalidArgument`] otherwise. The
//! tokeniser drives the `char`-level internals directly.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, TokenError};
use crate::inventory::SymbolInventory;

/// Inclusive code-point bounds of the Modifier Tone Letters block
const MODIFIER_TONE_LETTERS: std::ops::RangeInclusive<u32> = 0xA700..=0xA71F;

/// Classifies single characters against a symbol inventory
#[derive(Debug, Clone, Copy)]
pub struct SymbolClassifier<'a> {
    inventory: &'a SymbolInventory,
}

impl<'a> SymbolClassifier<'a> {
    /// Create a classifier borrowing the given inventory
    pub fn new(inventory: &'a SymbolInventory) -> Self {
        Self { inventory }
    }

    /// The inventory this classifier reads from
    pub fn inventory(&self) -> &'a SymbolInventory {
        self.inventory
    }

    /// Check whether the symbol is an IPA letter
    ///
    /// Non-strict additionally accepts any character whose general category
    /// is a letter category (Ll, Lo, Lt, Lu).
    pub fn is_letter(&self, symbol: &str, strict: bool) -> Result<bool> {
        Ok(self.letter(single_char(symbol)?, strict))
    }

    /// Check whether the symbol is an IPA vowel letter
    pub fn is_vowel(&self, symbol: &str) -> Result<bool> {
        Ok(self.vowel(single_char(symbol)?))
    }

    /// Check whether the symbol is one of the two tie bars
    pub fn is_tie_bar(&self, symbol: &str) -> Result<bool> {
        Ok(self.tie_bar(single_char(symbol)?))
    }

    /// Check whether the symbol is an IPA diacritic
    ///
    /// Non-strict additionally accepts modifier letters, nonspacing marks,
    /// and modifier symbols that are not suprasegmentals, tie bars, or
    /// Modifier Tone Letters.
    pub fn is_diacritic(&self, symbol: &str, strict: bool) -> Result<bool> {
        Ok(self.diacritic(single_char(symbol)?, strict))
    }

    /// Check whether the symbol is an IPA suprasegmental
    pub fn is_suprasegmental(&self, symbol: &str, strict: bool) -> Result<bool> {
        Ok(self.suprasegmental(single_char(symbol)?, strict))
    }

    /// Check whether the symbol is an IPA length marker
    pub fn is_length(&self, symbol: &str) -> Result<bool> {
        Ok(self.length(single_char(symbol)?))
    }

    /// Check whether the symbol is an IPA tone or word-accent mark
    ///
    /// Non-strict additionally accepts anything in the Modifier Tone
    /// Letters block.
    pub fn is_tone(&self, symbol: &str, strict: bool) -> Result<bool> {
        Ok(self.tone(single_char(symbol)?, strict))
    }

    pub(crate) fn letter(&self, c: char, strict: bool) -> bool {
        if self.inventory.consonants.contains(&c) || self.inventory.vowels.contains(&c) {
            return true;
        }
        !strict
            && matches!(
                get_general_category(c),
                GeneralCategory::LowercaseLetter
                    | GeneralCategory::OtherLetter
                    | GeneralCategory::TitlecaseLetter
                    | GeneralCategory::UppercaseLetter
            )
    }

    pub(crate) fn vowel(&self, c: char) -> bool {
        self.letter(c, true) && self.inventory.vowels.contains(&c)
    }

    pub(crate) fn tie_bar(&self, c: char) -> bool {
        self.inventory.tie_bars.contains(&c)
    }

    pub(crate) fn diacritic(&self, c: char, strict: bool) -> bool {
        if self.inventory.diacritics.contains(&c) {
            return true;
        }
        !strict
            && matches!(
                get_general_category(c),
                GeneralCategory::ModifierLetter
                    | GeneralCategory::NonspacingMark
                    | GeneralCategory::ModifierSymbol
            )
            && !self.suprasegmental(c, false)
            && !self.tie_bar(c)
            && !MODIFIER_TONE_LETTERS.contains(&(c as u32))
    }

    pub(crate) fn suprasegmental(&self, c: char, strict: bool) -> bool {
        self.inventory.suprasegmentals.contains(&c)
            || self.inventory.lengths.contains(&c)
            || self.tone(c, strict)
    }

    pub(crate) fn length(&self, c: char) -> bool {
        self.inventory.lengths.contains(&c)
    }

    pub(crate) fn tone(&self, c: char, strict: bool) -> bool {
        self.inventory.tones.contains(&c)
            || (!strict && MODIFIER_TONE_LETTERS.contains(&(c as u32)))
    }

    /// Consonants the IPA defines in composed form
    ///
    /// These are the symbols whose canonical decomposition (NFD) differs
    /// from the symbol itself, notably the voiceless palatal fricative.
    /// Sorted by code point for a stable order.
    pub fn get_precomposed_chars(&self) -> Vec<char> {
        let mut precomposed: Vec<char> = self
            .inventory
            .consonants
            .iter()
            .copied()
            .filter(|c| {
                let decomposed: String = c.to_string().nfd().collect();
                decomposed != c.to_string()
            })
            .collect();
        precomposed.sort_unstable();
        precomposed
    }

    /// Replace common non-IPA substitutes with their IPA counterparts
    ///
    /// Entries apply as literal substring replacements in data-source
    /// order. When one substitute is a substring of another, the outcome
    /// depends on that order; the loader does not reorder or deduplicate.
    pub fn replace_substitutes(&self, s: &str) -> String {
        let mut out = s.to_string();
        for (from, to) in &self.inventory.replacements {
            if out.contains(from.as_str()) {
                out = out.replace(from.as_str(), to);
            }
        }
        out
    }
}

/// Guard shared by the public predicates
fn single_char(symbol: &str) -> Result<char> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TokenError::InvalidArgument {
            got: symbol.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::SymbolInventory;

    #[test]
    fn test_predicates_reject_multichar_input() {
        let inventory = SymbolInventory::embedded();
        let classifier = SymbolClassifier::new(&inventory);

        for bad in ["", "ab", "t͡s"] {
            let err = classifier.is_letter(bad, true).unwrap_err();
            assert!(matches!(err, TokenError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn test_letter_strict_vs_permissive() {
        let inventory = SymbolInventory::embedded();
        let classifier = SymbolClassifier::new(&inventory);

        assert!(classifier.is_letter("p", true).unwrap());
        assert!(classifier.is_letter("ə", true).unwrap());
        // dark l is not part of the chart but is a lowercase letter
        assert!(!classifier.is_letter("ɫ", true).unwrap());
        assert!(classifier.is_letter("ɫ", false).unwrap());
        // tone letters are modifier symbols, never letters
        assert!(!classifier.is_letter("˥", false).unwrap());
    }

    #[test]
    fn test_vowel_is_strict_only() {
        let inventory = SymbolInventory::embedded();
        let classifier = SymbolClassifier::new(&inventory);

        assert!(classifier.is_vowel("a").unwrap());
        assert!(!classifier.is_vowel("p").unwrap());
        // non-chart letters are not vowels even when letter-shaped
        assert!(!classifier.is_vowel("ɫ").unwrap());
    }

    #[test]
    fn test_tie_bars() {
        let inventory = SymbolInventory::embedded();
        let classifier = SymbolClassifier::new(&inventory);

        assert!(classifier.is_tie_bar("\u{0361}").unwrap());
        assert!(classifier.is_tie_bar("\u{035C}").unwrap());
        assert!(!classifier.is_tie_bar("ː").unwrap());
    }

    #[test]
    fn test_diacritic_fallback_excludes_prosody() {
        let inventory = SymbolInventory::embedded();
        let classifier = SymbolClassifier::new(&inventory);

        assert!(classifier.is_diacritic("ʰ", true).unwrap());
        // superscript gamma is a modifier letter outside the chart
        assert!(!classifier.is_diacritic("ˣ", true).unwrap());
        assert!(classifier.is_diacritic("ˣ", false).unwrap());
        // length markers and tie bars never fall through to diacritics
        assert!(!classifier.is_diacritic("ː", false).unwrap());
        assert!(!classifier.is_diacritic("\u{0361}", false).unwrap());
        // Modifier Tone Letters stay out of the diacritic fallback
        assert!(!classifier.is_diacritic("\u{A712}", false).unwrap());
    }

    #[test]
    fn test_suprasegmentals_cover_lengths_and_tones() {
        let inventory = SymbolInventory::embedded();
        let classifier = SymbolClassifier::new(&inventory);

        assert!(classifier.is_suprasegmental("ˈ", true).unwrap());
        assert!(classifier.is_suprasegmental("ː", true).unwrap());
        assert!(classifier.is_suprasegmental("˥", true).unwrap());
        assert!(!classifier.is_suprasegmental("p", true).unwrap());
        // block fallback only in permissive mode
        assert!(!classifier.is_suprasegmental("\u{A712}", true).unwrap());
        assert!(classifier.is_suprasegmental("\u{A712}", false).unwrap());
    }

    #[test]
    fn test_tone_block_fallback() {
        let inventory = SymbolInventory::embedded();
        let classifier = SymbolClassifier::new(&inventory);

        assert!(classifier.is_tone("˨", true).unwrap());
        assert!(classifier.is_tone("\u{0301}", true).unwrap());
        assert!(!classifier.is_tone("\u{A712}", true).unwrap());
        assert!(classifier.is_tone("\u{A712}", false).unwrap());
    }

    #[test]
    fn test_precomposed_chars() {
        let inventory = SymbolInventory::embedded();
        let classifier = SymbolClassifier::new(&inventory);

        let precomposed = classifier.get_precomposed_chars();
        assert_eq!(precomposed, vec!['ç']);
    }

    #[test]
    fn test_replace_substitutes_in_order() {
        let inventory = SymbolInventory::embedded();
        let classifier = SymbolClassifier::new(&inventory);

        assert_eq!(classifier.replace_substitutes("ta:"), "taː");
        assert_eq!(classifier.replace_substitutes("gʧa"), "ɡt͡ʃa");
        assert_eq!(classifier.replace_substitutes("p'a"), "pʼa");
        assert_eq!(classifier.replace_substitutes("ɚ"), "ə˞");
        assert_eq!(classifier.replace_substitutes("ɫ"), "l\u{0334}");
        assert_eq!(classifier.replace_substitutes("ła·"), "l\u{0334}aˑ");
    }
}
