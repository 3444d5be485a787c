//! Unicode canonicalisation ahead of classification
//!
//! The IPA defines a few symbols in composed form (notably the voiceless
//! palatal fricative) while everything else classifies cleanly after full
//! canonical decomposition. Plain NFD would split those composed symbols
//! into base plus diacritic and misclassify them, so they are re-composed
//! after decomposition.

use unicode_normalization::UnicodeNormalization;

use crate::classify::SymbolClassifier;
use crate::inventory::SymbolInventory;

/// Bring a string into the normal form the symbol chart is defined in
///
/// Decomposes to NFD, then re-composes every symbol the chart defines in
/// composed form. Idempotent: applying it twice gives the same string.
pub fn normalise(s: &str, inventory: &SymbolInventory) -> String {
    let classifier = SymbolClassifier::new(inventory);
    let mut out: String = s.nfd().collect();

    for composed in classifier.get_precomposed_chars() {
        let decomposed: String = composed.to_string().nfd().collect();
        if out.contains(&decomposed) {
            out = out.replace(&decomposed, &composed.to_string());
        }
    }

    out
}

/// Alternate spelling of [`normalise`]
pub fn normalize(s: &str, inventory: &SymbolInventory) -> String {
    normalise(s, inventory)
}
