//! Property-based tests over normalisation and tokenisation

use fonema_core::{normalise, tokenise, SymbolClassifier, SymbolInventory, TokeniserConfig};
use proptest::prelude::*;
use unicode_normalization::UnicodeNormalization;

proptest! {
    #[test]
    fn normalise_is_idempotent(input in "\\PC*") {
        let inventory = SymbolInventory::embedded();
        let once = normalise(&input, &inventory);
        let twice = normalise(&once, &inventory);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn tokens_are_never_empty(input in "\\PC*") {
        let config = TokeniserConfig::default();
        if let Ok(tokens) = tokenise(&input, &config) {
            for token in tokens {
                prop_assert!(!token.is_empty());
            }
        }
    }

    #[test]
    fn tokenisation_is_deterministic(input in "\\PC*") {
        let config = TokeniserConfig::builder().tones(true).build();
        prop_assert_eq!(tokenise(&input, &config), tokenise(&input, &config));
    }
}

#[test]
fn precomposed_chars_round_trip_through_normalise() {
    let inventory = SymbolInventory::embedded();
    let classifier = SymbolClassifier::new(&inventory);

    for composed in classifier.get_precomposed_chars() {
        let nfc = composed.to_string();
        let nfd: String = nfc.nfd().collect();
        assert_ne!(nfc, nfd);

        assert_eq!(normalise(&nfc, &inventory), nfc);
        assert_eq!(normalise(&nfd, &inventory), nfc);
    }
}
