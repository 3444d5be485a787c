//! Consonant and vowel cluster assembly
//!
//! Runs after tokenisation: consecutive tokens sharing a vowel/consonant
//! class collapse into one cluster string per maximal run.

use crate::classify::SymbolClassifier;

/// Merge consecutive same-class tokens into cluster strings
///
/// A token's class is decided by its first character: vowel-initial or
/// consonant-initial. Tokens are non-empty, so no empty cluster can arise.
pub(crate) fn clusterise_tokens(
    classifier: &SymbolClassifier<'_>,
    tokens: Vec<String>,
) -> Vec<String> {
    let mut clusters: Vec<String> = Vec::new();
    let mut last_class: Option<bool> = None;

    for token in tokens {
        let vowel_initial = token
            .chars()
            .next()
            .is_some_and(|c| classifier.vowel(c));

        match clusters.last_mut() {
            Some(cluster) if last_class == Some(vowel_initial) => cluster.push_str(&token),
            _ => clusters.push(token),
        }
        last_class = Some(vowel_initial);
    }

    clusters
}
