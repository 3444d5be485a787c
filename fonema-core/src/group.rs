//! Adjacent-pair token grouping
//!
//! [`group`] is the generic merge pass; [`are_diphthong`] is the stock
//! predicate used for the diphthong flag. Callers wanting smarter
//! diphthong handling supply their own predicate instead.

use crate::classify::SymbolClassifier;

/// Combining inverted breve below, marking a vowel as non-syllabic
const NON_SYLLABIC: char = '\u{032F}';

/// Merge adjacent tokens for which the predicate holds
///
/// Left-to-right reduction: the predicate sees the group accumulated so
/// far and the next token; on a match the token is concatenated onto the
/// group, otherwise it opens a new one. Empty input gives empty output.
pub fn group<F>(merge: F, tokens: Vec<String>) -> Vec<String>
where
    F: Fn(&str, &str) -> bool,
{
    let mut output: Vec<String> = Vec::new();

    for token in tokens {
        match output.last_mut() {
            Some(prev) if merge(prev.as_str(), token.as_str()) => prev.push_str(&token),
            _ => output.push(token),
        }
    }

    output
}

/// Naive check whether two adjacent tokens can form a diphthong
///
/// Scans the concatenation into vowel subtokens: a vowel opens a new
/// subtoken, a diacritic or length marker extends the open one, anything
/// else rules the pair out. The pair is a diphthong when at most one
/// subtoken lacks the non-syllabic marker, which lets a syllabic vowel
/// merge with an adjacent glide while keeping two full syllabic vowels
/// apart.
///
/// Vowel sequences joined by a tie bar never reach this check; the word
/// scan consumes them as one token.
pub fn are_diphthong(classifier: &SymbolClassifier<'_>, a: &str, b: &str) -> bool {
    let mut subtokens: Vec<String> = Vec::new();

    for c in a.chars().chain(b.chars()) {
        if classifier.vowel(c) {
            subtokens.push(c.to_string());
        } else if classifier.diacritic(c, true) || classifier.length(c) {
            match subtokens.last_mut() {
                Some(last) => last.push(c),
                None => return false,
            }
        } else {
            return false;
        }
    }

    let syllabic = subtokens
        .iter()
        .filter(|subtoken| !subtoken.contains(NON_SYLLABIC))
        .count();
    syllabic < 2
}
