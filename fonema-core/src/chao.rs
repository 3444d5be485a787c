//! Numeric tone notation to Chao tone letters
//!
//! Corpus sources often mark tone with digits (possibly superscript); the
//! converter turns those into the five-level tone letter glyphs.

/// The five Chao tone letters, lowest to highest
const CHAO_LETTERS: [char; 5] = ['˩', '˨', '˧', '˦', '˥'];

/// Replace tone digits 1–5 with Chao tone letters
///
/// Both ASCII digits and their superscript forms are converted; digit 1
/// maps to the lowest glyph unless `inverse` flips the scale. Runs of the
/// same resulting glyph collapse to a single letter, so repeated identical
/// digits read as one level while genuine contours stay intact.
pub fn replace_digits_with_chao(s: &str, inverse: bool) -> String {
    let mut letters = CHAO_LETTERS;
    if inverse {
        letters.reverse();
    }

    let converted: String = s
        .chars()
        .map(|c| match tone_digit(c) {
            Some(digit) => letters[digit],
            None => c,
        })
        .collect();

    let mut output = String::with_capacity(converted.len());
    let mut prev: Option<char> = None;
    for c in converted.chars() {
        if prev != Some(c) || !CHAO_LETTERS.contains(&c) {
            output.push(c);
        }
        prev = Some(c);
    }

    output
}

/// Zero-based tone level of a digit character, superscripts included
fn tone_digit(c: char) -> Option<usize> {
    match c {
        '1' | '\u{00B9}' => Some(0),
        '2' | '\u{00B2}' => Some(1),
        '3' | '\u{00B3}' => Some(2),
        '4' | '\u{2074}' => Some(3),
        '5' | '\u{2075}' => Some(4),
        _ => None,
    }
}
