//! Basic usage example for the fonema-core API

use fonema_core::{replace_digits_with_chao, tokenise, IpaTokeniser, TokeniserConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with the convenience function
    println!("=== Method 1: Convenience Function ===");
    let tokens = tokenise("vɔda lit͡sɛ", &TokeniserConfig::default())?;
    println!("{} tokens: {:?}\n", tokens.len(), tokens);

    // Method 2: Custom flags through the builder
    println!("=== Method 2: Custom Flags ===");
    let config = TokeniserConfig::builder()
        .diphthongs(true)
        .tones(true)
        .build();
    let tokeniser = IpaTokeniser::with_config(config);

    let tokens = tokeniser.tokenise("t͡saɪ̯çən ma˨˩˦")?;
    println!("with diphthongs and tones: {:?}", tokens);

    // Method 3: Consonant and vowel clusters
    println!("\n=== Method 3: Clusters ===");
    let clusters = tokeniser.clusterise("ʃtraɪ̯çən")?;
    println!("clusters: {:?}", clusters);

    // Method 4: Digit tone notation
    println!("\n=== Method 4: Chao Tone Letters ===");
    let converted = replace_digits_with_chao("ɕiŋ⁵⁵ɕiŋ²", false);
    println!("ɕiŋ⁵⁵ɕiŋ² -> {converted}");

    Ok(())
}
