//! The symbol inventory and its data-source loader
//!
//! An inventory is built once, validated, and then only ever read. The
//! bundled chart is available through [`SymbolInventory::embedded`]; callers
//! with extended symbol sets can load their own files instead and pass the
//! result around explicitly.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::InventoryError;

/// Cached copy of the bundled symbol chart
static EMBEDDED: OnceLock<Arc<SymbolInventory>> = OnceLock::new();

/// The set of known IPA symbols, grouped by class
///
/// The six letter/mark classes (consonants, vowels, diacritics,
/// suprasegmentals, lengths, tones) are pairwise disjoint; tie bars stand
/// apart, and `tones` is additionally consulted by the broader
/// suprasegmental predicate.
#[derive(Debug, Clone, Default)]
pub struct SymbolInventory {
    pub(crate) consonants: HashSet<char>,
    pub(crate) vowels: HashSet<char>,
    pub(crate) tie_bars: HashSet<char>,
    pub(crate) diacritics: HashSet<char>,
    pub(crate) suprasegmentals: HashSet<char>,
    pub(crate) lengths: HashSet<char>,
    pub(crate) tones: HashSet<char>,
    /// Substitute → canonical pairs, kept in data-source order
    pub(crate) replacements: Vec<(String, String)>,
}

/// Destination selected by a recognised section header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Consonants,
    Vowels,
    TieBars,
    Diacritics,
    Suprasegmentals,
    Lengths,
    Tones,
}

impl Section {
    fn from_header(line: &str) -> Option<Self> {
        match line {
            "# consonants" => Some(Self::Consonants),
            "# vowels" => Some(Self::Vowels),
            "# tie bars" => Some(Self::TieBars),
            "# diacritics" => Some(Self::Diacritics),
            "# suprasegmentals" => Some(Self::Suprasegmentals),
            "# lengths" => Some(Self::Lengths),
            "# tones" => Some(Self::Tones),
            _ => None,
        }
    }
}

/// Collection state while scanning the symbol file
///
/// `Start` rejects data lines (nothing to put them in); `Inactive` is the
/// forgiving skip after an unrecognised header.
#[derive(Clone, Copy)]
enum Collector {
    Start,
    Inactive,
    Active(Section),
}

impl SymbolInventory {
    /// The bundled symbol chart, loaded once per process
    pub fn embedded() -> Arc<SymbolInventory> {
        EMBEDDED
            .get_or_init(|| {
                let inventory = Self::from_strs(
                    include_str!("../data/symbols.tsv"),
                    include_str!("../data/replacements.tsv"),
                )
                .expect("bundled symbol chart must parse");
                Arc::new(inventory)
            })
            .clone()
    }

    /// Build an inventory from the contents of a symbol file and a
    /// replacements file
    pub fn from_strs(symbols: &str, replacements: &str) -> Result<Self, InventoryError> {
        let mut inventory = Self::default();
        inventory.parse_symbols(symbols)?;
        inventory.parse_replacements(replacements)?;
        inventory.check_disjoint()?;
        Ok(inventory)
    }

    /// Build an inventory by reading both files from disk
    pub fn from_files(
        symbols: impl AsRef<Path>,
        replacements: impl AsRef<Path>,
    ) -> Result<Self, InventoryError> {
        let symbols = fs::read_to_string(symbols)?;
        let replacements = fs::read_to_string(replacements)?;
        Self::from_strs(&symbols, &replacements)
    }

    fn parse_symbols(&mut self, source: &str) -> Result<(), InventoryError> {
        let mut collector = Collector::Start;

        for (index, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('#') {
                collector = match Section::from_header(line) {
                    Some(section) => Collector::Active(section),
                    None => Collector::Inactive,
                };
                continue;
            }

            let section = match collector {
                Collector::Active(section) => section,
                Collector::Inactive => continue,
                Collector::Start => {
                    return Err(InventoryError::MissingSection { line: index + 1 })
                }
            };

            let field = line.split('\t').next().unwrap_or(line);
            let symbol = single_char(field)
                .ok_or(InventoryError::MalformedSymbol { line: index + 1 })?;

            let destination = match section {
                Section::Consonants => &mut self.consonants,
                Section::Vowels => &mut self.vowels,
                Section::TieBars => &mut self.tie_bars,
                Section::Diacritics => &mut self.diacritics,
                Section::Suprasegmentals => &mut self.suprasegmentals,
                Section::Lengths => &mut self.lengths,
                Section::Tones => &mut self.tones,
            };
            destination.insert(symbol);
        }

        Ok(())
    }

    fn parse_replacements(&mut self, source: &str) -> Result<(), InventoryError> {
        for (index, line) in source.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(from), Some(to), None) if !from.is_empty() && !to.is_empty() => {
                    self.replacements.push((from.to_string(), to.to_string()));
                }
                _ => return Err(InventoryError::MalformedReplacement { line: index + 1 }),
            }
        }

        Ok(())
    }

    /// The six letter/mark classes must stay pairwise disjoint
    fn check_disjoint(&self) -> Result<(), InventoryError> {
        let classes: [(&'static str, &HashSet<char>); 6] = [
            ("consonants", &self.consonants),
            ("vowels", &self.vowels),
            ("diacritics", &self.diacritics),
            ("suprasegmentals", &self.suprasegmentals),
            ("lengths", &self.lengths),
            ("tones", &self.tones),
        ];

        for (i, (first, set)) in classes.iter().copied().enumerate() {
            for (second, other) in classes.iter().copied().skip(i + 1) {
                if let Some(&symbol) = set.intersection(other).next() {
                    return Err(InventoryError::Disjointness {
                        symbol,
                        first,
                        second,
                    });
                }
            }
        }

        Ok(())
    }

    /// Number of symbols across all classes, tie bars included
    pub fn len(&self) -> usize {
        self.consonants.len()
            + self.vowels.len()
            + self.tie_bars.len()
            + self.diacritics.len()
            + self.suprasegmentals.len()
            + self.lengths.len()
            + self.tones.len()
    }

    /// True when no symbol has been loaded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
