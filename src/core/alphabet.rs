// File: src/core/alphabet.rs
use crate::errors::{MajorError, Result};
use std::collections::HashMap;

/// The symbols sharing one mnemonic digit.
#[derive(Debug, Clone, Copy)]
pub struct SymbolClass {
    pub digit: char,
    pub symbols: &'static [char],
}

/// Swedish sound classes, in the dictionary's own phonetic notation
/// (`@` for the ng sound, `$` for the sj sound) plus their IPA forms.
pub static SWEDISH_CLASSES: &[SymbolClass] = &[
    SymbolClass { digit: '0', symbols: &['s'] },
    SymbolClass { digit: '1', symbols: &['t', 'd'] },
    SymbolClass { digit: '2', symbols: &['n', '@', 'ŋ'] },
    SymbolClass { digit: '3', symbols: &['m'] },
    SymbolClass { digit: '4', symbols: &['r'] },
    SymbolClass { digit: '5', symbols: &['l'] },
    SymbolClass { digit: '6', symbols: &['j', '$', 'ɧ', 'ɕ'] },
    SymbolClass { digit: '7', symbols: &['k', 'g'] },
    SymbolClass { digit: '8', symbols: &['f', 'v'] },
    SymbolClass { digit: '9', symbols: &['p', 'b'] },
];

/// Phonetic symbol to digit lookup.
///
/// Built from a list of [`SymbolClass`]es. Many symbols may share a digit,
/// but a symbol never belongs to more than one class; [`DigitAlphabet::new`]
/// rejects tables that break this.
#[derive(Debug, Clone)]
pub struct DigitAlphabet {
    classes: &'static [SymbolClass],
    lookup: HashMap<char, char>,
}

impl DigitAlphabet {
    pub fn new(classes: &'static [SymbolClass]) -> Result<Self> {
        let mut lookup = HashMap::new();
        for class in classes {
            if !class.digit.is_ascii_digit() {
                return Err(MajorError::InvalidAlphabet(format!(
                    "'{}' is not a digit",
                    class.digit
                )));
            }
            for &symbol in class.symbols {
                if let Some(previous) = lookup.insert(symbol, class.digit) {
                    return Err(MajorError::InvalidAlphabet(format!(
                        "symbol '{}' maps to both {} and {}",
                        symbol, previous, class.digit
                    )));
                }
            }
        }
        Ok(Self { classes, lookup })
    }

    pub fn swedish() -> Self {
        Self::new(SWEDISH_CLASSES).expect("built-in alphabet has no duplicate symbols")
    }

    /// `None` for vowels, stress and length marks and anything else unmapped.
    pub fn digit_for(&self, symbol: char) -> Option<char> {
        self.lookup.get(&symbol).copied()
    }

    /// All symbols that produce `digit`.
    pub fn symbols_for(&self, digit: char) -> Vec<char> {
        self.classes
            .iter()
            .filter(|class| class.digit == digit)
            .flat_map(|class| class.symbols.iter().copied())
            .collect()
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.classes.iter().flat_map(|class| class.symbols.iter().copied())
    }
}

impl Default for DigitAlphabet {
    fn default() -> Self {
        Self::swedish()
    }
}
