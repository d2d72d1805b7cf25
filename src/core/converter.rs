// File: src/core/converter.rs
use crate::core::types::DigitString;

/// Sentinel put in front of every word so rules can anchor at the word start.
pub const WORD_START: char = '#';

/// Written literals that all produce the same digits.
#[derive(Debug, Clone, Copy)]
pub struct GraphemeRule {
    /// Usually one digit; `x` and a couple of clusters sound like two consonants.
    pub digits: &'static str,
    pub literals: &'static [&'static str],
}

/// Rules tried together at one priority level.
#[derive(Debug, Clone, Copy)]
pub struct RuleGroup {
    pub name: &'static str,
    pub rules: &'static [GraphemeRule],
}

const fn rule(digits: &'static str, literals: &'static [&'static str]) -> GraphemeRule {
    GraphemeRule { digits, literals }
}

/// Swedish spelling rules, most specific first.
///
/// Order matters: `ng` has to be seen before `n` and `g`, `sk` before a front
/// vowel at the word start is the sj sound and not `s` + `k`, and so on.
pub static SWEDISH_RULES: &[RuleGroup] = &[
    RuleGroup {
        name: "word-initial",
        rules: &[
            rule("6", &["#ske", "#ski", "#sky", "#skä", "#skö"]),
            rule("6", &["#gj", "#hj", "#dj", "#lj"]),
            rule("6", &["#ke", "#ki", "#ky", "#kä", "#kö"]),
            rule("6", &["#ge", "#gi", "#gy", "#gä", "#gö"]),
        ],
    },
    RuleGroup {
        name: "clusters",
        rules: &[
            rule("6", &["ssio", "skj", "stj", "sch", "sio", "tio"]),
        ],
    },
    RuleGroup {
        name: "digraphs",
        rules: &[
            rule("6", &["sj", "tj", "kj", "ch", "sh"]),
            rule("7", &["ck", "kk", "gg"]),
            rule("78", &["qu"]),
            rule("2", &["ng", "nn"]),
            rule("22", &["gn"]),
            rule("1", &["tt", "dd", "dt", "th"]),
            rule("0", &["ss", "zz", "ce", "ci", "cy"]),
            rule("3", &["mm"]),
            rule("4", &["rr"]),
            rule("46", &["rg"]),
            rule("5", &["ll"]),
            rule("56", &["lg"]),
            rule("8", &["ff", "vv", "ph"]),
            rule("9", &["pp", "bb"]),
        ],
    },
    RuleGroup {
        name: "letters",
        rules: &[
            rule("0", &["s", "z"]),
            rule("1", &["t", "d"]),
            rule("2", &["n"]),
            rule("3", &["m"]),
            rule("4", &["r"]),
            rule("5", &["l"]),
            rule("6", &["j"]),
            rule("7", &["k", "g", "c", "q"]),
            rule("70", &["x"]),
            rule("8", &["f", "v", "w"]),
            rule("9", &["p", "b"]),
        ],
    },
];

/// Estimates a word's digits from its spelling alone.
pub struct OrthographicTransliterator {
    groups: &'static [RuleGroup],
}

impl OrthographicTransliterator {
    pub fn new(groups: &'static [RuleGroup]) -> Self {
        Self { groups }
    }

    /// Greedy left-to-right scan.
    ///
    /// At every position the groups are tried in order, and inside a group
    /// each rule's literals in order. The first literal that matches emits
    /// its digits and moves the cursor past itself; scanning then restarts
    /// from the first group. Where nothing matches (vowels, `h`, the
    /// sentinel) the cursor moves one character and nothing is emitted.
    pub fn transliterate(&self, word: &str) -> DigitString {
        let padded = format!("{}{}", WORD_START, word.to_lowercase());
        let mut digits = String::new();
        let mut cursor = 0;

        'scan: while cursor < padded.len() {
            let rest = &padded[cursor..];
            for group in self.groups {
                for rule in group.rules {
                    for literal in rule.literals {
                        if !literal.is_empty() && rest.starts_with(literal) {
                            digits.push_str(rule.digits);
                            cursor += literal.len();
                            continue 'scan;
                        }
                    }
                }
            }
            cursor += rest.chars().next().map_or(1, char::len_utf8);
        }

        digits
    }
}

impl Default for OrthographicTransliterator {
    fn default() -> Self {
        Self::new(SWEDISH_RULES)
    }
}
