use crate::core::alphabet::DigitAlphabet;
use crate::core::converter::{OrthographicTransliterator, RuleGroup, SWEDISH_RULES};
use crate::core::phonetic::{PhoneticTransliterator, DEFAULT_ALTERNATE_DIVIDER};
use crate::core::reconcile::{AccuracyReport, Outcome, Reconciler, DEFAULT_LENGTHENING_SUFFIXES};
use crate::core::types::{DigitString, LexicalEntry, WordIndex, WordIndexEntry};
use crate::dictionary::{normalize, Lexicon, RawEntry};
use crate::patch::{apply_all, PatchRecord};
use serde::Serialize;
use tracing::info;

/// The tables the engine runs on. Everything language specific lives here.
pub struct TransliterationConfig {
    pub alphabet: DigitAlphabet,
    pub rules: &'static [RuleGroup],
    pub alternate_divider: String,
    pub lengthening_suffixes: Vec<String>,
}

impl Default for TransliterationConfig {
    fn default() -> Self {
        Self {
            alphabet: DigitAlphabet::swedish(),
            rules: SWEDISH_RULES,
            alternate_divider: DEFAULT_ALTERNATE_DIVIDER.to_string(),
            lengthening_suffixes: DEFAULT_LENGTHENING_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Everything one run produces, kept together for reporting and dumping.
#[derive(Debug, Clone, Serialize)]
pub struct IndexBuild {
    pub lexicon: Lexicon,
    pub index: WordIndex,
    pub accuracy: AccuracyReport,
}

// The index engine runs both transliterators per word and lets the
// reconciler pick the final digits.
pub struct IndexEngine {
    pub phonetic: PhoneticTransliterator,
    pub orthographic: OrthographicTransliterator,
    reconciler: Reconciler,
}

impl IndexEngine {
    pub fn new(config: TransliterationConfig) -> Self {
        Self {
            phonetic: PhoneticTransliterator::new(config.alphabet, &config.alternate_divider),
            orthographic: OrthographicTransliterator::new(config.rules),
            reconciler: Reconciler::new(config.lengthening_suffixes.as_slice()),
        }
    }

    /// Final digits for one entry, ignoring patches.
    pub fn digits_for(&self, entry: &LexicalEntry, report: &mut AccuracyReport) -> DigitString {
        let pronunciation = self.phonetic.clean(&entry.pronunciation);
        let phonetic = self.phonetic.transliterate(&pronunciation);
        let orthographic = self.orthographic.transliterate(&entry.word);
        self.reconciler
            .reconcile(&entry.word, &pronunciation, phonetic, orthographic, report)
    }

    pub fn build_index(&self, lexicon: &Lexicon) -> (WordIndex, AccuracyReport) {
        let mut report = AccuracyReport::default();
        let mut index = WordIndex::new();

        for entry in lexicon.entries() {
            let digits = match lexicon.forced_digits(&entry.word) {
                Some(forced) => {
                    report.record(Outcome::Forced);
                    forced.to_string()
                }
                None => self.digits_for(entry, &mut report),
            };
            index.insert(
                entry.word.clone(),
                WordIndexEntry {
                    word: entry.word.clone(),
                    digits,
                    class: entry.class,
                },
            );
        }

        info!(
            words = index.len(),
            agreements = report.agreements,
            resolved = report.resolved,
            disagreements = report.disagreements,
            fallbacks = report.fallbacks,
            forced = report.forced,
            "word index built"
        );
        (index, report)
    }

    /// Normalize, patch, transliterate.
    pub fn run(&self, raw: &[RawEntry], patches: &[PatchRecord]) -> IndexBuild {
        let lexicon = apply_all(normalize(raw), patches);
        let (index, accuracy) = self.build_index(&lexicon);
        IndexBuild { lexicon, index, accuracy }
    }
}

impl Default for IndexEngine {
    fn default() -> Self {
        Self::new(TransliterationConfig::default())
    }
}
