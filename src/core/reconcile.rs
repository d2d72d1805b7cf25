// File: src/core/reconcile.rs
use crate::core::types::DigitString;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pronunciation endings after which the phonetic digits often carry one
/// consonant too many compared with the written word.
pub const DEFAULT_LENGTHENING_SUFFIXES: &[&str] = &[":r", ":t", ":d"];

/// How the final digits of a word were decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Both methods gave the same digits.
    Agreement,
    /// Equal after dropping the last phonetic digit behind a known suffix.
    Resolved,
    /// The methods differ; the phonetic digits are kept.
    Disagreement,
    /// No phonetic signal, the spelling estimate is used.
    Fallback,
    /// A patch record supplied the digits.
    Forced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub word: String,
    pub phonetic: DigitString,
    pub orthographic: DigitString,
}

/// Running counters comparing the two transliteration methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub agreements: usize,
    pub resolved: usize,
    pub disagreements: usize,
    pub fallbacks: usize,
    pub forced: usize,
    pub mismatches: Vec<Mismatch>,
}

impl AccuracyReport {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Agreement => self.agreements += 1,
            Outcome::Resolved => self.resolved += 1,
            Outcome::Disagreement => self.disagreements += 1,
            Outcome::Fallback => self.fallbacks += 1,
            Outcome::Forced => self.forced += 1,
        }
    }

    /// Number of words where both methods could be compared.
    pub fn compared(&self) -> usize {
        self.agreements + self.resolved + self.disagreements
    }

    pub fn disagreement_rate(&self) -> f64 {
        match self.compared() {
            0 => 0.0,
            n => self.disagreements as f64 / n as f64,
        }
    }
}

pub struct Reconciler {
    suffixes: Vec<String>,
}

impl Reconciler {
    pub fn new<S: AsRef<str>>(suffixes: &[S]) -> Self {
        Self {
            suffixes: suffixes.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Picks the final digits for one word and records the outcome.
    ///
    /// The phonetic digits are authoritative whenever there are any; the
    /// spelling estimate only confirms them, or stands in when they are empty.
    /// `pronunciation` must be the cleaned form the phonetic digits came from.
    pub fn reconcile(
        &self,
        word: &str,
        pronunciation: &str,
        phonetic: DigitString,
        orthographic: DigitString,
        report: &mut AccuracyReport,
    ) -> DigitString {
        let (digits, outcome) = self.decide(pronunciation, phonetic, &orthographic);
        if outcome == Outcome::Disagreement {
            debug!(word, phonetic = %digits, orthographic = %orthographic, "transliterations disagree");
            report.mismatches.push(Mismatch {
                word: word.to_string(),
                phonetic: digits.clone(),
                orthographic,
            });
        }
        report.record(outcome);
        digits
    }

    pub fn decide(
        &self,
        pronunciation: &str,
        phonetic: DigitString,
        orthographic: &str,
    ) -> (DigitString, Outcome) {
        if phonetic.is_empty() {
            return (orthographic.to_string(), Outcome::Fallback);
        }
        if phonetic == orthographic {
            return (phonetic, Outcome::Agreement);
        }
        if self.ends_with_suffix(pronunciation) {
            let trimmed = &phonetic[..phonetic.len() - 1];
            if trimmed == orthographic {
                return (orthographic.to_string(), Outcome::Resolved);
            }
        }
        (phonetic, Outcome::Disagreement)
    }

    fn ends_with_suffix(&self, pronunciation: &str) -> bool {
        let pronunciation = pronunciation.trim_end();
        self.suffixes
            .iter()
            .any(|suffix| !suffix.is_empty() && pronunciation.ends_with(suffix.as_str()))
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTHENING_SUFFIXES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pronunciation: &str, phonetic: &str, orthographic: &str) -> (String, AccuracyReport) {
        let mut report = AccuracyReport::default();
        let digits = Reconciler::default().reconcile(
            "w",
            pronunciation,
            phonetic.to_string(),
            orthographic.to_string(),
            &mut report,
        );
        (digits, report)
    }

    #[test]
    fn equal_strings_agree() {
        let (digits, report) = run("k'at:a", "71", "71");
        assert_eq!(digits, "71");
        assert_eq!(report.agreements, 1);
        assert_eq!(report.disagreement_rate(), 0.0);
    }

    #[test]
    fn suffix_trim_resolves_one_extra_digit() {
        let (digits, report) = run("r'ek:t", "471", "47");
        assert_eq!(digits, "47");
        assert_eq!(report.resolved, 1);
        assert_eq!(report.disagreements, 0);
        assert!(report.mismatches.is_empty());
    }

    #[test]
    fn trimming_needs_a_known_suffix() {
        let (digits, report) = run("r'ekt", "471", "47");
        assert_eq!(digits, "471");
        assert_eq!(report.disagreements, 1);
        assert_eq!(report.mismatches[0].orthographic, "47");
    }

    #[test]
    fn trimming_must_produce_the_spelling_digits() {
        let (digits, report) = run("r'ek:t", "471", "4");
        assert_eq!(digits, "471");
        assert_eq!(report.disagreements, 1);
        assert_eq!(report.disagreement_rate(), 1.0);
    }

    #[test]
    fn empty_phonetic_falls_back_to_spelling() {
        let (digits, report) = run("", "", "04121");
        assert_eq!(digits, "04121");
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.compared(), 0);
    }

    #[test]
    fn suffix_list_is_configurable() {
        let reconciler = Reconciler::new(&["e:r"]);
        let (digits, outcome) = reconciler.decide("l'e:r", "54".into(), "5");
        assert_eq!((digits.as_str(), outcome), ("5", Outcome::Resolved));
        let (_, outcome) = reconciler.decide("r'ek:t", "471".into(), "47");
        assert_eq!(outcome, Outcome::Disagreement);
    }
}
