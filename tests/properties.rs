use major_core::core::alphabet::DigitAlphabet;
use major_core::core::converter::OrthographicTransliterator;
use major_core::core::phonetic::PhoneticTransliterator;
use major_core::core::types::{GrammaticalClass, LexicalEntry};
use major_core::dictionary::Lexicon;
use major_core::patch::{apply_all, parse_patches, PatchRecord};
use major_core::report::{group_by_prefix, LengthPolicy};
use major_core::IndexEngine;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-zåäö]{1,10}"
}

fn entry() -> impl Strategy<Value = LexicalEntry> {
    (word(), "[a-zåäö:'@$]{0,10}", 0..4u8).prop_map(|(word, pronunciation, class)| {
        let class = match class {
            0 => GrammaticalClass::Noun,
            1 => GrammaticalClass::Verb,
            2 => GrammaticalClass::Adjective,
            _ => GrammaticalClass::Other,
        };
        LexicalEntry::new(&word, &pronunciation, class)
    })
}

proptest! {
    #[test]
    fn transliterations_only_emit_digits(word in word(), pronunciation in "\\PC{0,20}") {
        let orthographic = OrthographicTransliterator::default().transliterate(&word);
        let phonetic = PhoneticTransliterator::default().transliterate(&pronunciation);
        prop_assert!(orthographic.bytes().all(|b| b.is_ascii_digit()));
        prop_assert!(phonetic.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn phonetic_digits_count_mapped_symbols(pronunciation in "[a-z:'@$ ]{0,20}") {
        let alphabet = DigitAlphabet::swedish();
        let mapped = pronunciation.chars().filter(|&c| alphabet.digit_for(c).is_some()).count();
        let digits = PhoneticTransliterator::default().transliterate(&pronunciation);
        prop_assert_eq!(digits.len(), mapped);
    }

    #[test]
    fn grouping_is_deterministic(entries in prop::collection::vec(entry(), 0..40), len in 1..4usize) {
        let engine = IndexEngine::default();
        let (first, _) = engine.build_index(&Lexicon::from_entries(entries.clone()));
        let (second, _) = engine.build_index(&Lexicon::from_entries(entries));
        for policy in [LengthPolicy::Exact, LengthPolicy::IncludeLonger] {
            prop_assert_eq!(
                group_by_prefix(&first, GrammaticalClass::Noun, len, policy),
                group_by_prefix(&second, GrammaticalClass::Noun, len, policy)
            );
        }
    }

    #[test]
    fn removed_words_stay_removed(entries in prop::collection::vec(entry(), 1..20), pick in any::<prop::sample::Index>()) {
        let target = entries[pick.index(entries.len())].word.clone();
        let records = vec![
            PatchRecord::remove(&target),
            PatchRecord::from_fields(&[target.as_str(), "", "noun", "12"], 2).unwrap(),
        ];
        let lexicon = apply_all(Lexicon::from_entries(entries), &records);
        let (index, _) = IndexEngine::default().build_index(&lexicon);
        prop_assert!(!index.contains_key(&target));
    }

    #[test]
    fn decorated_removals_hit_the_plain_word(entries in prop::collection::vec(entry(), 1..20), pick in any::<prop::sample::Index>(), cut in any::<prop::sample::Index>()) {
        let target = entries[pick.index(entries.len())].word.clone();
        let chars: Vec<char> = target.chars().collect();
        let at = cut.index(chars.len() + 1);
        let decorated: String = chars[..at].iter().chain(['|'].iter()).chain(chars[at..].iter()).collect();
        let text = format!("{}, , remove,\n{}, , noun, 12\n", decorated, target);
        let records = parse_patches(text.as_bytes()).unwrap();
        let lexicon = apply_all(Lexicon::from_entries(entries), &records);
        let (index, _) = IndexEngine::default().build_index(&lexicon);
        prop_assert!(!index.contains_key(&target));
    }

    #[test]
    fn pronunciation_digits_are_never_replaced_by_spelling(entry in entry()) {
        let engine = IndexEngine::default();
        let phonetic = engine.phonetic.transliterate(&entry.pronunciation);
        let (index, _) = engine.build_index(&Lexicon::from_entries([entry.clone()]));
        let digits = &index[&entry.word].digits;
        if phonetic.is_empty() {
            prop_assert_eq!(digits, &engine.orthographic.transliterate(&entry.word));
        } else {
            // either kept as is, or trimmed by exactly one digit
            prop_assert!(digits == &phonetic || (digits.len() + 1 == phonetic.len() && phonetic.starts_with(digits.as_str())));
        }
    }
}
