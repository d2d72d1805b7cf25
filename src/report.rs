// File: src/report.rs
//! Prefix buckets and the HTML document built from them.

use crate::core::reconcile::AccuracyReport;
use crate::core::types::{GrammaticalClass, WordIndex};
use crate::dictionary::DictionaryStats;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

/// Which digit strings take part in grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Only digit strings exactly as long as the prefix.
    Exact,
    /// Longer strings too, grouped by their first digits.
    IncludeLonger,
}

impl LengthPolicy {
    pub fn from_flag(include_longer: bool) -> Self {
        if include_longer {
            Self::IncludeLonger
        } else {
            Self::Exact
        }
    }

    fn accepts(self, len: usize, prefix_len: usize) -> bool {
        match self {
            Self::Exact => len == prefix_len,
            Self::IncludeLonger => len >= prefix_len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub prefix: String,
    pub words: Vec<String>,
}

/// Buckets the words of `class` by their first `prefix_len` digits.
///
/// Buckets come out sorted by prefix and words sorted inside each bucket, so
/// the same index always gives the same buckets.
pub fn group_by_prefix(
    index: &WordIndex,
    class: GrammaticalClass,
    prefix_len: usize,
    policy: LengthPolicy,
) -> Vec<Bucket> {
    let mut buckets: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for entry in index.values() {
        if entry.class != class || !policy.accepts(entry.digits.len(), prefix_len) {
            continue;
        }
        buckets
            .entry(&entry.digits[..prefix_len])
            .or_default()
            .insert(entry.word.as_str());
    }
    buckets
        .into_iter()
        .filter(|(_, words)| !words.is_empty())
        .map(|(prefix, words)| Bucket {
            prefix: prefix.to_string(),
            words: words.into_iter().map(str::to_string).collect(),
        })
        .collect()
}

/// Optional hand written pieces placed around the generated content.
#[derive(Debug, Clone, Default)]
pub struct Fragments {
    pub header: Option<String>,
    pub description: Option<String>,
    pub footer: Option<String>,
}

pub struct Summary<'a> {
    pub stats: Option<&'a DictionaryStats>,
    pub accuracy: Option<&'a AccuracyReport>,
    pub indexed_words: usize,
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Assembles the whole report document in memory.
pub fn render_html(title: &str, buckets: &[Bucket], fragments: &Fragments, summary: &Summary) -> String {
    let title = escape_html(title);
    let mut html = String::new();

    match &fragments.header {
        Some(header) => html.push_str(header),
        None => {
            let _ = write!(
                html,
                "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n",
                title
            );
        }
    }
    let _ = writeln!(html, "<h1>{}</h1>", title);
    if let Some(description) = &fragments.description {
        html.push_str(description);
        html.push('\n');
    }

    render_summary(&mut html, summary);

    html.push_str("<p class=\"prefixes\">\n");
    for bucket in buckets {
        let _ = writeln!(html, "<a href=\"#n{0}\">{0}</a>", bucket.prefix);
    }
    html.push_str("</p>\n<dl>\n");
    for bucket in buckets {
        let words: Vec<String> = bucket.words.iter().map(|w| escape_html(w)).collect();
        let _ = writeln!(
            html,
            "<dt id=\"n{0}\">{0}</dt>\n<dd>{1}</dd>",
            bucket.prefix,
            words.join(", ")
        );
    }
    html.push_str("</dl>\n");

    match &fragments.footer {
        Some(footer) => html.push_str(footer),
        None => html.push_str("</body>\n</html>\n"),
    }
    html
}

fn render_summary(html: &mut String, summary: &Summary) {
    html.push_str("<ul class=\"summary\">\n");
    let _ = writeln!(html, "<li>Indexed words: {}</li>", summary.indexed_words);
    if let Some(stats) = summary.stats {
        let _ = writeln!(html, "<li>Dictionary words: {}</li>", stats.total_words);
        for (name, counts) in [
            ("Nouns", stats.nouns),
            ("Verbs", stats.verbs),
            ("Adjectives", stats.adjectives),
        ] {
            let _ = writeln!(
                html,
                "<li>{}: {} ({} with pronunciation)</li>",
                name, counts.total, counts.with_pronunciation
            );
        }
    }
    if let Some(accuracy) = summary.accuracy {
        let _ = writeln!(
            html,
            "<li>Spelling check: {} agree, {} resolved, {} disagree ({:.1}%)</li>",
            accuracy.agreements,
            accuracy.resolved,
            accuracy.disagreements,
            accuracy.disagreement_rate() * 100.0
        );
    }
    html.push_str("</ul>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::WordIndexEntry;

    fn index(entries: &[(&str, &str, GrammaticalClass)]) -> WordIndex {
        entries
            .iter()
            .map(|&(word, digits, class)| {
                (
                    word.to_string(),
                    WordIndexEntry { word: word.to_string(), digits: digits.to_string(), class },
                )
            })
            .collect()
    }

    fn sample() -> WordIndex {
        use GrammaticalClass::*;
        index(&[
            ("strand", "04121", Noun),
            ("sträng", "042", Noun),
            ("stång", "012", Noun),
            ("sorl", "045", Noun),
            ("springa", "09427", Verb),
            ("ö", "", Noun),
        ])
    }

    #[test]
    fn exact_policy_needs_the_full_length() {
        let buckets = group_by_prefix(&sample(), GrammaticalClass::Noun, 3, LengthPolicy::Exact);
        let prefixes: Vec<&str> = buckets.iter().map(|b| b.prefix.as_str()).collect();
        assert_eq!(prefixes, ["012", "042", "045"]);
    }

    #[test]
    fn longer_strings_group_by_their_prefix() {
        let buckets = group_by_prefix(&sample(), GrammaticalClass::Noun, 3, LengthPolicy::IncludeLonger);
        assert_eq!(
            buckets[0],
            Bucket { prefix: "012".into(), words: vec!["stång".into()] }
        );
        assert_eq!(buckets[1].prefix, "041");
        assert_eq!(buckets[1].words, ["strand"]);
        assert_eq!(buckets.len(), 4);
    }

    #[test]
    fn other_classes_are_left_out() {
        let buckets = group_by_prefix(&sample(), GrammaticalClass::Verb, 2, LengthPolicy::IncludeLonger);
        assert_eq!(buckets, [Bucket { prefix: "09".into(), words: vec!["springa".into()] }]);
    }

    #[test]
    fn words_in_a_bucket_are_sorted() {
        use GrammaticalClass::Noun;
        let idx = index(&[("tå", "1", Noun), ("dy", "1", Noun), ("te", "1", Noun)]);
        let buckets = group_by_prefix(&idx, Noun, 1, LengthPolicy::Exact);
        assert_eq!(buckets[0].words, ["dy", "te", "tå"]);
    }

    #[test]
    fn html_escapes_words_and_links_buckets() {
        let buckets = vec![Bucket { prefix: "12".into(), words: vec!["a<b".into(), "tand".into()] }];
        let summary = Summary { stats: None, accuracy: None, indexed_words: 2 };
        let html = render_html("Nouns & such", &buckets, &Fragments::default(), &summary);
        assert!(html.contains("<title>Nouns &amp; such</title>"));
        assert!(html.contains("<a href=\"#n12\">12</a>"));
        assert!(html.contains("<dd>a&lt;b, tand</dd>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn fragments_replace_the_default_frame() {
        let fragments = Fragments {
            header: Some("<html><body>".into()),
            description: Some("<p>about</p>".into()),
            footer: Some("</body></html>".into()),
        };
        let summary = Summary { stats: None, accuracy: None, indexed_words: 0 };
        let html = render_html("t", &[], &fragments, &summary);
        assert!(html.starts_with("<html><body><h1>t</h1>\n<p>about</p>"));
        assert!(html.ends_with("</body></html>"));
    }
}
