//! Stopword filtering
//!
//! Built-in tables are keyed by [`Language`] and loaded once per process.
//! Every [`StopwordFilter`] borrows its base table and only owns the extra
//! words added on top of it.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::types::Language;

type StopwordTable = FxHashSet<String>;

static ENGLISH: Lazy<StopwordTable> = Lazy::new(|| to_table(ENGLISH_STOPWORDS));
static SINHALA: Lazy<StopwordTable> = Lazy::new(|| to_table(SINHALA_STOPWORDS));
static ENGLISH_EXTENDED: Lazy<StopwordTable> = Lazy::new(|| {
    let mut table: StopwordTable = get(LANGUAGE::English).iter().map(|s| s.to_string()).collect();
    table.extend(ENGLISH_STOPWORDS.iter().map(|s| s.to_string()));
    table
});

fn to_table(words: &[&str]) -> StopwordTable {
    words.iter().map(|w| w.to_lowercase()).collect()
}

/// A filter for removing stopwords from a token stream
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    base: &'static StopwordTable,
    extra: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl StopwordFilter {
    /// Filter backed by the default table for `language`
    pub fn new(language: Language) -> Self {
        let base: &'static StopwordTable = match language {
            Language::English => &ENGLISH,
            Language::Sinhala => &SINHALA,
        };
        Self {
            base,
            extra: FxHashSet::default(),
        }
    }

    /// Filter backed by the larger stopwords-iso list where one exists
    ///
    /// Sinhala has no extended list and uses the default table.
    pub fn extended(language: Language) -> Self {
        match language {
            Language::English => Self {
                base: &ENGLISH_EXTENDED,
                extra: FxHashSet::default(),
            },
            Language::Sinhala => Self::new(language),
        }
    }

    /// Add stopwords on top of the base table
    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.extra.insert(word.to_lowercase());
            }
        }
    }

    /// Builder form of [`add_stopwords`](Self::add_stopwords)
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_stopwords(words);
        self
    }

    /// Check an already-normalized (lowercase) token
    pub fn is_stopword(&self, word: &str) -> bool {
        self.base.contains(word) || self.extra.contains(word)
    }

    /// Number of distinct stopwords in the filter
    pub fn len(&self) -> usize {
        self.base.len() + self.extra.iter().filter(|w| !self.base.contains(*w)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// NLTK english list, the one the original backend filtered with.
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven",
    "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn",
    "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't",
    "won", "won't", "wouldn", "wouldn't",
];

const SINHALA_STOPWORDS: &[&str] = &[
    "සහ", "හා", "හෝ", "නමුත්", "ද", "ය", "යි", "ත්", "නම්", "දී", "මෙම", "එම", "ඒ", "මේ",
    "මෙය", "එය", "ඒවා", "මේවා", "මම", "අපි", "ඔබ", "ඔහු", "ඇය", "ඔවුන්", "කුමක්", "කවුද",
    "ඇයි", "කොහෙද", "කොහොමද", "සඳහා", "විසින්", "ලෙස", "වැනි", "පිළිබඳ", "අතර", "නිසා",
    "වූ", "වන", "ඇති", "කළ", "කර", "කරන", "යන", "බව", "ගැන", "සමග", "සමඟ", "මගින්", "තුළ",
    "පමණ", "වඩා", "විට", "නැත", "නැති", "සිට", "දක්වා", "වෙත", "වෙනුවෙන්", "පසු", "පෙර",
    "ඉතා", "බොහෝ", "සියලු", "සෑම", "එක්", "වෙනත්", "තවත්", "පවා", "හැකි", "යුතු", "විය",
    "වේ", "වෙයි", "ඇත", "සිටී", "කියා", "නොවේ", "තමයි", "මෙන්ම", "එසේ", "මෙසේ",
];
