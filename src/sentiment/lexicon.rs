//! Lexicon-backed scorer
//!
//! Scores text by averaging the polarity and subjectivity of every lexicon
//! word found in it. Modifier words scale the word that follows them,
//! negations halve and flip the next assessment, and exclamation marks
//! strengthen the most recent one.

use super::error::{LexiconError, SentimentError};
use super::scorer::Scorer;
use super::types::Score;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, OnceLock};
use tracing::{info, warn};

/// Lexicon shipped with the binary
const EMBEDDED_LEXICON: &str = include_str!("lexicon.csv");

/// Words, `!` marks
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['\-][\p{L}\p{N}]+)*|!").unwrap()
});

const NEGATIONS: &[&str] = &["not", "never", "no"];

/// Multiplier applied to the polarity of a negated assessment
const NEGATION_FACTOR: f64 = -0.5;

/// Multiplier applied to the polarity of an exclaimed assessment
const EXCLAMATION_FACTOR: f64 = 1.25;

/// One row of the lexicon CSV
#[derive(Debug, Deserialize)]
struct LexiconRecord {
    word: String,
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
}

/// Sentiment attached to a single word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordSentiment {
    pub polarity: f64,
    pub subjectivity: f64,
    /// 1.0 for plain words, anything else marks a modifier
    pub intensity: f64,
}

impl WordSentiment {
    fn is_modifier(&self) -> bool {
        self.intensity != 1.0
    }
}

/// Word to sentiment mapping
#[derive(Debug, Default)]
pub struct Lexicon {
    words: HashMap<String, WordSentiment>,
}

impl Lexicon {
    /// Parse a lexicon from CSV with a `word,polarity,subjectivity,intensity` header.
    ///
    /// Lines starting with `#` are ignored. Later rows override earlier ones.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, LexiconError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut words = HashMap::new();
        for record in csv_reader.deserialize::<LexiconRecord>() {
            let record = record?;
            let entry = validate(&record)?;
            words.insert(record.word.to_lowercase(), entry);
        }

        if words.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(Self { words })
    }

    /// Load a lexicon file from disk
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let file = File::open(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// The lexicon compiled into the binary
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::from_reader(EMBEDDED_LEXICON.as_bytes())
    }

    pub fn get(&self, word: &str) -> Option<&WordSentiment> {
        self.words.get(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Score a text against this lexicon.
    ///
    /// Text without any lexicon word scores (0.0, 0.0).
    pub fn score(&self, text: &str) -> Score {
        let tokens = tokenize(text);
        let mut assessments: Vec<Score> = Vec::new();
        let mut negate = false;
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i].as_str();

            if token == "!" {
                if let Some(last) = assessments.last_mut() {
                    last.polarity = clamp_polarity(last.polarity * EXCLAMATION_FACTOR);
                }
                i += 1;
                continue;
            }

            if is_negation(token) {
                negate = true;
                i += 1;
                continue;
            }

            let Some(entry) = self.get(token) else {
                negate = false;
                i += 1;
                continue;
            };

            let next = tokens.get(i + 1).and_then(|t| self.get(t));
            let mut assessment = match next {
                Some(next) if entry.is_modifier() => {
                    i += 2;
                    Score::new(
                        clamp_polarity(next.polarity * entry.intensity),
                        clamp_subjectivity(next.subjectivity * entry.intensity),
                    )
                }
                _ => {
                    i += 1;
                    Score::new(entry.polarity, entry.subjectivity)
                }
            };

            if negate {
                assessment.polarity *= NEGATION_FACTOR;
                negate = false;
            }
            assessments.push(assessment);
        }

        if assessments.is_empty() {
            return Score::default();
        }

        let count = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / count;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / count;

        // Adding 0.0 turns a negated zero into a plain zero
        Score::new(
            clamp_polarity(polarity) + 0.0,
            clamp_subjectivity(subjectivity),
        )
    }
}

fn validate(record: &LexiconRecord) -> Result<WordSentiment, LexiconError> {
    let out_of_range = |reason| LexiconError::OutOfRange {
        word: record.word.clone(),
        reason,
    };

    if record.word.is_empty() {
        return Err(out_of_range("word is empty"));
    }
    if !(-1.0..=1.0).contains(&record.polarity) {
        return Err(out_of_range("polarity must be within -1.0..=1.0"));
    }
    if !(0.0..=1.0).contains(&record.subjectivity) {
        return Err(out_of_range("subjectivity must be within 0.0..=1.0"));
    }
    if !record.intensity.is_finite() || record.intensity <= 0.0 {
        return Err(out_of_range("intensity must be a positive number"));
    }

    Ok(WordSentiment {
        polarity: record.polarity,
        subjectivity: record.subjectivity,
        intensity: record.intensity,
    })
}

/// Split text into lower-cased word and `!` tokens
fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.to_lowercase().replace('\u{2019}', "'");
    TOKEN_REGEX
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

fn clamp_polarity(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

fn clamp_subjectivity(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Where the lexicon comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    Embedded,
    File(PathBuf),
}

impl LexiconSource {
    /// Pick the source for an optional configured path
    pub fn from_config(path: Option<&Path>) -> Self {
        match path {
            Some(p) => LexiconSource::File(p.to_path_buf()),
            None => LexiconSource::Embedded,
        }
    }
}

/// Scorer that loads its lexicon on first use
///
/// A load failure is remembered, so every later call reports the same
/// `ScoringUnavailable` error instead of retrying.
#[derive(Debug)]
pub struct LexiconScorer {
    source: LexiconSource,
    lexicon: OnceLock<Result<Lexicon, String>>,
}

impl LexiconScorer {
    pub fn new(source: LexiconSource) -> Self {
        Self {
            source,
            lexicon: OnceLock::new(),
        }
    }

    /// Scorer backed by the lexicon compiled into the binary
    pub fn embedded() -> Self {
        Self::new(LexiconSource::Embedded)
    }

    pub fn source(&self) -> &LexiconSource {
        &self.source
    }

    /// Load the lexicon now rather than on the first analysis
    pub fn warm_up(&self) -> Result<&Lexicon, SentimentError> {
        self.lexicon()
    }

    fn lexicon(&self) -> Result<&Lexicon, SentimentError> {
        self.lexicon
            .get_or_init(|| {
                let loaded = match &self.source {
                    LexiconSource::Embedded => Lexicon::embedded(),
                    LexiconSource::File(path) => Lexicon::from_path(path),
                };
                match loaded {
                    Ok(lexicon) => {
                        info!(source = ?self.source, entries = lexicon.len(), "lexicon loaded");
                        Ok(lexicon)
                    }
                    Err(err) => {
                        warn!(source = ?self.source, error = %err, "lexicon unavailable");
                        Err(err.to_string())
                    }
                }
            })
            .as_ref()
            .map_err(|reason| SentimentError::ScoringUnavailable(reason.clone()))
    }
}

impl Scorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<Score, SentimentError> {
        Ok(self.lexicon()?.score(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn lexicon() -> Lexicon {
        Lexicon::embedded().unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("sentiment-tui-{}-{}.csv", name, nanos));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_embedded_lexicon_loads() {
        let lexicon = lexicon();
        assert!(lexicon.len() > 50);
        assert_eq!(
            lexicon.get("love"),
            Some(&WordSentiment {
                polarity: 0.5,
                subjectivity: 0.6,
                intensity: 1.0
            })
        );
        assert!(lexicon.get("very").unwrap().is_modifier());
    }

    #[test]
    fn test_tokenize_keeps_contractions_and_exclamations() {
        assert_eq!(
            tokenize("I DON'T like it!!"),
            vec!["i", "don't", "like", "it", "!", "!"]
        );
        assert_eq!(tokenize("It isn\u{2019}t"), vec!["it", "isn't"]);
        assert_eq!(tokenize("well-known, ok?"), vec!["well-known", "ok"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_no_matches_is_zero() {
        assert_eq!(lexicon().score(""), Score::new(0.0, 0.0));
        assert_eq!(lexicon().score("The meeting is at noon."), Score::new(0.0, 0.0));
    }

    #[test]
    fn test_single_word() {
        let score = lexicon().score("I hate this.");
        assert_close(score.polarity, -0.8);
        assert_close(score.subjectivity, 0.9);
    }

    #[test]
    fn test_exclamation_boosts_last_assessment() {
        let score = lexicon().score("I love this!");
        assert_close(score.polarity, 0.625);
        assert_close(score.subjectivity, 0.6);
    }

    #[test]
    fn test_exclamation_is_clamped() {
        let score = lexicon().score("perfect!!!");
        assert_close(score.polarity, 1.0);
    }

    #[test]
    fn test_exclamation_without_assessment_is_ignored() {
        assert_eq!(lexicon().score("!!!"), Score::new(0.0, 0.0));
    }

    #[test]
    fn test_modifier_scales_next_word() {
        let score = lexicon().score("very good");
        assert_close(score.polarity, 0.91);
        assert_close(score.subjectivity, 0.78);
    }

    #[test]
    fn test_trailing_modifier_is_scored_alone() {
        let score = lexicon().score("thanks very");
        assert_close(score.polarity, 0.2);
        assert_close(score.subjectivity, 0.3);
    }

    #[test]
    fn test_negation_flips_and_halves() {
        let score = lexicon().score("not bad");
        assert_close(score.polarity, 0.35);
        assert_close(score.subjectivity, 0.667);

        let score = lexicon().score("it wasn't good");
        assert_close(score.polarity, -0.35);
    }

    #[test]
    fn test_negation_words() {
        for word in ["not", "never", "no", "don't", "isn't", "wouldn't"] {
            assert!(is_negation(word), "{word} should negate");
        }
        assert!(!is_negation("cannot"));
        assert!(!is_negation("nothing"));

        let score = lexicon().score("cannot good");
        assert_close(score.polarity, 0.7);
    }

    #[test]
    fn test_negation_reaches_through_modifier() {
        let score = lexicon().score("not very good");
        assert_close(score.polarity, -0.455);
    }

    #[test]
    fn test_negation_is_cleared_by_unknown_word() {
        let score = lexicon().score("not that the food was good");
        assert_close(score.polarity, 0.7);
    }

    #[test]
    fn test_scores_are_averaged() {
        let score = lexicon().score("good but sad");
        assert_close(score.polarity, (0.7 - 0.5) / 2.0);
        assert_close(score.subjectivity, (0.6 + 1.0) / 2.0);
    }

    #[test]
    fn test_negated_zero_is_plain_zero() {
        let score = lexicon().score("not quite");
        assert_eq!(score.polarity.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_from_reader_skips_comments_and_trims() {
        let csv = "# comment\nword, polarity, subjectivity, intensity\n Great , 0.8, 0.75, 1.0\n";
        let lexicon = Lexicon::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.get("great").unwrap().polarity, 0.8);
    }

    #[test]
    fn test_from_reader_rejects_out_of_range() {
        let csv = "word,polarity,subjectivity,intensity\ngreat,1.5,0.5,1.0\n";
        let err = Lexicon::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LexiconError::OutOfRange { ref word, .. } if word == "great"));

        let csv = "word,polarity,subjectivity,intensity\nvery,0.2,0.3,0\n";
        assert!(matches!(
            Lexicon::from_reader(csv.as_bytes()),
            Err(LexiconError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_reader_rejects_malformed_rows() {
        let csv = "word,polarity,subjectivity,intensity\ngreat,high,0.5,1.0\n";
        assert!(matches!(
            Lexicon::from_reader(csv.as_bytes()),
            Err(LexiconError::Csv(_))
        ));
    }

    #[test]
    fn test_from_reader_rejects_empty() {
        let csv = "word,polarity,subjectivity,intensity\n";
        assert!(matches!(
            Lexicon::from_reader(csv.as_bytes()),
            Err(LexiconError::Empty)
        ));
    }

    #[test]
    fn test_from_path() {
        let path = temp_file(
            "lexicon",
            "word,polarity,subjectivity,intensity\nsplendid,0.9,0.8,1.0\n",
        );
        let lexicon = Lexicon::from_path(&path).unwrap();
        assert_close(lexicon.score("a splendid day").polarity, 0.9);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_scorer_uses_configured_file() {
        let path = temp_file(
            "scorer",
            "word,polarity,subjectivity,intensity\nmeh,-0.2,0.4,1.0\n",
        );
        let scorer = LexiconScorer::new(LexiconSource::from_config(Some(&path)));
        let score = scorer.score("meh").unwrap();
        assert_close(score.polarity, -0.2);
        // Only the configured file is consulted
        assert_eq!(scorer.score("love").unwrap(), Score::new(0.0, 0.0));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_scorer_failure_is_sticky() {
        let scorer = LexiconScorer::new(LexiconSource::File(PathBuf::from(
            "/nonexistent/sentiment-tui/lexicon.csv",
        )));
        let first = scorer.score("love").unwrap_err();
        let second = scorer.score("love").unwrap_err();
        assert_eq!(first, second);
        assert!(scorer.warm_up().is_err());
    }

    #[test]
    fn test_source_from_config() {
        assert_eq!(LexiconSource::from_config(None), LexiconSource::Embedded);
        assert_eq!(
            LexiconSource::from_config(Some(Path::new("/tmp/lex.csv"))),
            LexiconSource::File(PathBuf::from("/tmp/lex.csv"))
        );
    }
}
