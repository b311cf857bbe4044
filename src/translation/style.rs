/*!
 * Heuristic writing-style analysis and auto-correction.
 *
 * The analyzer derives a coarse style profile from pattern counts so that the
 * translation prompt can ask for matching register, and proposes rule-based
 * corrections for the translated text. Marker tables cover the Arabic and
 * English registers the assistant is used with. Everything here is a pure
 * function of its input text; no state is retained between calls.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::language_utils::normalize_to_part2t;

/// Register of the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Formal,
    Informal,
    Mixed,
}

/// Dominant tone of the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Serious,
    Humorous,
    Dramatic,
    Neutral,
}

/// Structural complexity of the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

/// Density of descriptive language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Descriptiveness {
    Minimal,
    Moderate,
    Detailed,
}

/// How dialogue is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogueStyle {
    Direct,
    Indirect,
    Mixed,
}

impl Formality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Informal => "informal",
            Self::Mixed => "mixed",
        }
    }
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Serious => "serious",
            Self::Humorous => "humorous",
            Self::Dramatic => "dramatic",
            Self::Neutral => "neutral",
        }
    }
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }
}

impl Descriptiveness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Moderate => "moderate",
            Self::Detailed => "detailed",
        }
    }
}

impl DialogueStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Indirect => "indirect",
            Self::Mixed => "mixed",
        }
    }
}

/// Coarse writing-style profile, recomputed on every analysis call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingStyle {
    /// Register of the text
    pub formality: Formality,
    /// Dominant tone
    pub tone: Tone,
    /// Structural complexity
    pub complexity: Complexity,
    /// Density of descriptive language
    pub descriptiveness: Descriptiveness,
    /// How dialogue is rendered
    pub dialogue_style: DialogueStyle,
}

/// Category of an auto-correction rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionKind {
    Grammar,
    Spelling,
    Punctuation,
    Style,
}

/// A proposed correction to a span of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoCorrection {
    /// The matched text
    pub original: String,
    /// The replacement text
    pub corrected: String,
    /// Rule category
    pub kind: CorrectionKind,
    /// Rule confidence in [0, 1]
    pub confidence: f32,
}

/// Corrections with confidence at or above this threshold are applied to the
/// final text; the rest are only reported.
pub const APPLY_CONFIDENCE_THRESHOLD: f32 = 0.8;

struct CorrectionRule {
    pattern: Regex,
    replacement: &'static str,
    kind: CorrectionKind,
    confidence: f32,
    /// ISO 639-2/T language scope; None applies to every language
    language: Option<&'static str>,
}

// Ordered rule table: grammar redundancies first, then whitespace-around-
// punctuation normalization. Spelling rules are an extension point and the
// table currently carries none.
static CORRECTION_RULES: Lazy<Vec<CorrectionRule>> = Lazy::new(|| {
    let rule = |pattern: &str,
                replacement: &'static str,
                kind: CorrectionKind,
                confidence: f32,
                language: Option<&'static str>| {
        CorrectionRule {
            pattern: Regex::new(pattern).expect("valid correction rule pattern"),
            replacement,
            kind,
            confidence,
            language,
        }
    };

    vec![
        rule("كان سوف", "سوف", CorrectionKind::Grammar, 0.9, Some("ara")),
        rule("قد سوف", "سوف", CorrectionKind::Grammar, 0.9, Some("ara")),
        rule(r"\bmore better\b", "better", CorrectionKind::Grammar, 0.9, Some("eng")),
        rule(r"\breturn back\b", "return", CorrectionKind::Grammar, 0.9, Some("eng")),
        rule(r"\s+،\s*", "، ", CorrectionKind::Punctuation, 0.95, None),
        rule(r"\s+,\s*", ", ", CorrectionKind::Punctuation, 0.95, None),
        rule(r"\s+\.\s*", ". ", CorrectionKind::Punctuation, 0.95, None),
        rule(r"\s+؟\s*", "؟ ", CorrectionKind::Punctuation, 0.95, None),
        rule(r"\s+\?\s*", "? ", CorrectionKind::Punctuation, 0.95, None),
    ]
});

static FORMAL_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "حضرتك|سيادتك|فضيلتك|معالي|يرجى|نرجو|نأمل|وفقا|بناء على\
         |kindly|sincerely|respectfully|therefore|moreover|furthermore",
    )
    .expect("valid formal marker pattern")
});

static INFORMAL_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new("انت|انتي|عايز|عاوز|كده|كدا|gonna|wanna|gotta|yeah|\\blol\\b")
        .expect("valid informal marker pattern")
});

static SERIOUS_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new("للأسف|للاسف|مع الأسف|خطير|هام|ضروري|unfortunately|critical|urgent|serious")
        .expect("valid serious marker pattern")
});

static HUMOROUS_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new("هههه|هاها|😂|😄|نكتة|مضحك|haha|funny|joke").expect("valid humorous marker pattern")
});

static DRAMATIC_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new("مأساوي|حزين|مؤلم|صادم|مفجع|tragic|heartbreaking|devastating|shocking")
        .expect("valid dramatic marker pattern")
});

static NEUTRAL_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new("يبدو|ربما|من المحتمل|\\bقد\\b|perhaps|maybe|possibly|seems")
        .expect("valid neutral marker pattern")
});

static DESCRIPTIVE_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "وصف|يصف|كأن|مثل|يشبه|جميل|رائع|مذهل|ساحر|كبير|صغير|طويل|قصير\
         |beautiful|stunning|gorgeous|enormous|tiny|as if|like a",
    )
    .expect("valid descriptive marker pattern")
});

static REPORTED_SPEECH: Lazy<Regex> = Lazy::new(|| {
    Regex::new("قال|أخبر|ذكر|أجاب|\\bsaid\\b|\\btold\\b|\\basked\\b|\\breplied\\b|\\bmentioned\\b")
        .expect("valid reported speech pattern")
});

static QUOTED_SPANS: Lazy<Regex> = Lazy::new(|| {
    Regex::new("\"[^\"\n]+\"|“[^”\n]+”|«[^»\n]+»|‘[^’\n]+’").expect("valid quoted span pattern")
});

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new("[.!?؟]+").expect("valid sentence boundary pattern"));

fn count_matches(pattern: &Regex, text: &str) -> usize {
    pattern.find_iter(text).count()
}

/// Heuristic writing-style analyzer
#[derive(Debug, Default, Clone, Copy)]
pub struct StyleAnalyzer;

impl StyleAnalyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self
    }

    /// Derive the writing-style profile of a text
    pub fn analyze_style(&self, text: &str) -> WritingStyle {
        WritingStyle {
            formality: self.formality(text),
            tone: self.tone(text),
            complexity: self.complexity(text),
            descriptiveness: self.descriptiveness(text),
            dialogue_style: self.dialogue_style(text),
        }
    }

    /// Propose corrections for a text.
    ///
    /// Rules scoped to a language apply only when `target_lang` names that
    /// language; an unrecognized code keeps the unscoped rules only. Every
    /// match is reported, regardless of whether it clears the application
    /// threshold.
    pub fn propose_corrections(&self, text: &str, target_lang: &str) -> Vec<AutoCorrection> {
        let mut corrections = Vec::new();
        for rule in Self::applicable_rules(target_lang) {
            for found in rule.pattern.find_iter(text) {
                corrections.push(AutoCorrection {
                    original: found.as_str().to_string(),
                    corrected: rule.replacement.to_string(),
                    kind: rule.kind,
                    confidence: rule.confidence,
                });
            }
        }
        corrections
    }

    /// Propose corrections and apply those that clear the confidence
    /// threshold, in table order. Returns the corrected text together with
    /// every proposed correction.
    pub fn apply_corrections(&self, text: &str, target_lang: &str) -> (String, Vec<AutoCorrection>) {
        let corrections = self.propose_corrections(text, target_lang);

        let mut corrected = text.to_string();
        for rule in Self::applicable_rules(target_lang) {
            if rule.confidence >= APPLY_CONFIDENCE_THRESHOLD {
                corrected = rule
                    .pattern
                    .replace_all(&corrected, rule.replacement)
                    .into_owned();
            }
        }

        (corrected, corrections)
    }

    fn applicable_rules(target_lang: &str) -> impl Iterator<Item = &'static CorrectionRule> {
        let normalized = normalize_to_part2t(target_lang).ok();
        CORRECTION_RULES.iter().filter(move |rule| match rule.language {
            None => true,
            Some(scope) => normalized.as_deref() == Some(scope),
        })
    }

    fn formality(&self, text: &str) -> Formality {
        let formal = count_matches(&FORMAL_MARKERS, text);
        let informal = count_matches(&INFORMAL_MARKERS, text);

        let total = formal + informal;
        // No markers at all: the undefined ratio falls into the mixed band
        let ratio = if total == 0 {
            0.5
        } else {
            formal as f32 / total as f32
        };

        if ratio > 0.7 {
            Formality::Formal
        } else if ratio < 0.3 {
            Formality::Informal
        } else {
            Formality::Mixed
        }
    }

    fn tone(&self, text: &str) -> Tone {
        let buckets = [
            (Tone::Serious, count_matches(&SERIOUS_MARKERS, text)),
            (Tone::Humorous, count_matches(&HUMOROUS_MARKERS, text)),
            (Tone::Dramatic, count_matches(&DRAMATIC_MARKERS, text)),
            (Tone::Neutral, count_matches(&NEUTRAL_MARKERS, text)),
        ];

        let max = buckets.iter().map(|(_, count)| *count).max().unwrap_or(0);
        if max == 0 {
            return Tone::Neutral;
        }

        // Only a strictly dominant bucket wins; ties fall back to neutral
        let mut winners = buckets.iter().filter(|(_, count)| *count == max);
        let first = winners.next().expect("max comes from the buckets");
        if winners.next().is_some() {
            Tone::Neutral
        } else {
            first.0
        }
    }

    fn complexity(&self, text: &str) -> Complexity {
        let word_count = text.split_whitespace().count();
        if word_count == 0 {
            return Complexity::Simple;
        }

        let sentence_count = SENTENCE_BOUNDARY
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count()
            .max(1);

        let avg_word_length = text.chars().count() as f32 / word_count as f32;
        let avg_sentence_length = word_count as f32 / sentence_count as f32;
        let score = (avg_word_length * 0.3 + avg_sentence_length * 0.7) / 10.0;

        if score < 0.4 {
            Complexity::Simple
        } else if score < 0.7 {
            Complexity::Moderate
        } else {
            Complexity::Complex
        }
    }

    fn descriptiveness(&self, text: &str) -> Descriptiveness {
        let char_count = text.chars().count().max(1);
        let density = count_matches(&DESCRIPTIVE_MARKERS, text) as f32 / char_count as f32;

        if density < 0.01 {
            Descriptiveness::Minimal
        } else if density < 0.03 {
            Descriptiveness::Moderate
        } else {
            Descriptiveness::Detailed
        }
    }

    fn dialogue_style(&self, text: &str) -> DialogueStyle {
        let quoted = count_matches(&QUOTED_SPANS, text);
        let reported = count_matches(&REPORTED_SPEECH, text);

        if quoted > reported * 2 {
            DialogueStyle::Direct
        } else if reported > quoted * 2 {
            DialogueStyle::Indirect
        } else {
            DialogueStyle::Mixed
        }
    }
}
