//! Intent Classification using ordered keyword tables.
//!
//! Case-folded substring matching, first match wins. The ladder is:
//! greeting, topic (then that topic's facet ladder), topic-agnostic canned
//! replies, general fallback. Classification is total: every string,
//! including the empty one, resolves to an intent.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::knowledge::{Facet, Topic};

/// Fixed replies that bypass the knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CannedReply {
    Greeting,
    Symptoms,
    Treatment,
    Comparison,
    Prognosis,
    Thanks,
}

impl CannedReply {
    pub fn label(&self) -> &'static str {
        match self {
            CannedReply::Greeting => "greeting",
            CannedReply::Symptoms => "symptoms",
            CannedReply::Treatment => "treatment",
            CannedReply::Comparison => "comparison",
            CannedReply::Prognosis => "prognosis",
            CannedReply::Thanks => "thanks",
        }
    }
}

/// Resolved response path for one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intent {
    /// Fixed string, no knowledge-base draw
    Canned { reply: CannedReply },
    /// Draw from the (topic, facet) knowledge entry
    Knowledge { topic: Topic, facet: Facet },
    /// Nothing matched: draw from the general list
    General,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Canned { reply } => write!(f, "canned:{}", reply.label()),
            Intent::Knowledge { topic, facet } => write!(f, "{}/{}", topic, facet),
            Intent::General => write!(f, "general"),
        }
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub intent: Intent,
    /// Keyword that selected the topic or canned reply, if any
    pub matched_keyword: Option<String>,
}

/// One row of a priority table: any keyword hit selects `target`
pub struct KeywordRule<T: 'static> {
    pub target: T,
    pub keywords: &'static [&'static str],
}

impl<T: Copy> KeywordRule<T> {
    /// Returns the first keyword contained in `text`. `text` must already be lowercase.
    pub fn find(&self, text: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|k| text.contains(k))
    }
}

/// Walks `rules` in order and returns the first rule that hits
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], text: &str) -> Option<(T, &'static str)> {
    rules
        .iter()
        .find_map(|rule| rule.find(text).map(|keyword| (rule.target, keyword)))
}

const fn rule<T: 'static>(target: T, keywords: &'static [&'static str]) -> KeywordRule<T> {
    KeywordRule { target, keywords }
}

pub const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey", "start"];

pub static TOPIC_RULES: &[KeywordRule<Topic>] = &[
    rule(Topic::Glioma, &["glioma", "glioblastoma", "astrocytoma"]),
    rule(Topic::Meningioma, &["meningioma", "meningeal"]),
    rule(Topic::Pituitary, &["pituitary", "adenoma", "hormone"]),
    rule(Topic::NoTumor, &["no tumor", "not tumor", "benign", "non-tumor"]),
];

static GLIOMA_FACETS: &[KeywordRule<Facet>] = &[
    rule(Facet::Symptoms, &["symptom", "sign"]),
    rule(Facet::Treatment, &["treatment", "therapy"]),
    rule(Facet::Causes, &["cause", "risk"]),
    rule(Facet::Prognosis, &["prognosis", "survival", "outcome"]),
];

// Meningioma and pituitary questions about surgery count as treatment.
static SURGICAL_TUMOR_FACETS: &[KeywordRule<Facet>] = &[
    rule(Facet::Symptoms, &["symptom", "sign"]),
    rule(Facet::Treatment, &["treatment", "therapy", "surgery"]),
    rule(Facet::Causes, &["cause", "risk"]),
    rule(Facet::Prognosis, &["prognosis", "survival", "outcome"]),
];

static NOTUMOR_FACETS: &[KeywordRule<Facet>] = &[
    rule(Facet::Conditions, &["condition", "cause"]),
    rule(Facet::Symptoms, &["symptom", "sign"]),
    rule(Facet::Diagnosis, &["diagnosis", "test"]),
    rule(Facet::Treatment, &["treatment"]),
];

pub static CANNED_RULES: &[KeywordRule<CannedReply>] = &[
    rule(CannedReply::Symptoms, &["symptom", "sign"]),
    rule(CannedReply::Treatment, &["treatment", "therapy"]),
    rule(CannedReply::Comparison, &["difference", "compare", "distinguish"]),
    rule(CannedReply::Prognosis, &["prognosis", "survival", "outlook", "cure"]),
    rule(CannedReply::Thanks, &["thank"]),
];

/// Facet ladder for a topic. `General` has no facets.
pub fn facet_rules(topic: Topic) -> &'static [KeywordRule<Facet>] {
    match topic {
        Topic::Glioma => GLIOMA_FACETS,
        Topic::Meningioma | Topic::Pituitary => SURGICAL_TUMOR_FACETS,
        Topic::NoTumor => NOTUMOR_FACETS,
        Topic::General => &[],
    }
}

/// Intent classifier over the keyword tables
pub struct IntentClassifier {
    greetings: &'static [&'static str],
    topics: &'static [KeywordRule<Topic>],
    canned: &'static [KeywordRule<CannedReply>],
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a classifier over the built-in tables
    pub fn new() -> Self {
        Self {
            greetings: GREETING_KEYWORDS,
            topics: TOPIC_RULES,
            canned: CANNED_RULES,
        }
    }

    /// Classify the intent of a text
    pub fn classify(&self, text: &str) -> Classification {
        let text = text.to_lowercase();

        if let Some(keyword) = self.greetings.iter().copied().find(|k| text.contains(k)) {
            return Classification {
                intent: Intent::Canned {
                    reply: CannedReply::Greeting,
                },
                matched_keyword: Some(keyword.to_string()),
            };
        }

        if let Some((topic, keyword)) = first_match(self.topics, &text) {
            let facet = first_match(facet_rules(topic), &text)
                .map(|(facet, _)| facet)
                .unwrap_or(Facet::Description);
            return Classification {
                intent: Intent::Knowledge { topic, facet },
                matched_keyword: Some(keyword.to_string()),
            };
        }

        if let Some((reply, keyword)) = first_match(self.canned, &text) {
            return Classification {
                intent: Intent::Canned { reply },
                matched_keyword: Some(keyword.to_string()),
            };
        }

        Classification {
            intent: Intent::General,
            matched_keyword: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent_of(text: &str) -> Intent {
        IntentClassifier::new().classify(text).intent
    }

    #[test]
    fn test_greeting_detection() {
        for text in ["hello", "Hey there", "START", "hi"] {
            assert_eq!(
                intent_of(text),
                Intent::Canned {
                    reply: CannedReply::Greeting
                },
                "Expected greeting for '{}'",
                text
            );
        }
    }

    #[test]
    fn test_greeting_beats_topic() {
        assert_eq!(
            intent_of("hello, tell me about glioma"),
            Intent::Canned {
                reply: CannedReply::Greeting
            }
        );
    }

    #[test]
    fn test_topic_priority_order() {
        // glioma is tested before meningioma
        assert_eq!(
            intent_of("glioma or meningioma?"),
            Intent::Knowledge {
                topic: Topic::Glioma,
                facet: Facet::Description
            }
        );
        assert_eq!(
            intent_of("meningioma vs pituitary adenoma"),
            Intent::Knowledge {
                topic: Topic::Meningioma,
                facet: Facet::Description
            }
        );
    }

    #[test]
    fn test_facet_priority_order() {
        // symptom is tested before treatment
        assert_eq!(
            intent_of("glioma symptoms and treatment"),
            Intent::Knowledge {
                topic: Topic::Glioma,
                facet: Facet::Symptoms
            }
        );
    }

    #[test]
    fn test_surgery_is_treatment_only_for_meningioma_and_pituitary() {
        assert_eq!(
            intent_of("meningioma surgery"),
            Intent::Knowledge {
                topic: Topic::Meningioma,
                facet: Facet::Treatment
            }
        );
        assert_eq!(
            intent_of("glioma surgery"),
            Intent::Knowledge {
                topic: Topic::Glioma,
                facet: Facet::Description
            }
        );
    }

    #[test]
    fn test_notumor_facets() {
        assert_eq!(
            intent_of("benign lesion causes"),
            Intent::Knowledge {
                topic: Topic::NoTumor,
                facet: Facet::Conditions
            }
        );
        assert_eq!(
            intent_of("not tumor diagnosis"),
            Intent::Knowledge {
                topic: Topic::NoTumor,
                facet: Facet::Diagnosis
            }
        );
        assert_eq!(
            intent_of("benign lesion therapy"),
            Intent::Knowledge {
                topic: Topic::NoTumor,
                facet: Facet::Description
            }
        );
    }

    #[test]
    fn test_topic_checks_precede_canned() {
        assert_eq!(
            intent_of("compare glioma survival"),
            Intent::Knowledge {
                topic: Topic::Glioma,
                facet: Facet::Prognosis
            }
        );
    }

    #[test]
    fn test_matched_keyword_reported() {
        let result = IntentClassifier::new().classify("GLIOBLASTOMA outcome");
        assert_eq!(result.matched_keyword.as_deref(), Some("glioblastoma"));
    }

    #[test]
    fn test_unknown_detection() {
        assert_eq!(intent_of(""), Intent::General);
        assert_eq!(intent_of("   "), Intent::General);
        assert_eq!(intent_of("xyz nonsense"), Intent::General);
    }
}
