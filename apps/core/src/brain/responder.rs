//! Response Selector - turns a resolved intent into reply text.
//!
//! Knowledge intents draw one candidate uniformly and wrap it in the fixed
//! prefix/suffix for the resolved (topic, facet). Canned intents return
//! their fixed string.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::intent::{CannedReply, Intent};
use super::knowledge::{Facet, KnowledgeBase, KnowledgeEntry, Topic};

/// Fixed text placed around a drawn sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

const fn suffix_only(suffix: &'static str) -> Template {
    Template { prefix: "", suffix }
}

pub const GENERAL_SUFFIX: &str = "I can help with information about gliomas, meningiomas, pituitary adenomas, and non-tumor lesions. What interests you?";

/// Template for a resolved entry. Combinations without a row use the
/// topic's description template.
pub fn template(topic: Topic, facet: Option<Facet>) -> Template {
    use Facet::*;

    match (topic, facet) {
        (Topic::Glioma, Some(Symptoms)) => Template {
            prefix: "Glioma symptoms include: ",
            suffix: "Other common symptoms are progressive headaches, seizures, and neurological deficits. Would you like to know about treatment options?",
        },
        (Topic::Glioma, Some(Treatment)) => suffix_only(
            "Treatment is typically multimodal, combining surgery, radiation, and chemotherapy.",
        ),
        (Topic::Glioma, Some(Causes)) => suffix_only("Most gliomas occur without identifiable cause."),
        (Topic::Glioma, Some(Prognosis)) => {
            suffix_only("Prognosis depends heavily on tumor grade and molecular features.")
        }
        (Topic::Glioma, _) => {
            suffix_only("Would you like to know about symptoms, treatment, or prognosis?")
        }

        (Topic::Meningioma, Some(Symptoms)) => Template {
            prefix: "Meningioma symptoms include: ",
            suffix: "Symptoms often develop gradually due to slow growth.",
        },
        (Topic::Meningioma, Some(Treatment)) => {
            suffix_only("Treatment choice depends on size, location, and symptoms.")
        }
        (Topic::Meningioma, Some(Causes)) => suffix_only("Meningiomas are more common in women."),
        (Topic::Meningioma, Some(Prognosis)) => suffix_only("Most meningiomas have excellent outcomes."),
        (Topic::Meningioma, _) => suffix_only("Would you like to know about symptoms or treatment?"),

        (Topic::Pituitary, Some(Symptoms)) => Template {
            prefix: "Pituitary adenoma symptoms include: ",
            suffix: "Symptoms can be from mass effect or hormonal dysfunction.",
        },
        (Topic::Pituitary, Some(Treatment)) => {
            suffix_only("Treatment depends on tumor size and hormone secretion.")
        }
        (Topic::Pituitary, Some(Causes)) => suffix_only("Most develop spontaneously."),
        (Topic::Pituitary, Some(Prognosis)) => {
            suffix_only("Pituitary adenomas generally have excellent outcomes.")
        }
        (Topic::Pituitary, _) => {
            suffix_only("Would you like information about symptoms or treatment?")
        }

        (Topic::NoTumor, Some(Conditions)) => Template {
            prefix: "Non-tumor brain lesions include: ",
            suffix: "Many brain abnormalities are not tumors.",
        },
        (Topic::NoTumor, Some(Symptoms)) => Template {
            prefix: "Non-tumor brain lesions can cause: ",
            suffix: "Symptoms can overlap with tumor symptoms.",
        },
        (Topic::NoTumor, Some(Diagnosis)) => {
            suffix_only("Distinguishing tumors from non-tumor lesions requires expertise.")
        }
        (Topic::NoTumor, Some(Treatment)) => suffix_only("Treatment varies by condition."),
        (Topic::NoTumor, _) => suffix_only("Would you like to know about specific conditions?"),

        (Topic::General, _) => suffix_only(GENERAL_SUFFIX),
    }
}

impl CannedReply {
    /// The fixed reply text
    pub fn text(&self) -> &'static str {
        match self {
            CannedReply::Greeting => "Hello! I'm here to help you learn about brain tumors. I specialize in gliomas, meningiomas, pituitary adenomas, and non-tumor conditions. What would you like to know?",
            CannedReply::Symptoms => "Symptoms vary by tumor type. Gliomas often cause seizures and progressive deficits. Meningiomas cause gradual headaches. Pituitary adenomas cause vision and hormone problems. Which type interests you?",
            CannedReply::Treatment => "Treatment differs by type: Gliomas need surgery, radiation, and chemotherapy. Meningiomas often need surgery or radiation. Pituitary adenomas may need surgery, medication, or radiation. Which would you like to learn about?",
            CannedReply::Comparison => "Key differences: Gliomas arise from brain tissue and are often malignant. Meningiomas grow from brain coverings and are usually benign. Pituitary adenomas affect hormones. Non-tumor lesions include infections and inflammation. Which comparison interests you?",
            CannedReply::Prognosis => "Prognosis varies: Meningiomas and pituitary adenomas have excellent outcomes (>90% cure rates). Gliomas range from 10+ years for low-grade to 12-18 months for glioblastoma. Which condition would you like details about?",
            CannedReply::Thanks => "You're welcome! Feel free to ask about gliomas, meningiomas, pituitary adenomas, or non-tumor conditions.",
        }
    }
}

/// Picks and formats replies. Owns its RNG so a seed makes it reproducible.
pub struct ResponseSelector {
    knowledge: &'static KnowledgeBase,
    rng: StdRng,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector {
    /// Selector seeded from OS entropy
    pub fn new() -> Self {
        Self {
            knowledge: KnowledgeBase::builtin(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Selector with a fixed seed: the same call sequence yields the same replies
    pub fn with_seed(seed: u64) -> Self {
        Self {
            knowledge: KnowledgeBase::builtin(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Builds the selector from an optional seed
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::with_seed).unwrap_or_default()
    }

    /// Generate the reply text for an intent
    pub fn respond(&mut self, intent: &Intent) -> String {
        match *intent {
            Intent::Canned { reply } => reply.text().to_string(),
            Intent::Knowledge { topic, facet } => {
                let entry = self.knowledge.entry(topic, Some(facet));
                self.render(entry)
            }
            Intent::General => {
                let entry = self.knowledge.entry(Topic::General, None);
                self.render(entry)
            }
        }
    }

    fn render(&mut self, entry: KnowledgeEntry) -> String {
        // Entries are never empty; see the knowledge table tests.
        let sentence = entry
            .candidates
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();
        let Template { prefix, suffix } = template(entry.topic, entry.facet);
        format!("{}{} {}", prefix, sentence, suffix)
    }
}
