//! Knowledge Base - static reference sentences per topic and facet.
//!
//! Read-only tables compiled into the binary. Every entry is non-empty; the
//! order of candidates is stable so seeded draws are reproducible.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition category the assistant can talk about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Glioma,
    Meningioma,
    Pituitary,
    NoTumor,
    /// Catch-all with a flat sentence list and no facets
    General,
}

impl Topic {
    /// Returns the stable identifier used in logs and serialized output
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Glioma => "glioma",
            Topic::Meningioma => "meningioma",
            Topic::Pituitary => "pituitary",
            Topic::NoTumor => "notumor",
            Topic::General => "general",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category of information about a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Description,
    Symptoms,
    Causes,
    Treatment,
    Prognosis,
    /// Lesion types that mimic tumors (non-tumor topic only)
    Conditions,
    /// Work-up used to rule tumors out (non-tumor topic only)
    Diagnosis,
}

impl Facet {
    pub fn label(&self) -> &'static str {
        match self {
            Facet::Description => "description",
            Facet::Symptoms => "symptoms",
            Facet::Causes => "causes",
            Facet::Treatment => "treatment",
            Facet::Prognosis => "prognosis",
            Facet::Conditions => "conditions",
            Facet::Diagnosis => "diagnosis",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Facet lists for a single topic
pub struct TopicEntry {
    pub topic: Topic,
    facets: &'static [(Facet, &'static [&'static str])],
}

impl TopicEntry {
    fn facet(&self, facet: Facet) -> Option<&'static [&'static str]> {
        self.facets
            .iter()
            .find(|(f, _)| *f == facet)
            .map(|(_, sentences)| *sentences)
    }

    /// Facets defined for this topic, in table order
    pub fn facets(&self) -> impl Iterator<Item = Facet> + '_ {
        self.facets.iter().map(|(f, _)| *f)
    }
}

/// A resolved lookup. `topic`/`facet` reflect any fallback that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub topic: Topic,
    pub facet: Option<Facet>,
    pub candidates: &'static [&'static str],
}

/// The static table of topics plus the general fallback list
pub struct KnowledgeBase {
    topics: &'static [TopicEntry],
    general: &'static [&'static str],
}

static BUILTIN: KnowledgeBase = KnowledgeBase {
    topics: &[
        TopicEntry {
            topic: Topic::Glioma,
            facets: &[
                (Facet::Description, GLIOMA_DESCRIPTION),
                (Facet::Symptoms, GLIOMA_SYMPTOMS),
                (Facet::Causes, GLIOMA_CAUSES),
                (Facet::Treatment, GLIOMA_TREATMENT),
                (Facet::Prognosis, GLIOMA_PROGNOSIS),
            ],
        },
        TopicEntry {
            topic: Topic::Meningioma,
            facets: &[
                (Facet::Description, MENINGIOMA_DESCRIPTION),
                (Facet::Symptoms, MENINGIOMA_SYMPTOMS),
                (Facet::Causes, MENINGIOMA_CAUSES),
                (Facet::Treatment, MENINGIOMA_TREATMENT),
                (Facet::Prognosis, MENINGIOMA_PROGNOSIS),
            ],
        },
        TopicEntry {
            topic: Topic::Pituitary,
            facets: &[
                (Facet::Description, PITUITARY_DESCRIPTION),
                (Facet::Symptoms, PITUITARY_SYMPTOMS),
                (Facet::Causes, PITUITARY_CAUSES),
                (Facet::Treatment, PITUITARY_TREATMENT),
                (Facet::Prognosis, PITUITARY_PROGNOSIS),
            ],
        },
        TopicEntry {
            topic: Topic::NoTumor,
            facets: &[
                (Facet::Description, NOTUMOR_DESCRIPTION),
                (Facet::Conditions, NOTUMOR_CONDITIONS),
                (Facet::Symptoms, NOTUMOR_SYMPTOMS),
                (Facet::Diagnosis, NOTUMOR_DIAGNOSIS),
                (Facet::Treatment, NOTUMOR_TREATMENT),
            ],
        },
    ],
    general: GENERAL,
};

impl KnowledgeBase {
    /// The compiled-in knowledge table
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    pub fn topic(&self, topic: Topic) -> Option<&TopicEntry> {
        self.topics.iter().find(|entry| entry.topic == topic)
    }

    pub fn topics(&self) -> impl Iterator<Item = &TopicEntry> {
        self.topics.iter()
    }

    pub fn general(&self) -> &'static [&'static str] {
        self.general
    }

    /// Looks up the candidates for `(topic, facet)`.
    ///
    /// A facet the topic does not define falls back to its `Description`;
    /// `General` or an unknown topic falls back to the flat general list.
    pub fn entry(&self, topic: Topic, facet: Option<Facet>) -> KnowledgeEntry {
        let general = KnowledgeEntry {
            topic: Topic::General,
            facet: None,
            candidates: self.general,
        };

        let Some(entry) = self.topic(topic) else {
            return general;
        };

        let requested = facet.unwrap_or(Facet::Description);
        if let Some(candidates) = entry.facet(requested) {
            return KnowledgeEntry {
                topic,
                facet: Some(requested),
                candidates,
            };
        }

        match entry.facet(Facet::Description) {
            Some(candidates) => KnowledgeEntry {
                topic,
                facet: Some(Facet::Description),
                candidates,
            },
            None => general,
        }
    }
}

// --- Glioma ---

const GLIOMA_DESCRIPTION: &[&str] = &[
    "Gliomas are the most common type of primary brain tumor, arising from glial cells that support nerve cells.",
    "They account for about 30% of all brain tumors and 80% of all malignant brain tumors.",
    "Gliomas are classified by cell type (astrocytoma, oligodendroglioma, ependymoma) and grade (I-IV).",
    "Grade IV gliomas (glioblastoma) are the most aggressive, while Grade I are the least aggressive.",
];

const GLIOMA_SYMPTOMS: &[&str] = &[
    "Progressive headaches that worsen over time, especially in the morning",
    "Seizures (focal or generalized), which may be the first symptom in 60-70% of cases",
    "Progressive weakness or numbness in arms or legs",
    "Difficulty with speech, language comprehension, or word finding",
    "Personality changes, mood swings, or cognitive decline",
    "Visual disturbances including blurred or double vision",
    "Balance problems, coordination difficulties, or unsteady gait",
    "Memory problems and confusion, especially in frontal lobe gliomas",
];

const GLIOMA_CAUSES: &[&str] = &[
    "Most gliomas occur sporadically without known cause",
    "Genetic syndromes like neurofibromatosis type 1 increase risk",
    "Previous radiation therapy to the head increases risk",
    "Age is a factor - incidence increases with age, peak at 45-65 years",
    "Some hereditary cancer syndromes (Li-Fraumeni syndrome, Lynch syndrome)",
];

const GLIOMA_TREATMENT: &[&str] = &[
    "Surgical resection is the first-line treatment when safely possible",
    "Radiation therapy (typically 60 Gy in 30 fractions for high-grade gliomas)",
    "Chemotherapy with temozolomide for high-grade gliomas",
    "Tumor treating fields (TTFields) for glioblastoma patients",
    "Targeted therapies for tumors with specific genetic mutations",
    "Immunotherapy trials are ongoing for recurrent gliomas",
];

const GLIOMA_PROGNOSIS: &[&str] = &[
    "Prognosis varies significantly by glioma grade and molecular features",
    "Low-grade gliomas: median survival 10-15 years with treatment",
    "High-grade gliomas (Grade III): median survival 2-5 years",
    "Glioblastoma (Grade IV): median survival 12-18 months with standard treatment",
    "IDH-mutant gliomas generally have better prognosis than IDH-wildtype",
    "MGMT methylation status affects response to chemotherapy",
];

// --- Meningioma ---

const MENINGIOMA_DESCRIPTION: &[&str] = &[
    "Meningiomas arise from the meninges, the membranes that surround the brain and spinal cord.",
    "They are the most common primary brain tumor, accounting for about 37% of all brain tumors.",
    "Most meningiomas (85-90%) are benign (WHO Grade I), with good prognosis after treatment.",
    "They grow slowly and may be present for years before causing symptoms.",
];

const MENINGIOMA_SYMPTOMS: &[&str] = &[
    "Gradually worsening headaches, often described as dull and persistent",
    "Seizures, particularly in tumors located near the cerebral cortex",
    "Vision problems including loss of visual fields or double vision",
    "Hearing loss or tinnitus (ringing in ears) for skull base meningiomas",
    "Weakness or numbness in extremities, depending on tumor location",
    "Personality changes, mood disorders, or cognitive impairment",
    "Speech difficulties or language problems",
    "Coordination problems and balance issues",
    "Facial numbness or weakness for cavernous sinus meningiomas",
];

const MENINGIOMA_CAUSES: &[&str] = &[
    "Female hormones may play a role - more common in women (2:1 ratio)",
    "Previous radiation exposure increases risk 10-20 years later",
    "Neurofibromatosis type 2 (NF2) genetic syndrome",
    "Age factor - incidence increases with age, peak at 65-75 years",
    "Hormonal factors - may grow during pregnancy or with hormone replacement",
];

const MENINGIOMA_TREATMENT: &[&str] = &[
    "Observation with serial imaging for small, asymptomatic tumors",
    "Complete surgical resection when safely achievable (Simpson Grade I-III)",
    "Stereotactic radiosurgery (SRS) for small, surgically inaccessible tumors",
    "Conventional fractionated radiotherapy for large or partially resected tumors",
    "Proton beam therapy for skull base meningiomas near critical structures",
    "Medical management rarely effective, except for progesterone receptor-positive tumors",
];

const MENINGIOMA_PROGNOSIS: &[&str] = &[
    "Excellent prognosis for completely resected benign meningiomas",
    "5-year survival rate >95% for WHO Grade I meningiomas",
    "10-15% recurrence rate after complete resection of benign meningiomas",
    "Atypical meningiomas (Grade II) have 15-20% 5-year recurrence rate",
    "Anaplastic meningiomas (Grade III) have poorer prognosis with higher recurrence",
    "Location affects prognosis - skull base tumors more challenging to treat",
];

// --- Pituitary ---

const PITUITARY_DESCRIPTION: &[&str] = &[
    "Pituitary adenomas are benign tumors of the pituitary gland, the 'master gland' of the endocrine system.",
    "They account for 10-15% of all intracranial tumors and are often discovered incidentally.",
    "Classified as microadenomas (<10mm) or macroadenomas (≥10mm) based on size.",
    "Can be functioning (hormone-secreting) or non-functioning adenomas.",
];

const PITUITARY_SYMPTOMS: &[&str] = &[
    "Visual field defects, particularly bitemporal hemianopia from optic chiasm compression",
    "Headaches, often described as dull, persistent, and behind the eyes",
    "Hormonal symptoms depending on type: acromegaly, Cushing's disease, prolactinoma",
    "Galactorrhea (milk production) and amenorrhea in prolactinomas",
    "Growth abnormalities in children and adolescents (gigantism)",
    "Fatigue, weakness, and cold intolerance from hypopituitarism",
    "Sexual dysfunction, decreased libido, and infertility",
    "Weight changes - gain in Cushing's disease, loss in hypopituitarism",
    "Mood changes, depression, and cognitive difficulties",
];

const PITUITARY_CAUSES: &[&str] = &[
    "Most pituitary adenomas occur sporadically without known cause",
    "Multiple Endocrine Neoplasia type 1 (MEN1) genetic syndrome",
    "Carney complex and McCune-Albright syndrome (rare genetic causes)",
    "Age factor - most common in 30-50 year age group",
    "Slightly more common in women for some subtypes (prolactinomas)",
];

const PITUITARY_TREATMENT: &[&str] = &[
    "Transsphenoidal surgery for most symptomatic adenomas",
    "Medical management with dopamine agonists for prolactinomas",
    "Somatostatin analogs for growth hormone-secreting adenomas",
    "Radiation therapy for residual or recurrent tumors after surgery",
    "Stereotactic radiosurgery for small, well-defined residual adenomas",
    "Hormone replacement therapy for hypopituitarism after treatment",
];

const PITUITARY_PROGNOSIS: &[&str] = &[
    "Excellent prognosis for most pituitary adenomas with appropriate treatment",
    ">95% cure rate for microadenomas with complete surgical resection",
    "80-90% cure rate for macroadenomas with surgery",
    "Medical therapy highly effective for prolactinomas (>90% control rate)",
    "Long-term follow-up needed to monitor for recurrence and hormonal function",
    "Quality of life generally excellent after successful treatment",
];

// --- Non-tumor findings ---

const NOTUMOR_DESCRIPTION: &[&str] = &[
    "Many brain imaging findings initially suspicious for tumors turn out to be benign conditions.",
    "Common non-tumor causes include vascular malformations, infections, and inflammatory conditions.",
    "Differential diagnosis is crucial to avoid unnecessary invasive procedures.",
    "Advanced imaging techniques help distinguish tumors from non-tumor lesions.",
];

const NOTUMOR_CONDITIONS: &[&str] = &[
    "Vascular malformations: arteriovenous malformations (AVMs), cavernous malformations",
    "Infectious causes: brain abscess, tuberculomas, neurocysticercosis",
    "Inflammatory conditions: multiple sclerosis, sarcoidosis, autoimmune encephalitis",
    "Developmental anomalies: arachnoid cysts, colloid cysts, epidermoid cysts",
    "Metabolic disorders: Wilson's disease, mitochondrial disorders",
    "Post-treatment changes: radiation necrosis, post-surgical changes",
];

const NOTUMOR_SYMPTOMS: &[&str] = &[
    "Headaches that may mimic those caused by brain tumors",
    "Seizures, particularly with vascular malformations or inflammatory lesions",
    "Neurological deficits that fluctuate with inflammatory conditions",
    "Cognitive changes that may be reversible with treatment",
    "Visual disturbances from lesions affecting visual pathways",
    "Movement disorders from lesions in basal ganglia region",
    "Speech and language difficulties depending on lesion location",
];

const NOTUMOR_DIAGNOSIS: &[&str] = &[
    "Advanced MRI sequences including perfusion, diffusion, and spectroscopy",
    "PET scanning to assess metabolic activity of lesions",
    "CSF analysis for infectious, inflammatory, or malignant cells",
    "Blood tests for autoimmune markers, infections, and metabolic disorders",
    "Biopsy may be necessary when imaging is inconclusive",
    "Multidisciplinary team approach for complex cases",
];

const NOTUMOR_TREATMENT: &[&str] = &[
    "Treatment depends on the underlying condition identified",
    "Antibiotics for bacterial infections, antifungals for fungal infections",
    "Immunosuppressive therapy for inflammatory and autoimmune conditions",
    "Surgical intervention for symptomatic cysts or vascular malformations",
    "Medical management for metabolic disorders",
    "Observation with serial imaging for stable, asymptomatic lesions",
];

// --- General ---

const GENERAL: &[&str] = &[
    "Brain lesion classification requires careful analysis of imaging characteristics and clinical presentation.",
    "Multidisciplinary team approach involving neurosurgery, neuro-oncology, and neuroradiology is essential.",
    "Early accurate diagnosis significantly improves patient outcomes and quality of life.",
    "Advanced imaging techniques have revolutionized brain tumor diagnosis and treatment planning.",
    "Molecular testing of tumor tissue provides important prognostic and treatment information.",
];
