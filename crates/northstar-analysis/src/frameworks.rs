//! Framework catalog - labels, trailer keywords, and shapes per framework
//!
//! Label lists are explicit, framework-specific constants and never derived
//! from the input, so that which label "wins" a boundary position is
//! deterministic and auditable per framework.

use crate::sections::marker_regex;
use northstar_domain::FrameworkId;
use once_cell::sync::Lazy;
use regex::Regex;

/// How a section's raw text is segmented into renderable content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionShape {
    /// Every surviving line becomes one item
    Itemized,

    /// The first paragraph is a summary, remaining lines become items
    SummaryAndItems,
}

impl Default for SectionShape {
    fn default() -> Self {
        SectionShape::Itemized
    }
}

/// Static description of one framework's output format
#[derive(Debug)]
pub struct FrameworkSpec {
    /// The framework this spec describes
    pub id: FrameworkId,

    /// Human-readable title, e.g. "SWOT Analysis"
    pub title: &'static str,

    /// Ordered section labels
    pub labels: &'static [&'static str],

    /// Keywords that terminate the last section
    pub trailers: &'static [&'static str],

    /// Section segmentation shape
    pub shape: SectionShape,
}

/// Trailer keywords shared by the primary frameworks
///
/// "In conclusion" is the free-text variant the model produces when its
/// emphasis markup collapses entirely. "STRATEGIC" bounds the last section
/// when the model appends the acronym block with no narrative in between.
const DEFAULT_TRAILERS: &[&str] = &[
    "Conclusion",
    "In conclusion",
    "Actionable Recommendations",
    "Recommendations",
    "Areas for Improvement",
    "Next Steps",
    "STRATEGIC",
];

/// Trailers for the STRATEGIC framework itself, whose own label is the
/// word the other frameworks use as a terminator
const STRATEGIC_TRAILERS: &[&str] = &[
    "Conclusion",
    "In conclusion",
    "Actionable Recommendations",
    "Recommendations",
    "Areas for Improvement",
    "Next Steps",
];

/// Terminators for the acronym block
///
/// Deliberately narrower than [`DEFAULT_TRAILERS`]: the acronym block is
/// appended after the trailing narrative, so only the follow-up headings
/// bound it.
const ACRONYM_TRAILERS: &[&str] = &["Areas for Improvement", "Next Steps", "Recommendations"];

static SWOT_SPEC: FrameworkSpec = FrameworkSpec {
    id: FrameworkId::Swot,
    title: "SWOT Analysis",
    labels: &["Strengths", "Weaknesses", "Opportunities", "Threats"],
    trailers: DEFAULT_TRAILERS,
    shape: SectionShape::Itemized,
};

static PORTER_SPEC: FrameworkSpec = FrameworkSpec {
    id: FrameworkId::Porter,
    title: "Porter's Five Forces",
    labels: &[
        "Competitive Rivalry",
        "Supplier Power",
        "Buyer Power",
        "Threat of Substitution",
        "Threat of New Entry",
    ],
    trailers: DEFAULT_TRAILERS,
    shape: SectionShape::SummaryAndItems,
};

static BCG_SPEC: FrameworkSpec = FrameworkSpec {
    id: FrameworkId::Bcg,
    title: "BCG Matrix",
    labels: &["Stars", "Cash Cows", "Question Marks", "Dogs"],
    trailers: DEFAULT_TRAILERS,
    shape: SectionShape::Itemized,
};

static VALUE_CHAIN_SPEC: FrameworkSpec = FrameworkSpec {
    id: FrameworkId::ValueChain,
    title: "Value Chain Analysis",
    labels: &[
        "Inbound Logistics",
        "Operations",
        "Outbound Logistics",
        "Marketing and Sales",
        "Service",
        "Firm Infrastructure",
        "Human Resource Management",
        "Technology Development",
        "Procurement",
    ],
    trailers: DEFAULT_TRAILERS,
    shape: SectionShape::SummaryAndItems,
};

static STRATEGIC_SPEC: FrameworkSpec = FrameworkSpec {
    id: FrameworkId::Strategic,
    title: "STRATEGIC Framework",
    labels: &["STRATEGIC"],
    trailers: STRATEGIC_TRAILERS,
    shape: SectionShape::Itemized,
};

static GENERIC_SPEC: FrameworkSpec = FrameworkSpec {
    id: FrameworkId::Generic,
    title: "Strategic Analysis",
    labels: &[
        "Political",
        "Economic",
        "Social",
        "Technological",
        "Legal",
        "Environmental",
    ],
    trailers: DEFAULT_TRAILERS,
    shape: SectionShape::Itemized,
};

/// The acronym block uses the section machinery with its own terminator set
static ACRONYM_BLOCK_SPEC: FrameworkSpec = FrameworkSpec {
    id: FrameworkId::Strategic,
    title: "STRATEGIC Framework",
    labels: &["STRATEGIC"],
    trailers: ACRONYM_TRAILERS,
    shape: SectionShape::Itemized,
};

impl FrameworkSpec {
    /// Look up the static spec for a framework
    pub fn for_id(id: FrameworkId) -> &'static FrameworkSpec {
        match id {
            FrameworkId::Swot => &SWOT_SPEC,
            FrameworkId::Porter => &PORTER_SPEC,
            FrameworkId::Bcg => &BCG_SPEC,
            FrameworkId::ValueChain => &VALUE_CHAIN_SPEC,
            FrameworkId::Strategic => &STRATEGIC_SPEC,
            FrameworkId::Generic => &GENERIC_SPEC,
        }
    }
}

/// A framework spec with its marker regexes compiled
pub(crate) struct CompiledFramework {
    /// The underlying static spec
    pub spec: &'static FrameworkSpec,

    /// One marker per label, same order as `spec.labels`
    pub label_markers: Vec<Regex>,

    /// One marker per trailer keyword
    pub trailer_markers: Vec<Regex>,
}

impl CompiledFramework {
    fn compile(spec: &'static FrameworkSpec) -> Self {
        Self {
            spec,
            label_markers: spec.labels.iter().map(|l| marker_regex(l)).collect(),
            trailer_markers: spec.trailers.iter().map(|t| marker_regex(t)).collect(),
        }
    }

    /// Resolve a framework id to its compiled spec
    pub(crate) fn resolve(id: FrameworkId) -> &'static CompiledFramework {
        match id {
            FrameworkId::Swot => &SWOT,
            FrameworkId::Porter => &PORTER,
            FrameworkId::Bcg => &BCG,
            FrameworkId::ValueChain => &VALUE_CHAIN,
            FrameworkId::Strategic => &STRATEGIC,
            FrameworkId::Generic => &GENERIC,
        }
    }
}

static SWOT: Lazy<CompiledFramework> = Lazy::new(|| CompiledFramework::compile(&SWOT_SPEC));
static PORTER: Lazy<CompiledFramework> = Lazy::new(|| CompiledFramework::compile(&PORTER_SPEC));
static BCG: Lazy<CompiledFramework> = Lazy::new(|| CompiledFramework::compile(&BCG_SPEC));
static VALUE_CHAIN: Lazy<CompiledFramework> =
    Lazy::new(|| CompiledFramework::compile(&VALUE_CHAIN_SPEC));
static STRATEGIC: Lazy<CompiledFramework> =
    Lazy::new(|| CompiledFramework::compile(&STRATEGIC_SPEC));
static GENERIC: Lazy<CompiledFramework> = Lazy::new(|| CompiledFramework::compile(&GENERIC_SPEC));
static ACRONYM_BLOCK: Lazy<CompiledFramework> =
    Lazy::new(|| CompiledFramework::compile(&ACRONYM_BLOCK_SPEC));

/// The compiled spec used to isolate the acronym block
pub(crate) fn acronym_block() -> &'static CompiledFramework {
    &ACRONYM_BLOCK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_framework_resolves() {
        for id in FrameworkId::ALL {
            let compiled = CompiledFramework::resolve(id);
            assert_eq!(compiled.spec.id, id);
            assert_eq!(compiled.label_markers.len(), compiled.spec.labels.len());
            assert_eq!(compiled.trailer_markers.len(), compiled.spec.trailers.len());
        }
    }

    #[test]
    fn test_generic_is_pestle_shaped() {
        let spec = FrameworkSpec::for_id(FrameworkId::Generic);
        assert_eq!(spec.labels.len(), 6);
        assert_eq!(spec.labels[0], "Political");
        assert_eq!(spec.shape, SectionShape::Itemized);
    }

    #[test]
    fn test_paragraph_shapes() {
        assert_eq!(
            FrameworkSpec::for_id(FrameworkId::Porter).shape,
            SectionShape::SummaryAndItems
        );
        assert_eq!(
            FrameworkSpec::for_id(FrameworkId::ValueChain).shape,
            SectionShape::SummaryAndItems
        );
        assert_eq!(
            FrameworkSpec::for_id(FrameworkId::Swot).shape,
            SectionShape::Itemized
        );
        assert_eq!(
            FrameworkSpec::for_id(FrameworkId::Bcg).shape,
            SectionShape::Itemized
        );
    }

    #[test]
    fn test_acronym_block_terminators_are_narrow() {
        let block = acronym_block();
        assert!(!block.spec.trailers.contains(&"Conclusion"));
        assert!(block.spec.trailers.contains(&"Next Steps"));
    }
}
