//! Integration tests driving the public API with realistic completions

use northstar_analysis::{AnalysisParser, FrameworkId, ParserConfig, StructuredAnalysis};

const SWOT_COMPLETION: &str = "\
Here is the SWOT analysis based on the survey responses.

**Strengths:**
- Loyal customer base with high repeat purchase rates
- **Brand**: strong regional recognition

**Weaknesses:**
- Thin margins on the core product line
- Limited engineering capacity

**Opportunities:**
- Adjacent markets remain underserved
- Partnerships with regional distributors

**Threats:**
- Two well-funded entrants in the last year

**Conclusion:** The company is well positioned but capacity-bound.

**Actionable Recommendations:** Hire two engineers and pilot one partnership.

**STRATEGIC Framework:**
S - **Strategy**: focus on the core region
T - **Tactics**: quarterly distributor reviews
R - **Resources**: reallocate one team
A - **Analysis**: track repeat-purchase cohorts
T - **Technology**: replace the order system
E - **Execution**: ship the pilot in Q2
G - **Goals**: 20% retention lift
I - **Innovation**: test a subscription tier
C - **Culture**: hire for ownership
";

#[test]
fn full_swot_completion_parses_end_to_end() {
    let parser = AnalysisParser::new();
    let analysis = parser.parse("swot", SWOT_COMPLETION);

    assert_eq!(analysis.framework, FrameworkId::Swot);
    assert_eq!(analysis.title, "SWOT Analysis");
    assert_eq!(
        analysis.intro,
        "Here is the SWOT analysis based on the survey responses."
    );

    let strengths = &analysis.sections[0];
    assert_eq!(strengths.label, "Strengths");
    assert_eq!(strengths.items.len(), 2);
    assert_eq!(
        strengths.items[0].text,
        "Loyal customer base with high repeat purchase rates"
    );
    assert_eq!(strengths.items[1].text, "**Brand**: strong regional recognition");

    let threats = &analysis.sections[3];
    assert_eq!(threats.items.len(), 1);

    assert_eq!(
        analysis.conclusion,
        "The company is well positioned but capacity-bound."
    );
    assert_eq!(
        analysis.recommendations,
        "Hire two engineers and pilot one partnership."
    );

    assert_eq!(analysis.acronym.len(), 9);
    assert_eq!(analysis.acronym[0].keyword, "Strategy");
    assert_eq!(analysis.acronym[1].keyword, "Tactics");
    assert_eq!(analysis.acronym[4].keyword, "Technology");
    assert_eq!(analysis.acronym[8].keyword, "Culture");
    assert!(analysis.acronym.iter().all(|slot| !slot.is_placeholder()));
}

#[test]
fn porter_sections_carry_summaries() {
    let parser = AnalysisParser::new();
    let text = "\
**Competitive Rivalry:**
Rivalry is intense across every segment.

- five incumbents of similar size
- recurring price wars

**Supplier Power:**
Suppliers hold little leverage.

- commodity inputs
";
    let analysis = parser.parse("porter", text);
    let rivalry = &analysis.sections[0];
    assert_eq!(rivalry.summary, "Rivalry is intense across every segment.");
    assert_eq!(rivalry.items.len(), 2);

    let suppliers = &analysis.sections[1];
    assert_eq!(suppliers.summary, "Suppliers hold little leverage.");
    assert_eq!(suppliers.items.len(), 1);

    // absent forces are present and empty
    assert_eq!(analysis.sections.len(), 5);
    assert!(analysis.sections[4].summary.is_empty());
    assert!(analysis.sections[4].items.is_empty());
}

#[test]
fn value_chain_covers_support_activities() {
    let parser = AnalysisParser::new();
    let text = "**Procurement:**\nCentralized purchasing keeps costs down.\n";
    let analysis = parser.parse("valuechain", text);
    assert_eq!(analysis.sections.len(), 9);
    let procurement = analysis
        .sections
        .iter()
        .find(|s| s.label == "Procurement")
        .unwrap();
    assert_eq!(procurement.summary, "Centralized purchasing keeps costs down.");
}

#[test]
fn structured_analysis_serializes() {
    let parser = AnalysisParser::new();
    let analysis = parser.parse("swot", SWOT_COMPLETION);
    let json = serde_json::to_string(&analysis).unwrap();
    let back: StructuredAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(analysis, back);
}

#[test]
fn repeated_parses_are_deep_equal() {
    let parser = AnalysisParser::new();
    assert_eq!(
        parser.parse("bcg", SWOT_COMPLETION),
        parser.parse("bcg", SWOT_COMPLETION)
    );
}

#[test]
fn acronym_survives_framework_mismatch() {
    // the acronym block is appended independent of the chosen framework
    // and must survive even when the primary boundaries discard it
    let parser = AnalysisParser::new();
    let analysis = parser.parse("bcg", SWOT_COMPLETION);
    assert_eq!(analysis.acronym[0].keyword, "Strategy");
    assert!(analysis.sections.iter().all(|s| s.items.is_empty()));
}

#[test]
fn diagnostics_report_unmatched_acronym_lines() {
    let parser = AnalysisParser::new();
    let text = "**STRATEGIC:**\nS - Strategy: fine\nnot an acronym entry";
    let (analysis, report) = parser.parse_with_report("strategic", text);
    assert_eq!(analysis.acronym[0].keyword, "Strategy");
    assert_eq!(report.unmatched_lines, vec!["not an acronym entry"]);
    assert!(!report.truncated);
}

#[test]
fn custom_config_round_trips_through_toml() {
    let config = ParserConfig {
        max_text_length: 50_000,
        extra_leak_patterns: vec![r"(?i)\bgoing forward\b".to_string()],
    };
    let parser = AnalysisParser::with_config(
        ParserConfig::from_toml(&config.to_toml().unwrap()).unwrap(),
    )
    .unwrap();
    let analysis = parser.parse("swot", "**Threats:** D\nGoing forward, expand");
    let threats = analysis.sections.iter().find(|s| s.label == "Threats").unwrap();
    assert_eq!(threats.items.len(), 1);
    assert_eq!(threats.items[0].text, "D");
}
