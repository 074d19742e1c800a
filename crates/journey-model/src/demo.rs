//! Embedded demo tables
//!
//! The third-party risk management journey study shipped with the dashboard:
//! ten touchpoints, the swim-lane vocabularies, both theme taxonomies and the
//! evidence catalog. All tables are built once on first access and never
//! change.

use crate::dataset::Dataset;
use crate::evidence::{EvidenceCatalog, EvidenceRecord};
use crate::themes::{TaxonomyKind, ThemeMapping, ThemeTaxonomy};
use crate::touchpoint::Touchpoint;
use crate::vocab::Vocabulary;
use once_cell::sync::Lazy;

/// Swim-lane stage order
pub static STAGES: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::new([
        "Discover Need",
        "Evaluation & RFx",
        "Approval & Onboarding",
        "Continuous Monitoring",
        "Use — Alerts & Triage",
        "Reporting & Audit",
        "Remediation & Supplier Mgmt",
        "Onboarding (Healthcare)",
        "Compliance & Oversight",
        "Renewal & Expansion",
    ])
});

/// Swim-lane persona order
pub static PERSONAS: Lazy<Vocabulary> = Lazy::new(|| {
    Vocabulary::new([
        "CRO / ERM",
        "TPRM Lead",
        "Procurement Lead",
        "ERM Director",
        "Vendor Risk Analyst",
        "Compliance Officer",
        "CFO",
    ])
});

/// The demo study
pub static DATASET: Lazy<Dataset> = Lazy::new(|| {
    let row = |stage: &str, persona: &str, label: &str, s: f64, f: u32, c: f64, e: &str| {
        Touchpoint::new(stage, persona, label)
            .with_scores(s, f, c)
            .with_emoji(e)
    };
    Dataset::from_static(vec![
        row("Discover Need", "CRO / ERM", "Board pressure to modernize TPRM", 0.18, 24, 0.80, "🙂"),
        row("Evaluation & RFx", "TPRM Lead", "Compare questionnaires vs real-time intelligence", -0.10, 31, 0.78, "😐"),
        row("Approval & Onboarding", "Procurement Lead", "Accelerate vendor onboarding (Telecom)", 0.62, 57, 0.86, "😄"),
        row("Continuous Monitoring", "ERM Director", "Lifecycle monitoring & governance", 0.55, 66, 0.84, "😄"),
        row("Use — Alerts & Triage", "Vendor Risk Analyst", "Real-time alerts replace manual checks", 0.48, 75, 0.82, "😄"),
        row("Reporting & Audit", "Compliance Officer", "QPRs & risk insight packs", 0.45, 29, 0.80, "😄"),
        row("Remediation & Supplier Mgmt", "Procurement Lead", "Scorecards drive consolidation", 0.38, 40, 0.78, "🙂"),
        row("Onboarding (Healthcare)", "Procurement Lead", "Eliminate questionnaires for faster onboarding", 0.42, 36, 0.77, "😄"),
        row("Compliance & Oversight", "Compliance Officer", "Maintain SOC2 & impress regulators", 0.44, 22, 0.79, "😄"),
        row("Renewal & Expansion", "CFO", "Business case: do more with less", 0.50, 18, 0.75, "😄"),
    ])
});

/// Heatmap taxonomy: lower-case themes over alphabetical stage columns
pub static HEATMAP_TAXONOMY: Lazy<ThemeTaxonomy> = Lazy::new(|| {
    let themes = Vocabulary::new([
        "roi narrative",
        "soc2 evidence",
        "audit artifacts",
        "cost savings",
        "external intel",
        "headcount savings",
        "move from questionnaires",
        "operational",
        "questionnaire alternative",
        "scorecards",
        "vendor comparison",
    ]);
    let stages = Vocabulary::new([
        "Approval & Onboarding",
        "Compliance & Oversight (Insurance)",
        "Continuous Monitoring",
        "Discover Need",
        "Evaluation & RFx",
        "Onboarding (Healthcare)",
        "Remediation & Supplier Mgmt",
        "Renewal & Expansion",
        "Reporting & Audit",
        "Use — Alerts & Triage",
    ]);
    let mapping = ThemeMapping::new()
        .with("Business case: do more with less", ["roi narrative", "headcount savings"])
        .with("Maintain SOC2 & impress regulators", ["soc2 evidence", "cost savings"])
        .with("QPRs & risk insight packs", ["audit artifacts", "cost savings"])
        .with("Real-time alerts replace manual checks", ["move from questionnaires", "operational"])
        .with("Lifecycle monitoring & governance", ["external intel"])
        .with("Eliminate questionnaires for faster onboarding", ["questionnaire alternative"])
        .with("Scorecards drive consolidation", ["scorecards", "vendor comparison"])
        .with("Accelerate vendor onboarding (Telecom)", ["operational"])
        .with("Compare questionnaires vs real-time intelligence", ["move from questionnaires"])
        .with("Board pressure to modernize TPRM", ["external intel"]);

    ThemeTaxonomy::new(TaxonomyKind::Heatmap, themes, stages, mapping)
        .with_alias("Compliance & Oversight", "Compliance & Oversight (Insurance)")
});

/// Legacy taxonomy: title-case themes over the swim-lane stages
pub static LEGACY_TAXONOMY: Lazy<ThemeTaxonomy> = Lazy::new(|| {
    let themes = Vocabulary::new([
        "Real-time Intelligence",
        "Process Automation",
        "Compliance Support",
        "ROI & Efficiency",
        "Legacy Pain Points",
        "Risk Coverage",
        "Time Savings",
    ]);
    let mapping = ThemeMapping::new()
        .with("Board pressure to modernize TPRM", ["Legacy Pain Points", "Real-time Intelligence"])
        .with("Compare questionnaires vs real-time intelligence", ["Legacy Pain Points", "Real-time Intelligence"])
        .with("Accelerate vendor onboarding (Telecom)", ["Process Automation", "ROI & Efficiency"])
        .with("Lifecycle monitoring & governance", ["Risk Coverage", "Real-time Intelligence"])
        .with("Real-time alerts replace manual checks", ["Risk Coverage", "Real-time Intelligence"])
        .with("QPRs & risk insight packs", ["Compliance Support", "ROI & Efficiency"])
        .with("Scorecards drive consolidation", ["Process Automation", "ROI & Efficiency"])
        .with("Eliminate questionnaires for faster onboarding", ["Process Automation", "Time Savings"])
        .with("Maintain SOC2 & impress regulators", ["Compliance Support", "ROI & Efficiency"])
        .with("Business case: do more with less", ["ROI & Efficiency", "Process Automation"]);

    ThemeTaxonomy::new(TaxonomyKind::Legacy, themes, (*STAGES).clone(), mapping)
});

/// Evidence behind each demo touchpoint
pub static EVIDENCE: Lazy<EvidenceCatalog> = Lazy::new(|| {
    let rec = |quote: &str, themes: &[&str], action: &str| {
        EvidenceRecord::new(quote)
            .with_themes(themes.iter().copied())
            .with_actions([action])
    };
    EvidenceCatalog::new()
        .with(
            "Board pressure to modernize TPRM",
            rec(
                "We need external risk intelligence beyond point-in-time assessments.",
                &["Move from questionnaires", "Real-time risk"],
                "Assess continuous monitoring vendors",
            ),
        )
        .with(
            "Compare questionnaires vs real-time intelligence",
            rec(
                "Legacy questionnaires go stale and miss dynamic risks.",
                &["Legacy process pain", "Evidence-based alerts"],
                "Pilot Supply Wisdom against top vendors",
            ),
        )
        .with(
            "Accelerate vendor onboarding (Telecom)",
            rec(
                "Shifted from point-in-time questionnaires to real-time alerting.",
                &["SLA compliance", "Automation"],
                "Embed risk intel into RFx & approvals",
            ),
        )
        .with(
            "Lifecycle monitoring & governance",
            rec(
                "We can manage third-party risk throughout the lifecycle.",
                &["External intel", "Geopolitical", "Operational"],
                "Expand scope to Nth-party & location risk",
            ),
        )
        .with(
            "Real-time alerts replace manual checks",
            rec(
                "Actionable data on small private companies, not just the big public ones.",
                &["Private vendor coverage", "Negative news"],
                "Automate analyst queue from alerts",
            ),
        )
        .with(
            "QPRs & risk insight packs",
            rec(
                "Reports double as audit artifacts and regulator-ready evidence.",
                &["Audit artifacts", "SOC2 support"],
                "Standardize quarterly risk reviews",
            ),
        )
        .with(
            "Scorecards drive consolidation",
            rec(
                "Because of Supply Wisdom, we have our fingertips on the true pulse of our third parties.",
                &["Scorecards", "Vendor comparison"],
                "Use scorecards for renewals & discounts",
            ),
        )
        .with(
            "Eliminate questionnaires for faster onboarding",
            rec(
                "Procurement can expedite onboarding without sacrificing risk quality.",
                &["Questionnaire alternative", "Time-to-value"],
                "Integrate comprehensive risk intelligence pre-onboarding",
            ),
        )
        .with(
            "Maintain SOC2 & impress regulators",
            rec(
                "Proactive insights helped us avoid potential issues with regulators.",
                &["SOC2 evidence", "Cost savings"],
                "Centralize compliance packs",
            ),
        )
        .with(
            "Business case: do more with less",
            rec(
                "We'd have to triple the team to match this impact with old methods.",
                &["ROI narrative", "Headcount savings"],
                "Expand monitoring to non-critical vendors",
            ),
        )
});

/// Shipped taxonomy by kind
#[must_use]
pub fn taxonomy(kind: TaxonomyKind) -> &'static ThemeTaxonomy {
    match kind {
        TaxonomyKind::Heatmap => &HEATMAP_TAXONOMY,
        TaxonomyKind::Legacy => &LEGACY_TAXONOMY,
    }
}
