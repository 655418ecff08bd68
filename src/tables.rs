//! Static category tables
//!
//! Every "finding" and "recommendation" the server emits comes from these
//! fixed tables; there is no real analysis behind them. Categories are
//! modeled as enums with a lenient `parse` so an unrecognized string falls
//! through to a generic fallback instead of failing the call.

/// Category of case analysis requested via `analyze_case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisType {
    Strengths,
    Weaknesses,
    Precedents,
    Strategy,
}

impl AnalysisType {
    pub const VALUES: [&'static str; 4] = ["strengths", "weaknesses", "precedents", "strategy"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "strengths" => Some(Self::Strengths),
            "weaknesses" => Some(Self::Weaknesses),
            "precedents" => Some(Self::Precedents),
            "strategy" => Some(Self::Strategy),
            _ => None,
        }
    }

    pub fn findings(self) -> &'static [&'static str] {
        match self {
            Self::Strengths => &[
                "Consistent primary-caregiver history across the documented period",
                "Stable housing and school enrollment maintained throughout proceedings",
                "Complete, contemporaneous records of all exchanges and communications",
            ],
            Self::Weaknesses => &[
                "Gaps in documentation for the earliest custody exchanges",
                "Limited third-party corroboration for several reported incidents",
            ],
            Self::Precedents => &[
                "Best-interest factors weigh continuity of care heavily in this jurisdiction",
                "Courts in comparable cases required documented evidence of parenting time",
            ],
            Self::Strategy => &[
                "Prioritize contemporaneous documentation over retrospective accounts",
                "Consolidate evidence records before the next scheduled hearing",
                "Track all filing deadlines with margin for service requirements",
            ],
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::Strengths => &[
                "Continue the existing documentation routine without interruption",
                "Preserve originals of all records referenced in filings",
            ],
            Self::Weaknesses => &[
                "Backfill gaps with school, medical, and communication records where available",
                "Identify witnesses who can corroborate undocumented incidents",
            ],
            Self::Precedents => &[
                "Align filings with the best-interest factors emphasized locally",
            ],
            Self::Strategy => &[
                "Review deadline list weekly and escalate anything inside 30 days",
                "Keep evidence descriptions factual and dated",
            ],
        }
    }

    /// Fallback lines rendered when the requested category is unrecognized.
    pub fn fallback_findings() -> &'static [&'static str] {
        &["No specific findings for this analysis type; general case review recommended"]
    }

    pub fn fallback_recommendations() -> &'static [&'static str] {
        &["Consult counsel to scope the requested analysis"]
    }
}

/// Category of evidence recorded via `track_evidence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceType {
    Document,
    Communication,
    Photo,
    WitnessStatement,
    Physical,
}

impl EvidenceType {
    pub const VALUES: [&'static str; 5] = [
        "document",
        "communication",
        "photo",
        "witness_statement",
        "physical",
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "document" => Some(Self::Document),
            "communication" => Some(Self::Communication),
            "photo" => Some(Self::Photo),
            "witness_statement" => Some(Self::WitnessStatement),
            "physical" => Some(Self::Physical),
            _ => None,
        }
    }

    pub fn handling_notes(self) -> &'static [&'static str] {
        match self {
            Self::Document => &[
                "Retain the original; file a dated copy with the case records",
                "Note the source and how the document was obtained",
            ],
            Self::Communication => &[
                "Preserve the full thread with timestamps, not excerpts",
                "Export to a format that cannot be edited after the fact",
            ],
            Self::Photo => &[
                "Keep the original file with intact metadata",
                "Record when and where the photo was taken",
            ],
            Self::WitnessStatement => &[
                "Record the witness's full name and contact information",
                "Have the statement dated and signed where possible",
            ],
            Self::Physical => &[
                "Photograph the item and store it unaltered",
                "Log who has handled it and when",
            ],
        }
    }

    pub fn fallback_handling_notes() -> &'static [&'static str] {
        &["Preserve the item unaltered and consult counsel on handling"]
    }
}

/// Welfare concern categories for `assess_child_welfare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcernType {
    Neglect,
    EmotionalHarm,
    PhysicalSafety,
    Educational,
}

impl ConcernType {
    pub const VALUES: [&'static str; 4] = [
        "neglect",
        "emotional_harm",
        "physical_safety",
        "educational",
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "neglect" => Some(Self::Neglect),
            "emotional_harm" => Some(Self::EmotionalHarm),
            "physical_safety" => Some(Self::PhysicalSafety),
            "educational" => Some(Self::Educational),
            _ => None,
        }
    }

    pub fn follow_up(self) -> &'static [&'static str] {
        match self {
            Self::Neglect => &[
                "Document each observed instance with date, time, and specifics",
                "Note any statements made by the child verbatim",
            ],
            Self::EmotionalHarm => &[
                "Record behavioral changes with dates and context",
                "Consider a referral for professional evaluation",
            ],
            Self::PhysicalSafety => &[
                "Document injuries or hazards immediately, with photographs",
                "Report to the appropriate authority if the concern is acute",
            ],
            Self::Educational => &[
                "Collect attendance and performance records from the school",
                "Note missed enrollment or withdrawal events with dates",
            ],
        }
    }

    pub fn fallback_follow_up() -> &'static [&'static str] {
        &["Document the concern in detail and seek professional guidance"]
    }
}

/// Urgency band for a deadline, derived from whole days remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Immediate,
    Upcoming,
    Routine,
}

impl Urgency {
    /// Classify a day count. Boundary values belong to the more urgent band:
    /// exactly 7 days is Immediate, exactly 30 is Upcoming. Past-due
    /// (negative) counts are Immediate.
    pub fn classify(days_remaining: i64) -> Self {
        if days_remaining <= 7 {
            Self::Immediate
        } else if days_remaining <= 30 {
            Self::Upcoming
        } else {
            Self::Routine
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Immediate => "IMMEDIATE - within 7 days",
            Self::Upcoming => "UPCOMING - within 30 days",
            Self::Routine => "ROUTINE - more than 30 days out",
        }
    }
}
