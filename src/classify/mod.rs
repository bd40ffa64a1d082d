//! Content classification against the compliance keyword taxonomy
//!
//! Relevance is decided two ways: a single taxonomy term appearing in the
//! URL (hyphenated or concatenated), or at least [`MIN_BODY_MATCHES`]
//! distinct terms appearing in the cleaned body text. The module also
//! extracts the structured fields enforcement records carry: matched
//! keyword tags, penalty amounts, dates, and cited rule numbers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered compliance/regulatory vocabulary
///
/// Terms are matched case-insensitively as substrings; multi-word terms are
/// matched verbatim in body text and in hyphenated/concatenated form in URLs.
pub const TAXONOMY: &[&str] = &[
    "compliance",
    "regulatory",
    "regulation",
    "disclosure",
    "legal",
    "terms",
    "privacy",
    "security",
    "fraud",
    "protection",
    "rights",
    "responsibilities",
    "complaint",
    "dispute",
    "arbitration",
    "finra",
    "sec",
    "cfpb",
    "fiduciary",
    "best interest",
    "suitability",
    "risk disclosure",
    "prospectus",
    "form adv",
    "form crs",
    "customer relationship summary",
    "conflicts of interest",
    "code of ethics",
    "business continuity",
    "cybersecurity",
    "data protection",
    "anti-money laundering",
    "aml",
    "kyc",
    "know your customer",
    "sanctions",
    "ofac",
    "regulation best interest",
    "reg bi",
    "violation",
    "enforcement",
    "misleading",
    "failure to supervise",
    "books and records",
    "recordkeeping",
    "insider trading",
    "market manipulation",
    "reg sho",
    "whistleblower",
    "retaliation",
    "custody rule",
    "safeguarding",
    "advertising",
    "marketing rule",
    "off-channel",
    "communications",
    "controls",
    "supervisory",
    "data breach",
    "fcpa",
    "bribery",
    "corruption",
];

/// Minimum number of distinct body-text taxonomy matches for relevance
///
/// A single incidental mention (the word "legal" in a footer) must not mark
/// a page relevant; three distinct terms is the precision/recall trade-off
/// the whole pipeline is tuned around.
pub const MIN_BODY_MATCHES: usize = 3;

static PENALTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$[\d,]+(?:\.\d+)?\s*(?:million|billion)?(?:\s+(?:penalty|fine|settlement))?")
        .unwrap()
});

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,2}[-/]\d{1,2}[-/]\d{2,4}|[A-Z][a-z]+ \d{1,2}, \d{4}").unwrap()
});

static CITATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"FINRA Rule \d+|NASD Rule \d+|Rule \d+|Section \d+\([a-z]\)").unwrap()
});

/// Decides whether page content is compliance/enforcement related
///
/// True when the URL carries any single taxonomy term (in hyphenated or
/// concatenated form), or when the body text contains at least
/// [`MIN_BODY_MATCHES`] distinct terms.
pub fn is_relevant(text: &str, url: &str) -> bool {
    let url_lower = url.to_lowercase();

    for term in TAXONOMY {
        let hyphenated = term.replace(' ', "-");
        let concatenated = term.replace(' ', "");
        if url_lower.contains(&hyphenated) || url_lower.contains(&concatenated) {
            return true;
        }
    }

    count_matches(text) >= MIN_BODY_MATCHES
}

/// Extracts the distinct taxonomy terms present in the text, in taxonomy order
pub fn extract_tags(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    TAXONOMY
        .iter()
        .filter(|term| text_lower.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

/// Counts distinct taxonomy terms present in the text
pub fn count_matches(text: &str) -> usize {
    let text_lower = text.to_lowercase();
    TAXONOMY
        .iter()
        .filter(|term| text_lower.contains(*term))
        .count()
}

/// Extracts the first monetary penalty amount mentioned in the text
///
/// Matches a currency amount with an optional million/billion scale word and
/// an optional penalty/fine/settlement qualifier. Absence is not an error.
pub fn extract_penalty(text: &str) -> Option<String> {
    PENALTY_RE.find(text).map(|m| m.as_str().trim().to_string())
}

/// Extracts the first date-like string from the leading portion of the text
///
/// Release pages put their date near the top, so only the first 500
/// characters are searched. Both numeric (`7/14/2026`) and written
/// (`July 14, 2026`) forms are recognized.
pub fn extract_date(text: &str) -> Option<String> {
    let prefix: String = text.chars().take(500).collect();
    DATE_RE.find(&prefix).map(|m| m.as_str().to_string())
}

/// Extracts cited rule and statute references, deduplicated in order
pub fn extract_rule_citations(text: &str) -> Vec<String> {
    let mut citations: Vec<String> = Vec::new();
    for m in CITATION_RE.find_iter(text) {
        let cite = m.as_str().to_string();
        if !citations.contains(&cite) {
            citations.push(cite);
        }
    }
    citations
}
