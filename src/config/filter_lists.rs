//! Word lists backing the plausibility filter.
//!
//! The filter itself is data-independent; everything site- or league-specific
//! lives here so a markup change only ever touches configuration.

/// Substrings that mark a string as page furniture rather than data.
/// Matched against the lowercased candidate.
pub fn denylist() -> Vec<&'static str> {
    vec![
        // Section and table chrome
        "batting",
        "bowling",
        "most",
        "best",
        "stats",
        "schedule",
        "points table",
        "fixtures",
        "results",
        // Column headings bleeding into captures
        "runs",
        "wickets",
        "hundreds",
        "fifties",
        "sixes",
        "fours",
        "maidens",
        "economy",
        "average",
        "strike",
        "innings",
        // Generic UI words
        "skip",
        "menu",
        "search",
        "login",
        "subscribe",
        "advertisement",
        "download",
        "follow us",
        "read more",
        "trending",
        // Non-cricket news sections that share the page
        "opinion",
        "entertainment",
        "lifestyle",
        "politics",
        "business",
    ]
}

/// Surnames of known players; a candidate containing one of these is accepted
/// without the name-casing heuristic. Deliberately short — the casing
/// heuristic carries the general case.
pub fn surname_allowlist() -> Vec<&'static str> {
    vec![
        "Kohli", "Sharma", "Dhoni", "Bumrah", "Gill", "Pant", "Rahul", "Jadeja",
        "Samson", "Chahal", "Iyer", "Pandya", "Buttler", "Warner", "Russell",
        "Narine", "Head", "Klaasen", "Boult", "Starc",
    ]
}
