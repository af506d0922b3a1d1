/// Generic words removed before comparing names, in removal order.
/// "Montana State University" and "Michigan State University" are closer
/// than "Montana" and "Michigan".
const STOPWORDS: [&str; 6] = ["of", "university", "college", "school", "and", "institute"];

/// Words left out of an acronym ("Massachusetts Institute of Technology" -> "MIT").
const CONNECTORS: [&str; 6] = ["of", "and", "the", "for", "at", "in"];

/// Reduces an institution name to the form used for matching.
///
/// Stopwords are deleted as substrings, not whole words, so "Andover" loses
/// its "and". Doubled spaces are collapsed in a single left-to-right pass.
pub fn normalize(name: &str) -> String {
    let mut minimal = name.trim().to_lowercase();
    for word in STOPWORDS {
        minimal = minimal.replace(word, "");
    }
    minimal.replace("  ", " ").replace(',', "")
}

/// First character of every space-separated word, case kept
/// ("Massachusetts Institute of Technology" -> "MIoT").
pub fn initials(name: &str) -> String {
    name.split(' ').filter_map(|word| word.chars().next()).collect()
}

/// First letter of every word, connectors skipped, uppercased.
pub fn acronym(name: &str) -> String {
    name.split_whitespace()
        .filter(|word| !CONNECTORS.iter().any(|c| word.eq_ignore_ascii_case(c)))
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Alphanumeric characters only, uppercased ("M.I.T." -> "MIT").
pub fn short_form(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect()
}
