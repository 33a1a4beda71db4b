//! Local-language city names accepted in place of the names the API knows.

/// Japanese city names mapped to the English names OpenWeather recognizes.
const KNOWN_CITIES: &[(&str, &str)] = &[
    ("東京", "Tokyo"),
    ("大阪", "Osaka"),
    ("京都", "Kyoto"),
    ("横浜", "Yokohama"),
    ("名古屋", "Nagoya"),
    ("福岡", "Fukuoka"),
];

/// Return the canonical query for `input`.
///
/// This is a literal lookup: no case folding, no partial matches and no
/// whitespace handling. Anything not in the table is returned as-is.
pub fn resolve_city(input: &str) -> &str {
    KNOWN_CITIES
        .iter()
        .find(|(local, _)| *local == input)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(input)
}

/// The full lookup table as `(local, canonical)` pairs.
pub fn known_cities() -> &'static [(&'static str, &'static str)] {
    KNOWN_CITIES
}
