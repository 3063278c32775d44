//! SQL literal formatting.
//!
//! Every literal value the emitter interpolates goes through this module;
//! there is deliberately no ad-hoc escaping anywhere else.

/// Escape a string for use inside a single-quoted SQL literal by
/// doubling embedded quotes. An absent value should be passed as an
/// empty string so it becomes an empty literal, never NULL.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Format a price with exactly two decimal places.
pub fn price_literal(price: f64) -> String {
    format!("{:.2}", price)
}

/// Serialize a tag set as the comma-joined transport form stored in the
/// staging table (split back apart by the fan-out loop).
pub fn tag_list(tags: &[u32]) -> String {
    tags.iter()
        .map(|tag| tag.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_doubles_quotes() {
        assert_eq!(escape_literal("St. Marc's"), "St. Marc''s");
        assert_eq!(escape_literal("''"), "''''");
        assert_eq!(escape_literal("no quotes"), "no quotes");
        assert_eq!(escape_literal(""), "");
    }

    #[test]
    fn test_escape_round_trips_through_literal_rules() {
        // Un-escaping per the engine's literal rules must reproduce the
        // original text exactly.
        let original = "Chantico's Fire | it's 'rare'";
        let unescaped = escape_literal(original).replace("''", "'");
        assert_eq!(unescaped, original);
    }

    #[test]
    fn test_price_literal_two_decimals() {
        assert_eq!(price_literal(1234.5), "1234.50");
        assert_eq!(price_literal(0.3), "0.30");
        assert_eq!(price_literal(500.0), "500.00");
    }

    #[test]
    fn test_tag_list() {
        assert_eq!(tag_list(&[3, 17]), "3,17");
        assert_eq!(tag_list(&[25, 1, 14]), "25,1,14");
    }
}
