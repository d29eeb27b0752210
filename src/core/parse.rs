use crate::core::CareerGuidance;
use crate::utils::error::ParseError;
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::OnceLock;

fn trailing_comma_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",(\s*[}\]])").expect("valid regex"))
}

fn dangling_string_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""\s*$"#).expect("valid regex"))
}

fn bare_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r":\s*([a-zA-Z][a-zA-Z0-9\s]*)\s*([,}])").expect("valid regex"))
}

/// Turns a raw model reply into a guidance record. Pure: no transport, no logging.
pub fn parse_guidance(text: &str) -> Result<CareerGuidance, ParseError> {
    let value = extract_json(text)?;
    Ok(serde_json::from_value(value)?)
}

/// Strict parse of the whole reply, then of the outermost `{...}` span as
/// is, and only then of the repaired span.
pub fn extract_json(text: &str) -> Result<Value, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyReply);
    }

    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(text.trim()) {
        return Ok(value);
    }

    let span = object_span(text).ok_or(ParseError::NoJsonObject)?;
    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(span) {
        return Ok(value);
    }

    let repaired = repair_json(span);
    match serde_json::from_str::<Value>(&repaired)? {
        value @ Value::Object(_) => Ok(value),
        _ => Err(ParseError::NoJsonObject),
    }
}

/// From the first `{` to the last `}`, or to the end of the text when the
/// reply was cut off before closing.
fn object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    match text.rfind('}') {
        Some(end) if end > start => Some(&text[start..=end]),
        _ => Some(&text[start..]),
    }
}

/// Light repairs for common model mistakes. Heuristic: a string value that
/// itself contains `: word,` can be altered.
pub fn repair_json(json: &str) -> String {
    let fixed = trailing_comma_re().replace_all(json, "$1");
    let fixed = dangling_string_re().replace(&fixed, "\"}");
    let fixed = bare_token_re().replace_all(&fixed, |caps: &Captures| {
        let token = caps[1].trim();
        match token {
            "true" | "false" | "null" => format!(": {}{}", token, &caps[2]),
            _ => format!(": \"{}\"{}", token, &caps[2]),
        }
    });
    fixed.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_json_parses() {
        let guidance = parse_guidance(
            r#"{"domain_overview": "Overview", "current_industry_trends": ["AI", "Cloud"]}"#,
        )
        .unwrap();
        assert_eq!(guidance.domain_overview, "Overview");
        assert_eq!(guidance.current_industry_trends, vec!["AI", "Cloud"]);
    }

    #[test]
    fn test_trailing_commas_removed() {
        let value = extract_json(r#"{"a": [1,2,]}"#).unwrap();
        assert_eq!(value, serde_json::json!({"a": [1, 2]}));
    }

    #[test]
    fn test_commentary_around_object_is_ignored() {
        let text = "Sure! Here is your plan:\n```json\n{\"domain_overview\": \"X\", \"certifications_needed\": [\"A\",],}\n```\nGood luck!";
        let guidance = parse_guidance(text).unwrap();
        assert_eq!(guidance.domain_overview, "X");
        assert_eq!(guidance.certifications_needed, vec!["A"]);
    }

    #[test]
    fn test_fenced_valid_reply_is_not_repaired() {
        let text = "```json\n{\"domain_overview\": \"Focus areas: networking, security\", \"current_industry_trends\": [\"AI\"]}\n```";
        let guidance = parse_guidance(text).unwrap();
        assert_eq!(guidance.domain_overview, "Focus areas: networking, security");
        assert_eq!(guidance.current_industry_trends, vec!["AI"]);
    }

    #[test]
    fn test_bare_words_get_quoted() {
        let repaired = repair_json(r#"{"industry_demand": High, "certification": true}"#);
        assert_eq!(repaired, r#"{"industry_demand": "High", "certification": true}"#);
    }

    #[test]
    fn test_dangling_string_is_closed() {
        let value = extract_json(r#"Here: {"domain_overview": "cut short""#).unwrap();
        assert_eq!(value["domain_overview"], "cut short");
    }

    #[test]
    fn test_empty_and_missing_object() {
        assert!(matches!(parse_guidance("   "), Err(ParseError::EmptyReply)));
        assert!(matches!(
            parse_guidance("I cannot help with that."),
            Err(ParseError::NoJsonObject)
        ));
        assert!(matches!(
            parse_guidance("{ this is [ not json"),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_top_level_array_is_rejected() {
        assert!(parse_guidance("[1, 2, 3]").is_err());
    }
}
