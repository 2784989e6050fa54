//! Attribute value normalization
//!
//! Every extracted attribute passes through [`format_value`] before it is
//! placed in a record, so downstream consumers always see one of three
//! canonical shapes: the null sentinel, a flag sentinel, or a
//! whitespace-normalized string.

/// Sentinel emitted for attributes with no extractable value.
pub const NULL_SENTINEL: &str = "NA";

/// Sentinel for a raised flag.
pub const FLAG_TRUE: &str = "SI";

/// Sentinel for a lowered flag.
pub const FLAG_FALSE: &str = "NO";

/// A raw attribute value as produced by the selector resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// No selector matched
    Absent,
    /// Presence-based marker flag
    Flag(bool),
    /// Literal text extracted from the page
    Text(String),
}

impl From<Option<String>> for RawValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) => Self::Text(text),
            None => Self::Absent,
        }
    }
}

/// Normalizes a raw attribute value into its canonical string form.
///
/// Text loses carriage returns, newlines and tabs, runs of whitespace
/// collapse to a single space, and the edges are trimmed; a string that is
/// empty after normalization degrades to the null sentinel. Flags never
/// pass through as native booleans.
///
/// ```
/// use shelter_scout::extract::{format_value, RawValue};
///
/// assert_eq!(format_value(RawValue::Absent), "NA");
/// assert_eq!(format_value(RawValue::Flag(true)), "SI");
/// assert_eq!(format_value(RawValue::Text("  Labrador\n\tmestizo  ".into())), "Labrador mestizo");
/// ```
pub fn format_value(value: RawValue) -> String {
    match value {
        RawValue::Absent => NULL_SENTINEL.to_string(),
        RawValue::Flag(true) => FLAG_TRUE.to_string(),
        RawValue::Flag(false) => FLAG_FALSE.to_string(),
        RawValue::Text(text) => {
            // split_whitespace strips CR/LF/TAB, collapses runs, and trims
            // the edges in a single pass.
            let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if normalized.is_empty() {
                NULL_SENTINEL.to_string()
            } else {
                normalized
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_becomes_null_sentinel() {
        assert_eq!(format_value(RawValue::Absent), "NA");
    }

    #[test]
    fn test_flags_become_sentinel_pair() {
        assert_eq!(format_value(RawValue::Flag(true)), "SI");
        assert_eq!(format_value(RawValue::Flag(false)), "NO");
    }

    #[test]
    fn test_whitespace_only_becomes_null_sentinel() {
        assert_eq!(format_value(RawValue::Text("   ".to_string())), "NA");
        assert_eq!(format_value(RawValue::Text("\n\t\r".to_string())), "NA");
        assert_eq!(format_value(RawValue::Text(String::new())), "NA");
    }

    #[test]
    fn test_internal_whitespace_collapses() {
        assert_eq!(
            format_value(RawValue::Text("  Labrador\n\tmestizo  ".to_string())),
            "Labrador mestizo"
        );
    }

    #[test]
    fn test_plain_text_is_trimmed_only() {
        assert_eq!(
            format_value(RawValue::Text(" En adopcion ".to_string())),
            "En adopcion"
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(RawValue::from(None), RawValue::Absent);
        assert_eq!(
            RawValue::from(Some("x".to_string())),
            RawValue::Text("x".to_string())
        );
    }
}
