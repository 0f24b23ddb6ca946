//! Source-text fan-out.
//!
//! Every case is exercised once per supported source representation, so
//! that an engine accepting multiple encodings cannot pass the harness
//! while mishandling one of them.

use rendercheck_engine::SourceText;

use crate::cases::TestCase;

/// One encoding form of a case's source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    /// Form label shown in transcript lines.
    pub label: &'static str,
    /// The source text in this form.
    pub source: SourceText,
}

/// Expand a case's source into one variant per supported form.
///
/// The order is fixed: the default string form first, then UTF-8 bytes,
/// then UTF-16 code units.
pub fn fan_out(case: &TestCase) -> Vec<Variant> {
    vec![
        Variant {
            label: "default",
            source: SourceText::Text(case.source.clone()),
        },
        Variant {
            label: "utf-8",
            source: SourceText::Utf8(case.source.as_bytes().to_vec()),
        },
        Variant {
            label: "utf-16",
            source: SourceText::Utf16(case.source.encode_utf16().collect()),
        },
    ]
}
