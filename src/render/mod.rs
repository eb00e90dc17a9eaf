//! Minimal page rendering.
//!
//! # Responsibilities
//! - Substitute `{{key}}` placeholders in an embedded template with context
//!   values
//!
//! # Design Decisions
//! - No conditionals, no loops, no inheritance; handlers pre-render anything
//!   structured (lists, optional banners) into plain context strings
//! - Unmatched placeholders are left in place so a missing context entry is
//!   visible in the output rather than silently blank

/// Render a template source against a flat string context.
///
/// Each `(key, value)` pair replaces every occurrence of `{{key}}`.
pub fn render(source: &str, context: &[(&str, &str)]) -> String {
    let mut out = source.to_string();
    for (key, value) in context {
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}
