use crate::generator::generator_model::GenerationResult;

// ============================================================================
// Console inspection — formatted terminal output
// ============================================================================

/// Format a generation result for terminal output.
///
/// Produces output like:
/// ```text
/// === Page Elements: https://example.com/login ===
///
///   UserName      Input   Id           user-name         (5 members)
///   SignIn        Button  XPath        //button[...]     (5 members)
///
///   [WARN] No stable locator for <div> 'Generic' (Generic); element skipped
///
/// === 2 elements, 10 members, 1 warning ===
/// ```
pub fn format_inspection(source: &str, result: &GenerationResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Page Elements: {} ===\n\n", source));

    let name_width = column_width(result.elements.iter().map(|e| e.identifier.len()));
    let kind_width = column_width(result.elements.iter().map(|e| e.kind.label().len()));

    for element in &result.elements {
        out.push_str(&format!(
            "  {:<nw$}  {:<kw$}  {:<11}  {}  ({} members)\n",
            element.identifier,
            element.kind.label(),
            element.locator.strategy.to_string(),
            element.locator.value,
            element.members.len(),
            nw = name_width,
            kw = kind_width,
        ));
    }

    if !result.warnings.is_empty() {
        out.push('\n');
        for warning in &result.warnings {
            out.push_str(&format!("  [WARN] {}\n", warning));
        }
    }

    out.push_str(&format!(
        "\n=== {} elements, {} members, {} {} ===\n",
        result.elements.len(),
        result.member_count(),
        result.warnings.len(),
        if result.warnings.len() == 1 {
            "warning"
        } else {
            "warnings"
        }
    ));

    out
}

fn column_width(lengths: impl Iterator<Item = usize>) -> usize {
    lengths.max().unwrap_or(0)
}
