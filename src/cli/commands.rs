use tracing::info;

use crate::generate_from_html;
use crate::cli::config::{AppConfig, build_fetch_options, resolve_output_path};
use crate::cli::validate::{validate_class_name, validate_namespace};
use crate::dom::parser::parse_document;
use crate::element::keywords::ReservedWords;
use crate::error::GenError;
use crate::generator::generator::{collect, discover};
use crate::generator::generator_model::GenerationResult;
use crate::render::console::format_inspection;
use crate::render::csharp::{RenderOptions, render_page_object};
use crate::source::loader::{load_document, source_fingerprint};
use crate::trace::logger::TraceLogger;

// ============================================================================
// generate subcommand
// ============================================================================

/// Generate a page-object class and write it to disk. Returns the path written.
pub fn cmd_generate(
    source: &str,
    class_name: &str,
    namespace: Option<&str>,
    output: Option<&str>,
    trace: Option<&str>,
    config: &AppConfig,
) -> Result<String, GenError> {
    let reserved = ReservedWords::csharp();
    let namespace = namespace.unwrap_or(&config.generate.namespace);

    validate_class_name(class_name, &reserved)?;
    validate_namespace(namespace, &reserved)?;

    let html = load_document(source, &build_fetch_options(&config.fetch))?;
    let nodes = parse_document(&html);
    let candidates = discover(&nodes, &reserved);

    let tracer = match trace.or(config.generate.trace.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };
    tracer.log_candidates(&candidates);

    let result = collect(&candidates);
    let rendered = render_page_object(
        &result,
        &RenderOptions {
            class_name: class_name.to_string(),
            namespace: namespace.to_string(),
            source: source.to_string(),
            fingerprint: source_fingerprint(&html),
        },
    );

    let path = resolve_output_path(output, &config.generate, class_name);
    if let Some(parent) = std::path::Path::new(&path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GenError::io(parent.display().to_string(), e))?;
        }
    }
    std::fs::write(&path, rendered).map_err(|e| GenError::io(&path, e))?;

    info!(path = %path, elements = result.elements.len(), "wrote page object");
    println!(
        "Generated {} with {} elements ({} skipped) -> {}",
        class_name,
        result.elements.len(),
        result.warnings.len(),
        path
    );

    Ok(path)
}

// ============================================================================
// inspect subcommand
// ============================================================================

pub fn cmd_inspect(source: &str, format: &str, config: &AppConfig) -> Result<(), GenError> {
    let html = load_document(source, &build_fetch_options(&config.fetch))?;
    let result = generate_from_html(&html, &ReservedWords::csharp());

    print!("{}", format_result(source, &result, format)?);
    Ok(())
}

/// Render an inspection in the requested format (`json` or console).
pub fn format_result(source: &str, result: &GenerationResult, format: &str) -> Result<String, GenError> {
    match format {
        "json" => {
            let mut json = serde_json::to_string_pretty(result).map_err(|e| GenError::Json {
                context: "inspection result".into(),
                source: e,
            })?;
            json.push('\n');
            Ok(json)
        }
        _ => Ok(format_inspection(source, result)),
    }
}
