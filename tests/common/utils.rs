use pom_gen::element::keywords::ReservedWords;
use pom_gen::generate_from_html;
use pom_gen::generator::generator_model::{GeneratedElement, GenerationResult};

pub fn fixture_path(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    let path = base.join("tests").join("fixtures").join(name);

    path.display().to_string()
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

pub fn generate_csharp(html: &str) -> GenerationResult {
    generate_from_html(html, &ReservedWords::csharp())
}

pub fn element<'a>(result: &'a GenerationResult, identifier: &str) -> &'a GeneratedElement {
    result
        .elements
        .iter()
        .find(|e| e.identifier == identifier)
        .unwrap_or_else(|| panic!("no element named {} in {:?}", identifier, identifiers(result)))
}

pub fn identifiers(result: &GenerationResult) -> Vec<&str> {
    result.elements.iter().map(|e| e.identifier.as_str()).collect()
}
