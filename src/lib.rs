use crate::{
    dom::parser::parse_document,
    element::keywords::ReservedWords,
    generator::{generator::generate, generator_model::GenerationResult},
};

pub mod cli;
pub mod dom;
pub mod element;
pub mod emit;
pub mod error;
pub mod generator;
pub mod render;
pub mod source;
pub mod trace;

/// Parse a raw HTML document and run the generation pipeline over it.
///
/// `reserved` is the target language's keyword set; identifiers that collide
/// with it get an `Element` suffix.
pub fn generate_from_html(html: &str, reserved: &ReservedWords) -> GenerationResult {
    let nodes = parse_document(html);
    generate(&nodes, reserved)
}
