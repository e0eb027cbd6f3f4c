use pom_gen::dom::dom_model::DomNode;
use pom_gen::dom::parser::parse_document;
use pom_gen::element::element_model::{ElementKind, Locator, LocatorStrategy};
use pom_gen::element::keywords::ReservedWords;
use pom_gen::generator::generator::{discover, generate};

use crate::common::utils::{element, fixture, generate_csharp, identifiers};

mod common;

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parser_returns_elements_in_document_order() {
    let nodes = parse_document("<div><a href='#'>One</a><span><button>Two</button></span></div>");
    let tags: Vec<&str> = nodes.iter().map(|n| n.tag.as_str()).collect();

    assert_eq!(tags, vec!["html", "head", "body", "div", "a", "span", "button"]);
}

#[test]
fn parser_keeps_attributes_and_descendant_text() {
    let nodes = parse_document(r#"<button ID="go" data-testid="go-btn"><b>Go</b> now</button>"#);
    let button = nodes.iter().find(|n| n.tag == "button").unwrap();

    assert_eq!(button.attr("id"), Some("go"));
    assert_eq!(button.attr("DATA-TESTID"), Some("go-btn"));
    assert_eq!(button.text, "Go now");
}

#[test]
fn parser_tolerates_malformed_html() {
    let nodes = parse_document("<form><input name=q><button>Search</form></div>");
    assert!(nodes.iter().any(|n| n.tag == "input"));
    assert!(nodes.iter().any(|n| n.tag == "button"));
}

// ============================================================================
// End-to-end over the login fixture
// ============================================================================

#[test]
fn login_fixture_elements() {
    let result = generate_csharp(&fixture("login.html"));

    assert_eq!(
        identifiers(&result),
        vec![
            "Home",
            "Help",
            "UserName",
            "Pw83741234",
            "Remember",
            "Region",
            "Notes",
            "Submit",
            "Submit2",
            "Close",
        ]
    );
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("<div>"));
}

#[test]
fn login_fixture_locators() {
    let result = generate_csharp(&fixture("login.html"));

    let cases = [
        ("Home", LocatorStrategy::CssSelector, "[data-testid='nav-home']"),
        ("Help", LocatorStrategy::CssSelector, "a.nav-link"),
        ("UserName", LocatorStrategy::Id, "user-name"),
        ("Pw83741234", LocatorStrategy::Name, "password"),
        ("Remember", LocatorStrategy::Id, "remember"),
        ("Region", LocatorStrategy::Name, "region"),
        ("Notes", LocatorStrategy::CssSelector, "textarea.notes-box[placeholder='Notes']"),
        ("Submit", LocatorStrategy::XPath, "//button[normalize-space(.)='Submit']"),
        ("Submit2", LocatorStrategy::CssSelector, "button.secondary"),
        ("Close", LocatorStrategy::XPath, "//span[normalize-space(.)='Close']"),
    ];

    for (name, strategy, value) in cases {
        assert_eq!(element(&result, name).locator, Locator::new(strategy, value), "{}", name);
    }
}

#[test]
fn login_fixture_kinds() {
    let result = generate_csharp(&fixture("login.html"));

    assert_eq!(element(&result, "Home").kind, ElementKind::Link);
    assert_eq!(element(&result, "UserName").kind, ElementKind::Input);
    assert_eq!(element(&result, "Remember").kind, ElementKind::Checkbox);
    assert_eq!(element(&result, "Region").kind, ElementKind::Select);
    assert_eq!(element(&result, "Notes").kind, ElementKind::TextArea);
    assert_eq!(element(&result, "Submit").kind, ElementKind::Button);
    assert_eq!(element(&result, "Close").kind, ElementKind::Generic);
}

#[test]
fn username_example_members() {
    let result = generate_csharp(
        r#"<input id="user-name" name="uname" type="text" placeholder="Username">"#,
    );

    let user = element(&result, "UserName");
    let members: Vec<&str> = user.members.iter().map(|m| m.member_name.as_str()).collect();
    assert!(members.contains(&"EnterTextUserName"));
    assert!(members.contains(&"GetUserNameValue"));
    assert!(members.contains(&"IsUserNameDisplayed"));
}

// ============================================================================
// Naming across the whole page
// ============================================================================

#[test]
fn generic_fallback_names_are_numbered() {
    let nodes = vec![
        DomNode::element("button").with_attr("class", "primary"),
        DomNode::element("button").with_attr("class", "secondary"),
    ];
    let result = generate(&nodes, &ReservedWords::csharp());

    assert_eq!(identifiers(&result), vec!["Button1", "Button2"]);
}

#[test]
fn second_pass_resolves_counter_collisions() {
    let nodes = vec![
        DomNode::element("button").with_attr("class", "primary"),
        DomNode::element("button").with_attr("name", "button1"),
    ];
    let result = generate(&nodes, &ReservedWords::csharp());

    assert_eq!(identifiers(&result), vec!["Button1", "Button12"]);
}

#[test]
fn dropped_nodes_do_not_consume_names() {
    let nodes = vec![
        DomNode::element("a"),
        DomNode::element("a").with_attr("class", "menu").with_text("Menu"),
        DomNode::element("a").with_attr("class", "menu2").with_text("Menu"),
    ];
    let result = generate(&nodes, &ReservedWords::csharp());

    assert_eq!(identifiers(&result), vec!["Menu", "Menu2"]);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn reserved_names_are_suffixed() {
    let result = generate_csharp(r#"<input name="class"><button id="return">Back</button>"#);
    assert_eq!(identifiers(&result), vec!["ClassElement", "ReturnElement"]);
}

#[test]
fn identifiers_are_valid_and_unique() {
    let html = r##"
        <a href="#" class="link">1st</a>
        <a href="#" class="link">1st</a>
        <button name="for">x</button>
        <input id="-" type="email">
        <input placeholder="2 + 2">
        <button>Button1</button>
        <button class="xyz"></button>
        <span role="button">Button</span>
    "##;
    let result = generate_csharp(html);
    let reserved = ReservedWords::csharp();

    let mut seen = std::collections::HashSet::new();
    for e in &result.elements {
        let first = e.identifier.chars().next().unwrap();
        assert!(first.is_ascii_alphabetic() || first == '_', "{}", e.identifier);
        assert!(!reserved.contains(&e.identifier), "{}", e.identifier);
        assert!(seen.insert(e.identifier.to_lowercase()), "duplicate {}", e.identifier);
    }
}

#[test]
fn member_names_do_not_clash_across_elements() {
    let result = generate_csharp(r#"<select id="color"></select><button id="color-selected">x</button>"#);

    assert_eq!(identifiers(&result), vec!["Color", "ColorSelected2"]);
    assert_eq!(element(&result, "ColorSelected2").locator.value, "color-selected");

    let mut seen = std::collections::HashSet::new();
    for m in result.elements.iter().flat_map(|e| &e.members) {
        assert!(seen.insert(m.member_name.to_lowercase()), "duplicate member {}", m.member_name);
    }
}

#[test]
fn member_clash_rename_skips_taken_identifiers() {
    let html = r##"
        <select id="color"></select>
        <button id="color-selected">x</button>
        <a id="color-selected2" href="#">y</a>
    "##;
    let result = generate_csharp(html);

    assert_eq!(identifiers(&result), vec!["Color", "ColorSelected3", "ColorSelected2"]);
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn nested_relevant_nodes_are_all_emitted_in_document_order() {
    let html = r##"
        <a href="#" id="outer"><button id="inner">Go</button></a>
        <div role="button" id="wrap"><button id="deep">Deep</button></div>
    "##;
    let result = generate_csharp(html);

    assert_eq!(identifiers(&result), vec!["Outer", "Inner", "Wrap", "Deep"]);
    assert_eq!(element(&result, "Outer").kind, ElementKind::Link);
    assert_eq!(element(&result, "Inner").kind, ElementKind::Button);
    assert_eq!(element(&result, "Wrap").kind, ElementKind::Generic);
    assert_eq!(element(&result, "Deep").kind, ElementKind::Button);
    assert!(result.warnings.is_empty());
}

// ============================================================================
// Candidates
// ============================================================================

#[test]
fn discover_keeps_dropped_candidates_without_name() {
    let nodes = parse_document(r#"<div role="button"></div><button id="ok">OK</button>"#);
    let candidates = discover(&nodes, &ReservedWords::csharp());

    assert_eq!(candidates.len(), 2);
    assert!(candidates[0].locator.is_none());
    assert!(candidates[0].resolved_name.is_none());
    assert!(candidates[1].is_complete());
}

#[test]
fn empty_document_yields_empty_result() {
    let result = generate_csharp("");
    assert!(result.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn generation_is_deterministic() {
    let html = fixture("login.html");
    assert_eq!(generate_csharp(&html), generate_csharp(&html));
}
