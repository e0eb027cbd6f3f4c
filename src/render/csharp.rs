use crate::element::element_model::{Locator, LocatorStrategy};
use crate::emit::member_model::{MemberDescriptor, OperationKind};
use crate::generator::generator_model::{GeneratedElement, GenerationResult};

// ============================================================================
// C# Selenium page object — template substitution
// ============================================================================

const CLASS_TEMPLATE: &str = "\
// <auto-generated>
//     Generated by pom-gen from {{source}}
//     Source SHA-1: {{fingerprint}}
//     Elements: {{element_count}}
// </auto-generated>
using OpenQA.Selenium;
using OpenQA.Selenium.Support.UI;

namespace {{namespace}}
{
    public class {{class_name}}
    {
        private readonly IWebDriver _driver;

        public {{class_name}}(IWebDriver driver)
        {
            _driver = driver;
        }
{{members}}    }
}
";

const INDENT: &str = "        ";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub class_name: String,
    pub namespace: String,
    pub source: String,
    pub fingerprint: String,
}

/// Render the generated elements into a complete C# page-object class.
pub fn render_page_object(result: &GenerationResult, options: &RenderOptions) -> String {
    let mut members = String::new();
    for element in &result.elements {
        members.push('\n');
        members.push_str(&render_element(element));
    }

    CLASS_TEMPLATE
        .replace("{{source}}", &single_line(&options.source))
        .replace("{{fingerprint}}", &options.fingerprint)
        .replace("{{element_count}}", &result.elements.len().to_string())
        .replace("{{namespace}}", &options.namespace)
        .replace("{{class_name}}", &options.class_name)
        .replace("{{members}}", &members)
}

/// All members of one element, separated by blank lines.
pub fn render_element(element: &GeneratedElement) -> String {
    element
        .members
        .iter()
        .map(render_member)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_member(member: &MemberDescriptor) -> String {
    let name = &member.element_name;
    let method = &member.member_name;
    let find = format!("Find{}", name);

    let lines: Vec<String> = match member.operation {
        OperationKind::LocatorField => vec![format!(
            "private static readonly By {} = {};",
            method,
            by_expression(&member.locator)
        )],
        OperationKind::Find => vec![format!(
            "private IWebElement {}() => _driver.FindElement({}Locator);",
            method, name
        )],
        OperationKind::IsDisplayed => vec![
            format!("public bool {}()", method),
            "{".into(),
            "    try".into(),
            "    {".into(),
            format!("        return {}().Displayed;", find),
            "    }".into(),
            "    catch (NoSuchElementException)".into(),
            "    {".into(),
            "        return false;".into(),
            "    }".into(),
            "}".into(),
        ],
        OperationKind::Click => vec![format!("public void {}() => {}().Click();", method, find)],
        OperationKind::EnterText => vec![
            format!("public void {}(string text)", method),
            "{".into(),
            format!("    var element = {}();", find),
            "    element.Clear();".into(),
            "    element.SendKeys(text);".into(),
            "}".into(),
        ],
        OperationKind::GetValue => vec![format!(
            "public string {}() => {}().GetAttribute(\"value\");",
            method, find
        )],
        OperationKind::SelectByVisibleText => vec![format!(
            "public void {}(string text) => new SelectElement({}()).SelectByText(text);",
            method, find
        )],
        OperationKind::SelectByValue => vec![format!(
            "public void {}(string value) => new SelectElement({}()).SelectByValue(value);",
            method, find
        )],
        OperationKind::GetSelectedText => vec![format!(
            "public string {}() => new SelectElement({}()).SelectedOption.Text;",
            method, find
        )],
        OperationKind::GetText => vec![format!("public string {}() => {}().Text;", method, find)],
    };

    let mut out = String::new();
    for line in lines {
        out.push_str(INDENT);
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// `By.Id("...")`, `By.Name("...")`, ... for a locator.
pub fn by_expression(locator: &Locator) -> String {
    let factory = match locator.strategy {
        LocatorStrategy::Id => "Id",
        LocatorStrategy::Name => "Name",
        LocatorStrategy::CssSelector => "CssSelector",
        LocatorStrategy::XPath => "XPath",
    };
    format!("By.{}({})", factory, csharp_string(&locator.value))
}

/// Quote as a regular C# string literal.
pub fn csharp_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}
