use std::collections::HashSet;

/// C# reserved keywords. Contextual keywords (`var`, `async`, ...) are legal
/// identifiers and are not listed.
pub const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Case-insensitive set of identifiers the target language reserves.
#[derive(Debug, Clone)]
pub struct ReservedWords {
    words: HashSet<String>,
}

impl ReservedWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn csharp() -> Self {
        Self::new(CSHARP_KEYWORDS)
    }

    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.words.contains(&identifier.to_ascii_lowercase())
    }

    /// Case-sensitive lookup, matching how the compiler itself sees keywords.
    pub fn contains_exact(&self, identifier: &str) -> bool {
        self.words.contains(identifier)
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::csharp()
    }
}
