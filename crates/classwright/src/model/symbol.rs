//! Validated symbol names (fields, methods, parameters, enum constants)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Keywords and literals that cannot be used as identifiers
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

/// Check whether `c` may start an identifier
pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Check whether `c` may appear after the first identifier character
pub(crate) fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Check whether `name` is a reserved word
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Describe why `name` is not a legal identifier, if it isn't
pub(crate) fn identifier_problem(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("name is empty".to_string());
    };
    if !is_identifier_start(first) {
        return Some(format!("illegal first character '{}'", first));
    }
    chars
        .find(|c| !is_identifier_part(*c))
        .map(|c| format!("illegal character '{}'", c))
}

/// A legal identifier naming a member or constant
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JavaSymbolName(String);

impl JavaSymbolName {
    /// Create a symbol name, checking that it is a legal identifier
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if let Some(reason) = identifier_problem(&name) {
            return Err(ModelError::InvalidSymbolName { name, reason });
        }
        Ok(Self(name))
    }

    /// Create a symbol name that must also avoid reserved words
    pub fn new_unreserved(name: impl Into<String>) -> Result<Self, ModelError> {
        let symbol = Self::new(name)?;
        if is_reserved_word(&symbol.0) {
            return Err(ModelError::ReservedWord { name: symbol.0 });
        }
        Ok(symbol)
    }

    /// The raw symbol text
    pub fn symbol_name(&self) -> &str {
        &self.0
    }

    /// The symbol with its first letter upper-cased (`name` -> `Name`)
    pub fn symbol_name_capitalised_first_letter(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// The symbol with its first letter lower-cased (`Name` -> `name`)
    pub fn symbol_name_uncapitalised_first_letter(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for JavaSymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for JavaSymbolName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for JavaSymbolName {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JavaSymbolName> for String {
    fn from(value: JavaSymbolName) -> Self {
        value.0
    }
}

impl AsRef<str> for JavaSymbolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
