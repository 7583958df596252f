//! Declaration modifiers

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

bitflags::bitflags! {
    /// Modifier set for types and members, using the JVM access flag bits
    #[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Modifiers: u32 {
        /// `public`
        const PUBLIC = 0x0001;
        /// `private`
        const PRIVATE = 0x0002;
        /// `protected`
        const PROTECTED = 0x0004;
        /// `static`
        const STATIC = 0x0008;
        /// `final`
        const FINAL = 0x0010;
        /// `synchronized`
        const SYNCHRONIZED = 0x0020;
        /// `volatile`
        const VOLATILE = 0x0040;
        /// `transient`
        const TRANSIENT = 0x0080;
        /// `native`
        const NATIVE = 0x0100;
        /// `interface`
        const INTERFACE = 0x0200;
        /// `abstract`
        const ABSTRACT = 0x0400;
        /// `strictfp`
        const STRICT = 0x0800;
    }
}

const KEYWORDS: &[(Modifiers, &str)] = &[
    (Modifiers::PUBLIC, "public"),
    (Modifiers::PROTECTED, "protected"),
    (Modifiers::PRIVATE, "private"),
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::STATIC, "static"),
    (Modifiers::FINAL, "final"),
    (Modifiers::TRANSIENT, "transient"),
    (Modifiers::VOLATILE, "volatile"),
    (Modifiers::SYNCHRONIZED, "synchronized"),
    (Modifiers::NATIVE, "native"),
    (Modifiers::STRICT, "strictfp"),
    (Modifiers::INTERFACE, "interface"),
];

impl Modifiers {
    /// Look up a single modifier by its source keyword
    pub fn from_keyword(keyword: &str) -> Result<Self, ModelError> {
        KEYWORDS
            .iter()
            .find(|(_, kw)| *kw == keyword)
            .map(|(flag, _)| *flag)
            .ok_or_else(|| ModelError::UnknownModifier {
                name: keyword.to_string(),
            })
    }

    /// Combine a list of keywords into one set
    pub fn from_keywords<S: AsRef<str>>(keywords: &[S]) -> Result<Self, ModelError> {
        keywords.iter().try_fold(Modifiers::empty(), |acc, kw| {
            Ok(acc | Self::from_keyword(kw.as_ref())?)
        })
    }

    /// Keywords for the set flags in conventional source order
    pub fn keywords(&self) -> Vec<&'static str> {
        KEYWORDS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, kw)| *kw)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keywords() {
        let mods = Modifiers::from_keywords(&["private", "static", "final"]).unwrap();
        assert_eq!(mods, Modifiers::PRIVATE | Modifiers::STATIC | Modifiers::FINAL);
        assert_eq!(mods.keywords(), vec!["private", "static", "final"]);
    }

    #[test]
    fn test_unknown_keyword() {
        assert_eq!(
            Modifiers::from_keyword("sealed"),
            Err(ModelError::UnknownModifier {
                name: "sealed".to_string()
            })
        );
    }

    #[test]
    fn test_keyword_order_is_conventional() {
        let mods = Modifiers::FINAL | Modifiers::PUBLIC | Modifiers::STATIC;
        assert_eq!(mods.keywords(), vec!["public", "static", "final"]);
    }
}
