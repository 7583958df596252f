//! Type references

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::symbol::{identifier_problem, is_reserved_word};
use crate::error::ModelError;

/// Names that denote primitive types rather than declared types
pub const PRIMITIVE_NAMES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// What kind of thing a [`JavaType`] names
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// A declared class, interface, enum or annotation
    Type,
    /// A primitive (`int`, `boolean`, `void`, ...)
    Primitive,
    /// A type variable (`T`, `E`, ...)
    Variable,
}

/// Reference to a type by fully qualified name
///
/// Equality is structural: two references are equal when their name, array
/// dimensions, data type and type parameters all match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JavaType {
    fully_qualified_name: String,
    array_dimensions: u32,
    data_type: DataType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parameters: Vec<JavaType>,
}

impl JavaType {
    /// Parse a dotted type name, optionally followed by `[]` suffixes
    ///
    /// Bare primitive names produce primitive types.
    pub fn parse(name: &str) -> Result<Self, ModelError> {
        let trimmed = name.trim();
        let mut base = trimmed;
        let mut array_dimensions = 0;
        while let Some(stripped) = base.strip_suffix("[]") {
            base = stripped.trim_end();
            array_dimensions += 1;
        }

        if PRIMITIVE_NAMES.contains(&base) {
            return Ok(Self {
                fully_qualified_name: base.to_string(),
                array_dimensions,
                data_type: DataType::Primitive,
                parameters: Vec::new(),
            });
        }

        for segment in base.split('.') {
            if segment.is_empty() {
                return Err(ModelError::InvalidTypeName {
                    name: name.to_string(),
                    reason: "empty segment".to_string(),
                });
            }
            if let Some(reason) = identifier_problem(segment) {
                return Err(ModelError::InvalidTypeName {
                    name: name.to_string(),
                    reason,
                });
            }
            if is_reserved_word(segment) {
                return Err(ModelError::InvalidTypeName {
                    name: name.to_string(),
                    reason: format!("reserved word '{}'", segment),
                });
            }
        }

        Ok(Self {
            fully_qualified_name: base.to_string(),
            array_dimensions,
            data_type: DataType::Type,
            parameters: Vec::new(),
        })
    }

    /// Create a type variable such as `T`
    pub fn variable(name: &str) -> Result<Self, ModelError> {
        if let Some(reason) = identifier_problem(name) {
            return Err(ModelError::InvalidTypeName {
                name: name.to_string(),
                reason,
            });
        }
        Ok(Self {
            fully_qualified_name: name.to_string(),
            array_dimensions: 0,
            data_type: DataType::Variable,
            parameters: Vec::new(),
        })
    }

    fn builtin(name: &str, data_type: DataType) -> Self {
        Self {
            fully_qualified_name: name.to_string(),
            array_dimensions: 0,
            data_type,
            parameters: Vec::new(),
        }
    }

    /// `int`
    pub fn int_primitive() -> Self {
        Self::builtin("int", DataType::Primitive)
    }

    /// `long`
    pub fn long_primitive() -> Self {
        Self::builtin("long", DataType::Primitive)
    }

    /// `boolean`
    pub fn boolean_primitive() -> Self {
        Self::builtin("boolean", DataType::Primitive)
    }

    /// `void`
    pub fn void_primitive() -> Self {
        Self::builtin("void", DataType::Primitive)
    }

    /// `java.lang.String`
    pub fn string() -> Self {
        Self::builtin("java.lang.String", DataType::Type)
    }

    /// `java.lang.Object`
    pub fn object() -> Self {
        Self::builtin("java.lang.Object", DataType::Type)
    }

    /// Return this type with the given number of array dimensions
    pub fn with_array_dimensions(mut self, dimensions: u32) -> Self {
        self.array_dimensions = dimensions;
        self
    }

    /// Return this type with the given type parameters
    pub fn with_parameters(mut self, parameters: Vec<JavaType>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Fully qualified name without parameters or array suffix
    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    /// Last segment of the fully qualified name
    pub fn simple_type_name(&self) -> &str {
        self.fully_qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.fully_qualified_name)
    }

    /// Package portion of the name, `None` for the default package
    pub fn package_name(&self) -> Option<&str> {
        if self.data_type != DataType::Type {
            return None;
        }
        self.fully_qualified_name
            .rsplit_once('.')
            .map(|(package, _)| package)
    }

    /// Kind of type
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Check if this is a primitive type
    pub fn is_primitive(&self) -> bool {
        self.data_type == DataType::Primitive
    }

    /// Check if this is an array type
    pub fn is_array(&self) -> bool {
        self.array_dimensions > 0
    }

    /// Number of array dimensions (`0` for non-arrays)
    pub fn array_dimensions(&self) -> u32 {
        self.array_dimensions
    }

    /// Type parameters
    pub fn parameters(&self) -> &[JavaType] {
        &self.parameters
    }
}

impl FromStr for JavaType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fully_qualified_name)?;
        if !self.parameters.is_empty() {
            write!(f, "<")?;
            for (i, param) in self.parameters.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", param)?;
            }
            write!(f, ">")?;
        }
        for _ in 0..self.array_dimensions {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_declared_type() {
        let ty = JavaType::parse("com.example.Person").unwrap();
        assert_eq!(ty.fully_qualified_name(), "com.example.Person");
        assert_eq!(ty.simple_type_name(), "Person");
        assert_eq!(ty.package_name(), Some("com.example"));
        assert_eq!(ty.data_type(), DataType::Type);
        assert!(!ty.is_array());
    }

    #[test]
    fn test_parse_primitive_and_array() {
        let ty = JavaType::parse("int").unwrap();
        assert!(ty.is_primitive());
        assert_eq!(ty, JavaType::int_primitive());
        assert_eq!(ty.package_name(), None);

        let ty = JavaType::parse("byte[][]").unwrap();
        assert!(ty.is_primitive());
        assert_eq!(ty.array_dimensions(), 2);
        assert_eq!(ty.to_string(), "byte[][]");
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        assert!(JavaType::parse("com..Person").is_err());
        assert!(JavaType::parse("com.example.").is_err());
        assert!(JavaType::parse("com.3d.Model").is_err());
        assert!(JavaType::parse("com.class.Person").is_err());
        assert!(JavaType::parse("").is_err());
    }

    #[test]
    fn test_default_package() {
        let ty = JavaType::parse("Person").unwrap();
        assert_eq!(ty.package_name(), None);
        assert_eq!(ty.simple_type_name(), "Person");
    }

    #[test]
    fn test_display_with_parameters() {
        let list = JavaType::parse("java.util.List")
            .unwrap()
            .with_parameters(vec![JavaType::string()]);
        assert_eq!(list.to_string(), "java.util.List<java.lang.String>");

        let var = JavaType::variable("T").unwrap();
        assert_eq!(var.data_type(), DataType::Variable);
        assert_eq!(var.package_name(), None);
    }

    #[test]
    fn test_structural_equality() {
        let a = JavaType::parse("java.util.List")
            .unwrap()
            .with_parameters(vec![JavaType::string()]);
        let b = JavaType::parse("java.util.List")
            .unwrap()
            .with_parameters(vec![JavaType::string()]);
        let raw = JavaType::parse("java.util.List").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, raw);
    }
}
