use std::fmt;

use entigen_core::{Column, TargetType};

/// The `ORM\Column` attribute of an entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAnnotation {
    pub column: String,
    pub target: TargetType,
    pub length: Option<u32>,
    pub nullable: bool,
}

impl ColumnAnnotation {
    pub fn for_column(column: &Column, target: TargetType) -> Self {
        Self {
            column: column.name.clone(),
            target,
            length: column.length,
            nullable: column.is_nullable,
        }
    }
}

impl fmt::Display for ColumnAnnotation {
    /// Opaque fields carry only name and type, sized strings carry their
    /// length, every other field carries its nullability.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = escape_php_string(&self.column);
        let php_type = self.target.php_name();
        match (self.target, self.length) {
            (TargetType::Mixed, _) => {
                write!(f, "#[ORM\\Column(name: \"{name}\", type: \"{php_type}\")]")
            }
            (TargetType::String, Some(length)) if length > 0 => write!(
                f,
                "#[ORM\\Column(name: \"{name}\", type: \"{php_type}\", length: {length})]"
            ),
            _ => write!(
                f,
                "#[ORM\\Column(name: \"{name}\", type: \"{php_type}\", nullable: {})]",
                self.nullable
            ),
        }
    }
}

/// Escape a value for a double-quoted PHP string literal.
pub(crate) fn escape_php_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' | '"' | '$' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}
