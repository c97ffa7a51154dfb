use std::fmt;

use serde::{Deserialize, Serialize};

use crate::annotation::escape_php_string;
use crate::entity::{EntityClass, EntityField};

pub const DEFAULT_NAMESPACE: &str = "App\\Entity";

/// Options for rendering entity source files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// PHP namespace declared by every generated class.
    pub namespace: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// Render the PHP source of an entity class.
///
/// Properties come first in column order, followed by a getter/setter pair
/// per property in the same order.
pub fn render_entity(class: &EntityClass, opts: &RenderOptions) -> String {
    PhpEntity { class, opts }.to_string()
}

struct PhpEntity<'a> {
    class: &'a EntityClass,
    opts: &'a RenderOptions,
}

impl fmt::Display for PhpEntity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = self.class;

        f.write_str("<?php\n\n")?;
        writeln!(f, "namespace {};\n", self.opts.namespace.trim_matches('\\'))?;
        f.write_str("use Doctrine\\ORM\\Mapping as ORM;\n\n")?;
        f.write_str("#[ORM\\Entity]\n")?;
        writeln!(
            f,
            "#[ORM\\Table(name: \"{}\")]",
            escape_php_string(&class.table_name)
        )?;
        writeln!(f, "class {}\n{{", class.class_name)?;

        for field in &class.fields {
            write_property(f, field)?;
        }
        for field in &class.fields {
            write_accessors(f, field)?;
        }

        f.write_str("}\n")
    }
}

fn write_property(f: &mut fmt::Formatter<'_>, field: &EntityField) -> fmt::Result {
    if let Some(comment) = field.comment.as_deref().filter(|c| !c.trim().is_empty()) {
        writeln!(f, "\t/** {} */", doc_text(comment))?;
    }
    if field.is_identifier {
        f.write_str("\t#[ORM\\Id]\n")?;
        f.write_str("\t#[ORM\\GeneratedValue(strategy: \"AUTO\")]\n")?;
    }
    writeln!(f, "\t{}", field.annotation)?;
    writeln!(f, "\tprivate {} ${} = null;\n", field.php_type(), field.name)
}

fn write_accessors(f: &mut fmt::Formatter<'_>, field: &EntityField) -> fmt::Result {
    let name = &field.name;
    let php_type = field.php_type();
    let suffix = field.accessor_suffix();

    writeln!(f, "\tpublic function get{suffix}(): {php_type}\n\t{{")?;
    writeln!(f, "\t\treturn $this->{name};\n\t}}\n")?;
    writeln!(f, "\tpublic function set{suffix}({php_type} ${name}): void\n\t{{")?;
    writeln!(f, "\t\t$this->{name} = ${name};\n\t}}\n")
}

/// Flatten a column comment into a single-line docblock body.
fn doc_text(comment: &str) -> String {
    comment
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "* /")
}
