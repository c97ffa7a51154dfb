use entigen_core::{
    Column, Platform, Table, TargetType, class_name, is_identifier_column, map_column_type,
    ucfirst,
};

use crate::annotation::ColumnAnnotation;

/// A typed field of a generated entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityField {
    pub name: String,
    pub target: TargetType,
    pub annotation: ColumnAnnotation,
    /// Autoincrement column named `id`: rendered with `ORM\Id` and a generated value.
    pub is_identifier: bool,
    pub comment: Option<String>,
}

impl EntityField {
    pub fn from_column(platform: &Platform, column: &Column) -> Self {
        let target = map_column_type(platform, &column.data_type);
        Self {
            name: column.name.clone(),
            target,
            annotation: ColumnAnnotation::for_column(column, target),
            is_identifier: column.is_autoincrement && is_identifier_column(&column.name),
            comment: column.comment.clone(),
        }
    }

    /// Declared PHP type of the property and its accessors.
    ///
    /// `mixed` already admits null and cannot be made nullable.
    pub fn php_type(&self) -> String {
        if self.target.is_opaque() {
            self.target.php_name().to_string()
        } else {
            format!("?{}", self.target.php_name())
        }
    }

    /// `Name` in `getName`/`setName`.
    pub fn accessor_suffix(&self) -> String {
        ucfirst(&self.name)
    }
}

/// An entity class generated for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityClass {
    pub class_name: String,
    pub table_name: String,
    pub fields: Vec<EntityField>,
}

impl EntityClass {
    pub fn from_table(platform: &Platform, prefix: &str, table: &Table) -> Self {
        let mut columns: Vec<&Column> = table.columns.iter().collect();
        columns.sort_by_key(|column| column.ordinal_position);

        Self {
            class_name: class_name(prefix, &table.name),
            table_name: table.name.clone(),
            fields: columns
                .into_iter()
                .map(|column| EntityField::from_column(platform, column))
                .collect(),
        }
    }

    pub fn opaque_fields(&self) -> impl Iterator<Item = &EntityField> {
        self.fields.iter().filter(|field| field.target.is_opaque())
    }
}
