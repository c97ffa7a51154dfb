//! Entity class generation for entigen.
//!
//! This crate turns a schema snapshot into Doctrine entity classes: it maps
//! column types, derives the `ORM\Column` attribute of every field, renders
//! the PHP source and writes one file per class.

pub mod annotation;
pub mod engine;
pub mod entity;
pub mod errors;
pub mod model;
pub mod output;
pub mod php;

pub use annotation::ColumnAnnotation;
pub use engine::{Progress, generate_entities, generate_entities_with};
pub use entity::{EntityClass, EntityField};
pub use errors::RenderError;
pub use model::{GenerateOptions, GeneratedEntity, GenerationReport};
pub use output::EntityWriter;
pub use php::{RenderOptions, render_entity};
