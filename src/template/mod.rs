//! # Template Module
//!
//! Loading of CloudFormation templates: the parsed document tree and the
//! independent line index used for source links.

pub mod document;
pub mod line_index;
pub mod loader;
pub mod value;

pub use document::{ConfigDocument, ParameterGroupHint, ParameterSpec, ResourceSpec, VersionInfo};
pub use line_index::{DeclarationKind, LineIndex};
pub use loader::{load_document, TemplateSource};
pub use value::TemplateValue;
