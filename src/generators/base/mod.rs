pub mod file_writer;
pub mod template_context;
pub mod templates;
pub mod type_visitor;

pub use file_writer::FileWriter;
pub use templates::GENERATED_HEADER;
pub use type_visitor::{map_type, map_type_name, BridgedObjectVisitor, SwiftExportVisitor, SwiftTypeVisitor};
