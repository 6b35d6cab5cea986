pub mod migrations;
pub mod registry;

pub use migrations::{find_migration, migration_plan, migration_script, Migration, MIGRATIONS};
pub use registry::{FieldType, SchemaRegistry, SchemaRevision};
