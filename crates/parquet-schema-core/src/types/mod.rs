mod group_node;
mod logical_type;
mod physical_type;
mod primitive_node;
mod repetition;
mod schema_node;
mod time_unit;

pub use group_node::{GroupNode, LIST_ENTRY_NAME, MAP_ENTRY_NAME};
pub use logical_type::{LogicalType, TimestampType};
pub use physical_type::PhysicalType;
pub use primitive_node::PrimitiveNode;
pub use repetition::Repetition;
pub use schema_node::SchemaNode;
pub use time_unit::TimeUnit;
