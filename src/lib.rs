pub mod engine;
pub mod logging;
pub mod shared;

pub use engine::access::{FromValue, ResultChunk, RowAccessor};
pub use engine::core::column::{ColumnTable, ColumnVector};
pub use engine::errors::MarshalError;
pub use engine::types::{LogicalType, LogicalTypeId, TypeMeta};
pub use engine::value::DynamicValue;


#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
