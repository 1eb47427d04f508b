pub use super::factories::{ColumnBuffers, ColumnBuffersFactory};

use crate::engine::types::LogicalType;

pub struct Factory;

impl Factory {
    pub fn column_buffers(logical: LogicalType) -> ColumnBuffersFactory {
        ColumnBuffersFactory::new(logical)
    }
}
