pub mod chunk;
pub mod from_value;
pub mod row_accessor;

#[cfg(test)]
mod chunk_test;

pub use chunk::ResultChunk;
pub use from_value::FromValue;
pub use row_accessor::RowAccessor;
