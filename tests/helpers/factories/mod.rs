pub mod column_buffers_factory;

pub use column_buffers_factory::{ColumnBuffers, ColumnBuffersFactory};

#[cfg(test)]
mod column_buffers_factory_test;
