pub mod column_table;
pub mod column_vector;
pub mod reader;


pub use column_table::ColumnTable;
pub use column_vector::ColumnVector;
