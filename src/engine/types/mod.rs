mod logical_type;
mod registry;

#[cfg(test)]
mod logical_type_test;
#[cfg(test)]
mod registry_test;

pub use logical_type::{
    DecimalType, DecimalWidth, EnumIndexWidth, EnumType, LogicalType, LogicalTypeId, TypeMeta,
};
pub use registry::{HostType, PhysicalFamily, TypeRegistry};
