//! Static type information
//!
//! Class descriptions supplied at declaration time: callable members,
//! parameter and return types, constructor parameters, and the parent class.
//! The validator uses them for arity checks and the reflection facade reports
//! them alongside the metadata.

mod class_info;
mod class_table;
mod type_info;

pub use class_info::{ClassInfo, ConstructorInfo, MethodInfo, ParameterInfo};
pub use class_table::ClassTable;
pub use type_info::{TypeInfo, TypeKind};
