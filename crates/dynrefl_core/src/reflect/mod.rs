mod access;
mod desc;
mod dict;
mod error;
mod func;
mod instance;
mod invoke;
mod kind;
mod mapper;
mod primitive;
mod record;
mod reflection;
mod value;

/// Value handles and type access helpers.
pub use access::{ValueRef, dereferenced_type_of, dereferenced_value_of, name_of, type_of, unique_reference, value_of};
/// Type descriptors and their serializable schema.
pub use desc::{FieldDesc, FieldSchema, TypeDesc, TypeSchema};
/// String-keyed dictionary of reflected values.
pub use dict::Dict;
/// Error and result aliases.
pub use error::{ReflectError, Result};
/// Reflected callables.
pub use func::{Func, IntoFunc};
/// Instance factory.
pub use instance::{new_instance, new_instance_from_type};
/// Validate-then-call function invoker.
pub use invoke::{CallableDesc, call_function, check_and_call_function, check_function, unchecked_call_function};
/// Type categories.
pub use kind::Kind;
/// Dictionary-to-record mapping.
pub use mapper::{map_to_struct, struct_to_dict};
/// Support for the `reflect_struct!` macro.
#[doc(hidden)]
pub use record::is_exported;
/// Structured value wrapper.
pub use reflection::Reflection;
/// Core reflection traits and structural views.
pub use value::{AsAny, IntoResults, Reflect, ReflectMut, ReflectRef, Scalar, Typed, assign_exact};
