use crate::reflect::{Reflect, ReflectError, Result, TypeDesc};

/// Allocate a zero value of the same type as `x`.
///
/// The returned box owns the fresh value and is the addressable handle to it; its dynamic
/// type is the type of `x`, so it can go straight into [`map_to_struct`](crate::reflect::map_to_struct).
pub fn new_instance(x: &dyn Reflect) -> Result<Box<dyn Reflect>> {
	new_instance_from_type(&x.type_desc())
}

/// Allocate a zero value of `desc` behind an owning box.
///
/// Fails for types without a zero value, such as callables.
pub fn new_instance_from_type(desc: &TypeDesc) -> Result<Box<dyn Reflect>> {
	desc.zero_value().ok_or_else(|| ReflectError::NotConstructible {
		type_name: desc.to_string(),
	})
}
