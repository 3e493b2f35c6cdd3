use crate::reflect::{Kind, Reflect, ReflectRef, TypeDesc};

/// Handle to a reflected value, or the empty handle when no value was supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueRef<'a> {
	value: Option<&'a dyn Reflect>,
}

impl<'a> ValueRef<'a> {
	/// The empty handle.
	pub const EMPTY: Self = Self { value: None };

	/// Whether the handle points at a value.
	pub fn is_valid(&self) -> bool {
		self.value.is_some()
	}

	/// Underlying value, if any.
	pub fn get(&self) -> Option<&'a dyn Reflect> {
		self.value
	}

	/// Kind of the underlying value; [`Kind::Invalid`] for the empty handle.
	pub fn kind(&self) -> Kind {
		self.value.map_or(Kind::Invalid, |value| value.type_desc().kind())
	}

	/// Descriptor of the underlying value.
	pub fn type_desc(&self) -> Option<TypeDesc> {
		self.value.map(|value| value.type_desc())
	}

	/// Follow one pointer level; returns `self` for non-pointers.
	pub fn dereferenced(self) -> Self {
		match self.value.map(|value| value.reflect_ref()) {
			Some(ReflectRef::Pointer(inner)) => Self { value: Some(inner) },
			_ => self,
		}
	}
}

/// Handle for `x`, or [`ValueRef::EMPTY`] when `x` is absent.
pub fn value_of(x: Option<&dyn Reflect>) -> ValueRef<'_> {
	ValueRef { value: x }
}

/// Like [`value_of`], but follows a single pointer level.
pub fn dereferenced_value_of(x: Option<&dyn Reflect>) -> ValueRef<'_> {
	value_of(x).dereferenced()
}

/// Descriptor of `x`, or `None` when `x` is absent.
pub fn type_of(x: Option<&dyn Reflect>) -> Option<TypeDesc> {
	x.map(|value| value.type_desc())
}

/// Like [`type_of`], but follows a single pointer level.
pub fn dereferenced_type_of(x: Option<&dyn Reflect>) -> Option<TypeDesc> {
	type_of(x).map(|desc| desc.dereferenced())
}

/// Declared unqualified name of a type.
pub fn name_of(desc: &TypeDesc) -> &'static str {
	desc.name()
}

/// Globally unique `"<module_path>.<name>"` key for the type of `x`, after one pointer level.
///
/// Unnamed types (function signatures, nested pointers) fall back to their
/// display form, e.g. `".fn(i64, i64) -> i64"`.
pub fn unique_reference(x: &dyn Reflect) -> String {
	let desc = x.type_desc().dereferenced();
	match desc.name() {
		"" => format!("{}.{desc}", desc.module_path()),
		name => format!("{}.{name}", desc.module_path()),
	}
}

#[cfg(test)]
mod tests;
