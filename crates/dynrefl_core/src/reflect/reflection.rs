use crate::reflect::{FieldDesc, Reflect, TypeDesc, ValueRef, dereferenced_type_of, dereferenced_value_of, name_of, type_of, value_of};

/// A value bundled with its handle, descriptor, and resolved type name.
///
/// All parts are derived once at construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct Reflection<'a> {
	instance: Option<&'a dyn Reflect>,
	value: ValueRef<'a>,
	type_desc: Option<TypeDesc>,
	type_name: &'static str,
}

impl<'a> Reflection<'a> {
	/// Wrap `instance` as-is.
	pub fn new(instance: Option<&'a dyn Reflect>) -> Self {
		Self::from_parts(instance, value_of(instance), type_of(instance))
	}

	/// Wrap `instance` after following one pointer level on both handle and descriptor.
	pub fn new_dereferenced(instance: Option<&'a dyn Reflect>) -> Self {
		Self::from_parts(instance, dereferenced_value_of(instance), dereferenced_type_of(instance))
	}

	fn from_parts(instance: Option<&'a dyn Reflect>, value: ValueRef<'a>, type_desc: Option<TypeDesc>) -> Self {
		let type_name = type_desc.as_ref().map_or("", name_of);
		Self {
			instance,
			value,
			type_desc,
			type_name,
		}
	}

	/// The wrapped value.
	pub fn instance(&self) -> Option<&'a dyn Reflect> {
		self.instance
	}

	/// Handle captured at construction.
	pub fn value(&self) -> ValueRef<'a> {
		self.value
	}

	/// Descriptor captured at construction.
	pub fn type_desc(&self) -> Option<&TypeDesc> {
		self.type_desc.as_ref()
	}

	/// Descriptor with one pointer level followed.
	pub fn dereferenced_type(&self) -> Option<TypeDesc> {
		self.type_desc.as_ref().map(TypeDesc::dereferenced)
	}

	/// Declared name of the captured descriptor; empty for unnamed or absent types.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Whether the (dereferenced) type is a record.
	pub fn is_struct(&self) -> bool {
		self.dereferenced_type().is_some_and(|desc| desc.is_struct())
	}

	/// Whether the record declares an exported field called `name`.
	///
	/// `name` is first normalized to field case (`"FieldName"` and `"fieldName"` both look up
	/// `field_name`). Non-exported fields are never reported.
	pub fn has_field(&self, name: &str) -> bool {
		let Some(desc) = self.dereferenced_type().filter(TypeDesc::is_struct) else {
			return false;
		};
		desc.field(&to_field_case(name)).is_some_and(FieldDesc::is_public)
	}
}

/// Normalize an identifier to snake_case field naming.
pub(crate) fn to_field_case(name: &str) -> String {
	let chars: Vec<char> = name.trim().chars().collect();
	let mut out = String::with_capacity(name.len() + 4);

	for (idx, &ch) in chars.iter().enumerate() {
		if ch == '-' || ch == ' ' || ch == '_' {
			if !out.is_empty() && !out.ends_with('_') {
				out.push('_');
			}
			continue;
		}

		if ch.is_uppercase() {
			let prev = idx.checked_sub(1).and_then(|at| chars.get(at)).copied();
			let next = chars.get(idx + 1).copied();
			let after_lower = prev.is_some_and(|c| c.is_lowercase() || c.is_ascii_digit());
			let ends_acronym = prev.is_some_and(char::is_uppercase) && next.is_some_and(char::is_lowercase);
			if (after_lower || ends_acronym) && !out.ends_with('_') {
				out.push('_');
			}
			out.extend(ch.to_lowercase());
		} else {
			out.push(ch);
		}
	}

	out
}
