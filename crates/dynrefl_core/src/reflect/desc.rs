use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::reflect::{Kind, Reflect, Typed};

/// Runtime descriptor of one reflected type.
///
/// Cloning is cheap. Two descriptors compare equal iff they describe the exact same Rust type.
#[derive(Clone)]
pub struct TypeDesc {
	inner: Arc<TypeInfo>,
}

struct TypeInfo {
	id: TypeId,
	name: &'static str,
	module_path: &'static str,
	kind: Kind,
	shape: Shape,
	zero: fn() -> Option<Box<dyn Reflect>>,
}

enum Shape {
	Leaf,
	Struct(Vec<FieldDesc>),
	Pointer(fn() -> TypeDesc),
	Func { params: Vec<TypeDesc>, results: Vec<TypeDesc> },
}

/// One declared record field.
#[derive(Clone, Copy)]
pub struct FieldDesc {
	name: &'static str,
	public: bool,
	ty: fn() -> TypeDesc,
}

impl FieldDesc {
	/// Describe a field; `ty` is resolved lazily so records may refer to themselves.
	pub fn new(name: &'static str, public: bool, ty: fn() -> TypeDesc) -> Self {
		Self { name, public, ty }
	}

	/// Declared field name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Whether the field is exported (declared plain `pub`).
	pub fn is_public(&self) -> bool {
		self.public
	}

	/// Declared field type.
	pub fn ty(&self) -> TypeDesc {
		(self.ty)()
	}
}

impl fmt::Debug for FieldDesc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldDesc")
			.field("name", &self.name)
			.field("public", &self.public)
			.field("ty", &self.ty().to_string())
			.finish()
	}
}

impl TypeDesc {
	/// Descriptor for a type with no inner structure (primitives, dictionaries).
	pub fn leaf<T: Typed>(name: &'static str, kind: Kind) -> Self {
		Self::build::<T>(name, "", kind, Shape::Leaf)
	}

	/// Descriptor for a record with fields in declaration order.
	pub fn record<T: Typed>(name: &'static str, module_path: &'static str, fields: Vec<FieldDesc>) -> Self {
		Self::build::<T>(name, module_path, Kind::Struct, Shape::Struct(fields))
	}

	/// Descriptor for `Box<T>`.
	pub fn pointer<T: Typed>() -> Self {
		Self::build::<Box<T>>("", "", Kind::Pointer, Shape::Pointer(T::descriptor))
	}

	/// Descriptor for a callable; `Sig` is the `fn(..) -> ..` type that identifies the signature.
	pub fn func<Sig: 'static>(params: Vec<TypeDesc>, results: Vec<TypeDesc>) -> Self {
		Self {
			inner: Arc::new(TypeInfo {
				id: TypeId::of::<Sig>(),
				name: "",
				module_path: "",
				kind: Kind::Func,
				shape: Shape::Func { params, results },
				zero: || None,
			}),
		}
	}

	fn build<T: Typed>(name: &'static str, module_path: &'static str, kind: Kind, shape: Shape) -> Self {
		Self {
			inner: Arc::new(TypeInfo {
				id: TypeId::of::<T>(),
				name,
				module_path,
				kind,
				shape,
				zero: zero_value::<T>,
			}),
		}
	}

	/// Rust type identity.
	pub fn id(&self) -> TypeId {
		self.inner.id
	}

	/// Declared unqualified name; empty for unnamed types (pointers, callables).
	pub fn name(&self) -> &'static str {
		self.inner.name
	}

	/// Module path of the declaration; empty for built-in types.
	pub fn module_path(&self) -> &'static str {
		self.inner.module_path
	}

	/// Coarse type category.
	pub fn kind(&self) -> Kind {
		self.inner.kind
	}

	/// Whether this descriptor is a record.
	pub fn is_struct(&self) -> bool {
		self.kind() == Kind::Struct
	}

	/// Declared fields; empty unless this is a record.
	pub fn fields(&self) -> &[FieldDesc] {
		match &self.inner.shape {
			Shape::Struct(fields) => fields,
			_ => &[],
		}
	}

	/// Look up a declared field by exact name.
	pub fn field(&self, name: &str) -> Option<&FieldDesc> {
		self.fields().iter().find(|field| field.name == name)
	}

	/// Pointee descriptor of a pointer type.
	pub fn elem(&self) -> Option<Self> {
		match &self.inner.shape {
			Shape::Pointer(elem) => Some(elem()),
			_ => None,
		}
	}

	/// Follow one pointer level, or return `self` unchanged.
	pub fn dereferenced(&self) -> Self {
		self.elem().unwrap_or_else(|| self.clone())
	}

	/// Declared parameter types of a callable.
	pub fn params(&self) -> &[Self] {
		match &self.inner.shape {
			Shape::Func { params, .. } => params,
			_ => &[],
		}
	}

	/// Declared result types of a callable.
	pub fn results(&self) -> &[Self] {
		match &self.inner.shape {
			Shape::Func { results, .. } => results,
			_ => &[],
		}
	}

	/// Allocate a fresh zero value of this type behind an owning box.
	pub(crate) fn zero_value(&self) -> Option<Box<dyn Reflect>> {
		(self.inner.zero)()
	}

	/// Serializable summary of this descriptor.
	pub fn schema(&self) -> TypeSchema {
		TypeSchema {
			name: self.to_string(),
			module: self.module_path().to_owned(),
			kind: self.kind(),
			fields: self
				.fields()
				.iter()
				.map(|field| {
					let ty = field.ty();
					FieldSchema {
						name: field.name.to_owned(),
						ty: ty.to_string(),
						kind: ty.kind(),
						public: field.public,
					}
				})
				.collect(),
		}
	}
}

fn zero_value<T: Typed>() -> Option<Box<dyn Reflect>> {
	T::zero().map(|value| Box::new(value) as Box<dyn Reflect>)
}

impl PartialEq for TypeDesc {
	fn eq(&self, other: &Self) -> bool {
		self.inner.id == other.inner.id
	}
}

impl Eq for TypeDesc {}

impl fmt::Display for TypeDesc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.inner.shape {
			Shape::Pointer(elem) => write!(f, "Box<{}>", elem()),
			Shape::Func { params, results } => {
				f.write_str("fn(")?;
				write_list(f, params)?;
				f.write_str(")")?;
				match results.as_slice() {
					[] => Ok(()),
					[single] => write!(f, " -> {single}"),
					many => {
						f.write_str(" -> (")?;
						write_list(f, many)?;
						f.write_str(")")
					}
				}
			}
			Shape::Leaf | Shape::Struct(_) => f.write_str(self.inner.name),
		}
	}
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[TypeDesc]) -> fmt::Result {
	for (idx, item) in items.iter().enumerate() {
		if idx > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{item}")?;
	}
	Ok(())
}

impl fmt::Debug for TypeDesc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeDesc")
			.field("name", &self.to_string())
			.field("module_path", &self.inner.module_path)
			.field("kind", &self.inner.kind)
			.finish()
	}
}

/// Serializable view of a [`TypeDesc`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSchema {
	/// Display name of the type.
	pub name: String,
	/// Declaring module path, empty for built-ins.
	pub module: String,
	/// Type category.
	pub kind: Kind,
	/// Record fields in declaration order.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub fields: Vec<FieldSchema>,
}

/// Serializable view of a [`FieldDesc`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
	/// Declared field name.
	pub name: String,
	/// Display name of the field type.
	#[serde(rename = "type")]
	pub ty: String,
	/// Field type category.
	pub kind: Kind,
	/// Whether the field is exported.
	pub public: bool,
}

#[cfg(test)]
mod tests;
