use std::any::Any;
use std::fmt;

use crate::reflect::{Dict, Func, TypeDesc};

/// `Any` up-casts, implemented for every sized `'static` type.
pub trait AsAny {
	/// Borrow as `&dyn Any`.
	fn as_any(&self) -> &dyn Any;
	/// Borrow as `&mut dyn Any`.
	fn as_any_mut(&mut self) -> &mut dyn Any;
	/// Convert an owned box into `Box<dyn Any>`.
	fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}

	fn into_any(self: Box<Self>) -> Box<dyn Any> {
		self
	}
}

/// A value whose type can be inspected and manipulated at runtime.
///
/// Implemented for the primitive scalars, `String`, `()`, `Box<T>`, [`Func`], [`Dict`], and
/// every record declared through [`reflect_struct!`](crate::reflect_struct).
pub trait Reflect: AsAny + fmt::Debug + 'static {
	/// Descriptor of the concrete type.
	fn type_desc(&self) -> TypeDesc;

	/// Owned copy behind a fresh box.
	fn clone_value(&self) -> Box<dyn Reflect>;

	/// Structural view for read access.
	fn reflect_ref(&self) -> ReflectRef<'_>;

	/// Structural view for write access.
	fn reflect_mut(&mut self) -> ReflectMut<'_>;

	/// Overwrite `self` from `value`, converting scalars where possible.
	///
	/// Returns `false` and leaves `self` untouched when `value` cannot be converted.
	fn assign(&mut self, value: &dyn Reflect) -> bool;

	/// Named field of a record.
	fn field(&self, _name: &str) -> Option<&dyn Reflect> {
		None
	}

	/// Mutable named field of a record.
	fn field_mut(&mut self, _name: &str) -> Option<&mut dyn Reflect> {
		None
	}
}

/// Statically known reflection data for a concrete type.
pub trait Typed: Reflect + Clone + Sized {
	/// Descriptor of `Self`.
	fn descriptor() -> TypeDesc;

	/// Zero value, or `None` when the type has no meaningful default.
	fn zero() -> Option<Self>;
}

/// Conversion of a callable's return value into an ordered result list.
pub trait IntoResults: 'static {
	/// Descriptors of the produced results, in order.
	fn result_types() -> Vec<TypeDesc>;

	/// Produce the results.
	fn into_results(self) -> Vec<Box<dyn Reflect>>;
}

/// Read-only structural view of a reflected value.
#[derive(Debug)]
pub enum ReflectRef<'a> {
	/// Primitive scalar.
	Scalar(Scalar<'a>),
	/// `()`.
	Unit,
	/// Record; fields are reached through [`Reflect::field`].
	Struct,
	/// One level of indirection to the pointee.
	Pointer(&'a dyn Reflect),
	/// Callable.
	Func(&'a Func),
	/// Dictionary.
	Map(&'a Dict),
}

/// Mutable structural view of a reflected value.
#[derive(Debug)]
pub enum ReflectMut<'a> {
	/// Scalar, unit, or callable; only whole-value assignment applies.
	Leaf,
	/// Record; fields are reached through [`Reflect::field_mut`].
	Struct,
	/// One level of indirection to the pointee.
	Pointer(&'a mut dyn Reflect),
	/// Dictionary.
	Map(&'a mut Dict),
}

/// Primitive payload widened to a common representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
	/// Boolean.
	Bool(bool),
	/// Signed integer.
	Int(i64),
	/// Unsigned integer.
	Uint(u64),
	/// Floating point.
	Float(f64),
	/// String slice.
	Str(&'a str),
}

impl dyn Reflect {
	/// Whether the concrete type is `T`.
	pub fn is<T: Any>(&self) -> bool {
		self.as_any().is::<T>()
	}

	/// Borrow as `&T` if the concrete type is `T`.
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.as_any().downcast_ref::<T>()
	}

	/// Borrow as `&mut T` if the concrete type is `T`.
	pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
		self.as_any_mut().downcast_mut::<T>()
	}

	/// Unbox into `T` if the concrete type is `T`.
	pub fn take<T: Any>(self: Box<Self>) -> Option<T> {
		AsAny::into_any(self).downcast::<T>().ok().map(|value| *value)
	}
}

/// Assign `value` to `dst` when both have the same concrete type.
pub fn assign_exact<T: Reflect + Clone>(dst: &mut T, value: &dyn Reflect) -> bool {
	match value.downcast_ref::<T>() {
		Some(value) => {
			*dst = value.clone();
			true
		}
		None => false,
	}
}
