use std::sync::OnceLock;

use crate::reflect::{IntoResults, Kind, Reflect, ReflectMut, ReflectRef, Scalar, TypeDesc, Typed, assign_exact};

macro_rules! single_result {
	($ty:ty) => {
		impl IntoResults for $ty {
			fn result_types() -> Vec<TypeDesc> {
				vec![<$ty as Typed>::descriptor()]
			}

			fn into_results(self) -> Vec<Box<dyn Reflect>> {
				vec![Box::new(self) as Box<dyn Reflect>]
			}
		}
	};
}

macro_rules! reflect_numeric {
	($($ty:ty => $kind:ident, $variant:ident;)*) => {$(
		impl Typed for $ty {
			fn descriptor() -> TypeDesc {
				static DESC: OnceLock<TypeDesc> = OnceLock::new();
				DESC.get_or_init(|| TypeDesc::leaf::<Self>(stringify!($ty), Kind::$kind)).clone()
			}

			fn zero() -> Option<Self> {
				Some(<$ty>::default())
			}
		}

		impl Reflect for $ty {
			fn type_desc(&self) -> TypeDesc {
				<Self as Typed>::descriptor()
			}

			fn clone_value(&self) -> Box<dyn Reflect> {
				Box::new(*self)
			}

			fn reflect_ref(&self) -> ReflectRef<'_> {
				ReflectRef::Scalar(Scalar::$variant(*self as _))
			}

			fn reflect_mut(&mut self) -> ReflectMut<'_> {
				ReflectMut::Leaf
			}

			fn assign(&mut self, value: &dyn Reflect) -> bool {
				if assign_exact(self, value) {
					return true;
				}
				match value.reflect_ref() {
					ReflectRef::Scalar(Scalar::Int(v)) => *self = v as $ty,
					ReflectRef::Scalar(Scalar::Uint(v)) => *self = v as $ty,
					ReflectRef::Scalar(Scalar::Float(v)) => *self = v as $ty,
					_ => return false,
				}
				true
			}
		}

		single_result!($ty);
	)*};
}

reflect_numeric! {
	i8 => Int8, Int;
	i16 => Int16, Int;
	i32 => Int32, Int;
	i64 => Int64, Int;
	isize => Isize, Int;
	u8 => Uint8, Uint;
	u16 => Uint16, Uint;
	u32 => Uint32, Uint;
	u64 => Uint64, Uint;
	usize => Usize, Uint;
	f32 => Float32, Float;
	f64 => Float64, Float;
}

impl Typed for bool {
	fn descriptor() -> TypeDesc {
		static DESC: OnceLock<TypeDesc> = OnceLock::new();
		DESC.get_or_init(|| TypeDesc::leaf::<Self>("bool", Kind::Bool)).clone()
	}

	fn zero() -> Option<Self> {
		Some(false)
	}
}

impl Reflect for bool {
	fn type_desc(&self) -> TypeDesc {
		<Self as Typed>::descriptor()
	}

	fn clone_value(&self) -> Box<dyn Reflect> {
		Box::new(*self)
	}

	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Scalar(Scalar::Bool(*self))
	}

	fn reflect_mut(&mut self) -> ReflectMut<'_> {
		ReflectMut::Leaf
	}

	fn assign(&mut self, value: &dyn Reflect) -> bool {
		assign_exact(self, value)
	}
}

single_result!(bool);

impl Typed for String {
	fn descriptor() -> TypeDesc {
		static DESC: OnceLock<TypeDesc> = OnceLock::new();
		DESC.get_or_init(|| TypeDesc::leaf::<Self>("String", Kind::String)).clone()
	}

	fn zero() -> Option<Self> {
		Some(Self::new())
	}
}

impl Reflect for String {
	fn type_desc(&self) -> TypeDesc {
		<Self as Typed>::descriptor()
	}

	fn clone_value(&self) -> Box<dyn Reflect> {
		Box::new(self.clone())
	}

	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Scalar(Scalar::Str(self))
	}

	fn reflect_mut(&mut self) -> ReflectMut<'_> {
		ReflectMut::Leaf
	}

	fn assign(&mut self, value: &dyn Reflect) -> bool {
		match value.reflect_ref() {
			ReflectRef::Scalar(Scalar::Str(text)) => {
				text.clone_into(self);
				true
			}
			_ => false,
		}
	}
}

single_result!(String);

impl Typed for () {
	fn descriptor() -> TypeDesc {
		static DESC: OnceLock<TypeDesc> = OnceLock::new();
		DESC.get_or_init(|| TypeDesc::leaf::<Self>("()", Kind::Unit)).clone()
	}

	fn zero() -> Option<Self> {
		Some(())
	}
}

impl Reflect for () {
	fn type_desc(&self) -> TypeDesc {
		<Self as Typed>::descriptor()
	}

	fn clone_value(&self) -> Box<dyn Reflect> {
		Box::new(())
	}

	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Unit
	}

	fn reflect_mut(&mut self) -> ReflectMut<'_> {
		ReflectMut::Leaf
	}

	fn assign(&mut self, value: &dyn Reflect) -> bool {
		value.is::<()>()
	}
}

impl IntoResults for () {
	fn result_types() -> Vec<TypeDesc> {
		Vec::new()
	}

	fn into_results(self) -> Vec<Box<dyn Reflect>> {
		Vec::new()
	}
}

impl<T: Typed> Typed for Box<T> {
	fn descriptor() -> TypeDesc {
		TypeDesc::pointer::<T>()
	}

	fn zero() -> Option<Self> {
		T::zero().map(Box::new)
	}
}

impl<T: Typed> Reflect for Box<T> {
	fn type_desc(&self) -> TypeDesc {
		<Self as Typed>::descriptor()
	}

	fn clone_value(&self) -> Box<dyn Reflect> {
		Box::new(self.clone())
	}

	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Pointer(&**self)
	}

	fn reflect_mut(&mut self) -> ReflectMut<'_> {
		ReflectMut::Pointer(&mut **self)
	}

	fn assign(&mut self, value: &dyn Reflect) -> bool {
		assign_exact(self, value)
	}
}

impl<T: Typed> IntoResults for Box<T> {
	fn result_types() -> Vec<TypeDesc> {
		vec![<Self as Typed>::descriptor()]
	}

	fn into_results(self) -> Vec<Box<dyn Reflect>> {
		vec![Box::new(self) as Box<dyn Reflect>]
	}
}

macro_rules! tuple_results {
	($($name:ident . $idx:tt),+) => {
		impl<$($name: Typed),+> IntoResults for ($($name,)+) {
			fn result_types() -> Vec<TypeDesc> {
				vec![$($name::descriptor()),+]
			}

			fn into_results(self) -> Vec<Box<dyn Reflect>> {
				vec![$(Box::new(self.$idx) as Box<dyn Reflect>),+]
			}
		}
	};
}

tuple_results!(A.0, B.1);
tuple_results!(A.0, B.1, C.2);
