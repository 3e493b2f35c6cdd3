use std::fmt;
use std::rc::Rc;

use crate::reflect::{IntoResults, Reflect, ReflectError, ReflectMut, ReflectRef, Result, TypeDesc, Typed};

type Thunk = dyn Fn(Vec<Box<dyn Reflect>>) -> Result<Vec<Box<dyn Reflect>>>;

/// Reflected callable: a closure plus the descriptor of its signature.
///
/// The closure lives behind an `Rc`, so a `Func` stays on the thread that built it.
#[derive(Clone)]
pub struct Func {
	signature: TypeDesc,
	thunk: Rc<Thunk>,
}

impl Func {
	/// Wrap a closure whose parameters are [`Typed`] and whose return type is [`IntoResults`].
	pub fn new<F, Marker>(f: F) -> Self
	where
		F: IntoFunc<Marker>,
	{
		f.into_func()
	}

	/// Descriptor of the signature (kind [`Func`](crate::reflect::Kind::Func)).
	pub fn signature(&self) -> &TypeDesc {
		&self.signature
	}

	/// Invoke with owned arguments. Arguments are unpacked in order; the first one whose
	/// concrete type differs from the declared parameter aborts the call.
	pub(crate) fn call(&self, args: Vec<Box<dyn Reflect>>) -> Result<Vec<Box<dyn Reflect>>> {
		(self.thunk)(args)
	}
}

impl fmt::Debug for Func {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Func").field("signature", &self.signature.to_string()).finish_non_exhaustive()
	}
}

impl Reflect for Func {
	fn type_desc(&self) -> TypeDesc {
		self.signature.clone()
	}

	fn clone_value(&self) -> Box<dyn Reflect> {
		Box::new(self.clone())
	}

	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Func(self)
	}

	fn reflect_mut(&mut self) -> ReflectMut<'_> {
		ReflectMut::Leaf
	}

	fn assign(&mut self, value: &dyn Reflect) -> bool {
		match value.downcast_ref::<Self>() {
			Some(other) if other.signature == self.signature => {
				*self = other.clone();
				true
			}
			_ => false,
		}
	}
}

/// Conversion of a closure into a [`Func`]. `Marker` is the closure's `fn` signature.
pub trait IntoFunc<Marker> {
	/// Build the reflected callable.
	fn into_func(self) -> Func;
}

impl<F, R> IntoFunc<fn() -> R> for F
where
	F: Fn() -> R + 'static,
	R: IntoResults,
{
	fn into_func(self) -> Func {
		let signature = TypeDesc::func::<fn() -> R>(Vec::new(), R::result_types());
		let func = self;
		let thunk = move |args: Vec<Box<dyn Reflect>>| -> Result<Vec<Box<dyn Reflect>>> {
			if !args.is_empty() {
				return Err(ReflectError::ParameterCountMismatch { expected: 0, got: args.len() });
			}
			Ok(func().into_results())
		};
		Func {
			signature,
			thunk: Rc::new(thunk),
		}
	}
}

macro_rules! impl_into_func {
	($($arg:ident $var:ident $idx:literal),+) => {
		impl<F, R, $($arg),+> IntoFunc<fn($($arg),+) -> R> for F
		where
			F: Fn($($arg),+) -> R + 'static,
			R: IntoResults,
			$($arg: Typed,)+
		{
			fn into_func(self) -> Func {
				let params = vec![$($arg::descriptor()),+];
				let arity = params.len();
				let signature = TypeDesc::func::<fn($($arg),+) -> R>(params, R::result_types());
				let func = self;
				let thunk = move |args: Vec<Box<dyn Reflect>>| -> Result<Vec<Box<dyn Reflect>>> {
					if args.len() != arity {
						return Err(ReflectError::ParameterCountMismatch {
							expected: arity,
							got: args.len(),
						});
					}
					let mut args = args.into_iter();
					$(let $var = unpack::<$arg>($idx, arity, args.next())?;)+
					Ok(func($($var),+).into_results())
				};
				Func {
					signature,
					thunk: Rc::new(thunk),
				}
			}
		}
	};
}

impl_into_func!(A a 0);
impl_into_func!(A a 0, B b 1);
impl_into_func!(A a 0, B b 1, C c 2);
impl_into_func!(A a 0, B b 1, C c 2, D d 3);

fn unpack<T: Typed>(index: usize, arity: usize, arg: Option<Box<dyn Reflect>>) -> Result<T> {
	let arg = arg.ok_or(ReflectError::ParameterCountMismatch { expected: arity, got: index })?;
	let got = arg.type_desc();
	arg.take::<T>().ok_or_else(|| ReflectError::ParameterTypeMismatch {
		index,
		expected: T::descriptor().to_string(),
		got: got.to_string(),
	})
}
