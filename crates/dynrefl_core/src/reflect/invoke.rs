use crate::reflect::{Reflect, ReflectError, ReflectRef, Result, ValueRef, value_of};

/// Callable handle and argument handles that passed [`check_function`].
///
/// Keep one around to call the same function repeatedly without re-validating.
#[derive(Debug, Clone)]
pub struct CallableDesc<'a> {
	func: ValueRef<'a>,
	args: Vec<ValueRef<'a>>,
}

impl<'a> CallableDesc<'a> {
	/// Handle to the validated callable.
	pub fn func(&self) -> ValueRef<'a> {
		self.func
	}

	/// Handles to the validated arguments, in call order.
	pub fn args(&self) -> &[ValueRef<'a>] {
		&self.args
	}
}

/// Validate `candidate` against `args`: it must be callable, take exactly `args.len()`
/// parameters, and each argument's type must equal the declared parameter type exactly.
pub fn check_function<'a>(candidate: Option<&'a dyn Reflect>, args: &[&'a dyn Reflect]) -> Result<CallableDesc<'a>> {
	let func = value_of(candidate);
	let Some(ReflectRef::Func(callable)) = func.get().map(|value| value.reflect_ref()) else {
		return Err(ReflectError::NotAFunction);
	};

	let params = callable.signature().params();
	if params.len() != args.len() {
		return Err(ReflectError::ParameterCountMismatch {
			expected: params.len(),
			got: args.len(),
		});
	}

	for (index, (arg, param)) in args.iter().zip(params).enumerate() {
		let got = arg.type_desc();
		if got != *param {
			return Err(ReflectError::ParameterTypeMismatch {
				index,
				expected: param.to_string(),
				got: got.to_string(),
			});
		}
	}

	Ok(CallableDesc {
		func,
		args: args.iter().map(|arg| value_of(Some(*arg))).collect(),
	})
}

/// Invoke a validated callable. Results come back in declaration order.
pub fn call_function(callable: &CallableDesc<'_>) -> Result<Vec<Box<dyn Reflect>>> {
	unchecked_call_function(callable.func, &callable.args)
}

/// Invoke `func` with `args` without validating the signature first.
///
/// Fails with [`ReflectError::NilFunctionValue`] for the empty handle. Arguments are copied
/// before the call; a mismatch found while unpacking them surfaces as the matching typed error.
pub fn unchecked_call_function(func: ValueRef<'_>, args: &[ValueRef<'_>]) -> Result<Vec<Box<dyn Reflect>>> {
	let Some(value) = func.get() else {
		return Err(ReflectError::NilFunctionValue);
	};
	let ReflectRef::Func(callable) = value.reflect_ref() else {
		return Err(ReflectError::NotAFunction);
	};

	let params = callable.signature().params();
	let mut owned = Vec::with_capacity(args.len());
	for (index, arg) in args.iter().enumerate() {
		let Some(arg) = arg.get() else {
			return Err(ReflectError::ParameterTypeMismatch {
				index,
				expected: params.get(index).map(ToString::to_string).unwrap_or_default(),
				got: "invalid".to_owned(),
			});
		};
		owned.push(arg.clone_value());
	}

	callable.call(owned)
}

/// Validate then invoke; the entry point most callers need.
pub fn check_and_call_function(candidate: Option<&dyn Reflect>, args: &[&dyn Reflect]) -> Result<Vec<Box<dyn Reflect>>> {
	let callable = check_function(candidate, args)?;
	call_function(&callable)
}
