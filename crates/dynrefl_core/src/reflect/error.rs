use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ReflectError>;

/// Errors produced while inspecting, invoking, or mapping reflected values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
	/// Candidate callable is not invokable.
	#[error("not a function")]
	NotAFunction,
	/// Unchecked invocation was handed an empty callable handle.
	#[error("nil function value")]
	NilFunctionValue,
	/// Supplied argument count differs from the declared parameter count.
	#[error("function parameter count mismatch, expected {expected}, got {got}")]
	ParameterCountMismatch {
		/// Declared parameter count.
		expected: usize,
		/// Supplied argument count.
		got: usize,
	},
	/// Argument type at `index` is not exactly the declared parameter type.
	#[error("function parameter type mismatch on index {index}, expected {expected}, got {got}")]
	ParameterTypeMismatch {
		/// Zero-based argument position.
		index: usize,
		/// Declared parameter type.
		expected: String,
		/// Supplied argument type.
		got: String,
	},
	/// Mapping destination is not a record after one level of dereferencing.
	#[error("destination is not a struct (got {type_name})")]
	NotAStruct {
		/// Display name of the rejected destination type.
		type_name: String,
	},
	/// Dictionary value cannot be converted to the field's declared type.
	#[error("cannot convert {from} to {to} for field {field}")]
	Conversion {
		/// Destination field name.
		field: String,
		/// Source value type.
		from: String,
		/// Declared field type.
		to: String,
	},
	/// Descriptor has no zero value to allocate.
	#[error("type {type_name} cannot be instantiated")]
	NotConstructible {
		/// Display name of the rejected type.
		type_name: String,
	},
	/// JSON payload holds a value with no reflected counterpart.
	#[error("unsupported json value at {key:?}: {found}")]
	UnsupportedJson {
		/// Offending key, empty for the document root.
		key: String,
		/// JSON value category that was found.
		found: &'static str,
	},
}
