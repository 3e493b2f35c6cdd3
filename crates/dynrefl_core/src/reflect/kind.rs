use serde::Serialize;

/// Coarse category of a reflected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
	/// Empty handle; no value and no type.
	Invalid,
	/// `bool`.
	Bool,
	/// `i8`.
	Int8,
	/// `i16`.
	Int16,
	/// `i32`.
	Int32,
	/// `i64`.
	Int64,
	/// `isize`.
	Isize,
	/// `u8`.
	Uint8,
	/// `u16`.
	Uint16,
	/// `u32`.
	Uint32,
	/// `u64`.
	Uint64,
	/// `usize`.
	Usize,
	/// `f32`.
	Float32,
	/// `f64`.
	Float64,
	/// Owned `String`.
	String,
	/// `()`.
	Unit,
	/// Record declared through `reflect_struct!`.
	Struct,
	/// `Box<T>`, one level of indirection.
	Pointer,
	/// Reflected callable.
	Func,
	/// String-keyed dictionary.
	Map,
}

impl Kind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Invalid => "invalid",
			Self::Bool => "bool",
			Self::Int8 => "int8",
			Self::Int16 => "int16",
			Self::Int32 => "int32",
			Self::Int64 => "int64",
			Self::Isize => "isize",
			Self::Uint8 => "uint8",
			Self::Uint16 => "uint16",
			Self::Uint32 => "uint32",
			Self::Uint64 => "uint64",
			Self::Usize => "usize",
			Self::Float32 => "float32",
			Self::Float64 => "float64",
			Self::String => "string",
			Self::Unit => "unit",
			Self::Struct => "struct",
			Self::Pointer => "pointer",
			Self::Func => "func",
			Self::Map => "map",
		}
	}
}
