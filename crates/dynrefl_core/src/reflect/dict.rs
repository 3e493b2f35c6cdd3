use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde_json::{Map, Value as JsonValue};

use crate::reflect::{IntoResults, Kind, Reflect, ReflectError, ReflectMut, ReflectRef, Result, TypeDesc, Typed, assign_exact};

/// String-keyed dictionary of untyped reflected values.
///
/// A `Dict` is itself reflected (kind [`Kind::Map`]), so dictionaries nest.
#[derive(Debug, Default)]
pub struct Dict {
	entries: BTreeMap<String, Box<dyn Reflect>>,
}

impl Dict {
	/// Empty dictionary.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert.
	pub fn with(mut self, key: impl Into<String>, value: impl Reflect) -> Self {
		self.insert(key, value);
		self
	}

	/// Insert a value, returning the previous one under `key`.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Reflect) -> Option<Box<dyn Reflect>> {
		self.insert_boxed(key, Box::new(value))
	}

	/// Insert an already boxed value.
	pub fn insert_boxed(&mut self, key: impl Into<String>, value: Box<dyn Reflect>) -> Option<Box<dyn Reflect>> {
		self.entries.insert(key.into(), value)
	}

	/// Value stored under `key` (exact, case-sensitive match).
	pub fn get(&self, key: &str) -> Option<&dyn Reflect> {
		self.entries.get(key).map(|value| &**value)
	}

	/// Remove and return the value under `key`.
	pub fn remove(&mut self, key: &str) -> Option<Box<dyn Reflect>> {
		self.entries.remove(key)
	}

	/// Whether `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the dictionary has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entries in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Reflect)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), &**value))
	}

	/// Build a dictionary from a JSON object.
	///
	/// Integers become `i64` (or `u64` above `i64::MAX`), other numbers `f64`, strings
	/// `String`, and objects nested dictionaries. `null` entries are dropped. Arrays, or a
	/// root that is not an object, are rejected.
	pub fn from_json(value: &JsonValue) -> Result<Self> {
		match value {
			JsonValue::Object(map) => Self::from_json_map(map),
			other => Err(ReflectError::UnsupportedJson {
				key: String::new(),
				found: json_kind(other),
			}),
		}
	}

	fn from_json_map(map: &Map<String, JsonValue>) -> Result<Self> {
		let mut out = Self::new();
		for (key, item) in map {
			let value: Box<dyn Reflect> = match item {
				JsonValue::Null => continue,
				JsonValue::Bool(v) => Box::new(*v),
				JsonValue::Number(n) => {
					if let Some(v) = n.as_i64() {
						Box::new(v)
					} else if let Some(v) = n.as_u64() {
						Box::new(v)
					} else {
						Box::new(n.as_f64().unwrap_or_default())
					}
				}
				JsonValue::String(v) => Box::new(v.clone()),
				JsonValue::Object(inner) => Box::new(Self::from_json_map(inner)?),
				JsonValue::Array(_) => {
					return Err(ReflectError::UnsupportedJson {
						key: key.clone(),
						found: "array",
					});
				}
			};
			out.entries.insert(key.clone(), value);
		}
		Ok(out)
	}
}

fn json_kind(value: &JsonValue) -> &'static str {
	match value {
		JsonValue::Null => "null",
		JsonValue::Bool(_) => "bool",
		JsonValue::Number(_) => "number",
		JsonValue::String(_) => "string",
		JsonValue::Array(_) => "array",
		JsonValue::Object(_) => "object",
	}
}

impl Clone for Dict {
	fn clone(&self) -> Self {
		Self {
			entries: self.entries.iter().map(|(key, value)| (key.clone(), value.clone_value())).collect(),
		}
	}
}

impl FromIterator<(String, Box<dyn Reflect>)> for Dict {
	fn from_iter<I: IntoIterator<Item = (String, Box<dyn Reflect>)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl Typed for Dict {
	fn descriptor() -> TypeDesc {
		static DESC: OnceLock<TypeDesc> = OnceLock::new();
		DESC.get_or_init(|| TypeDesc::leaf::<Self>("Dict", Kind::Map)).clone()
	}

	fn zero() -> Option<Self> {
		Some(Self::new())
	}
}

impl Reflect for Dict {
	fn type_desc(&self) -> TypeDesc {
		<Self as Typed>::descriptor()
	}

	fn clone_value(&self) -> Box<dyn Reflect> {
		Box::new(self.clone())
	}

	fn reflect_ref(&self) -> ReflectRef<'_> {
		ReflectRef::Map(self)
	}

	fn reflect_mut(&mut self) -> ReflectMut<'_> {
		ReflectMut::Map(self)
	}

	fn assign(&mut self, value: &dyn Reflect) -> bool {
		assign_exact(self, value)
	}
}

impl IntoResults for Dict {
	fn result_types() -> Vec<TypeDesc> {
		vec![<Self as Typed>::descriptor()]
	}

	fn into_results(self) -> Vec<Box<dyn Reflect>> {
		vec![Box::new(self) as Box<dyn Reflect>]
	}
}

#[cfg(test)]
mod tests;
