//! Shared fixture records and callables for workspace tests.

use dynrefl::reflect::{Dict, Func};

dynrefl::reflect_struct! {
	/// Postal address nested inside [`User`].
	#[derive(Debug, Clone, Default, PartialEq)]
	pub struct Address {
		/// Street line.
		pub street: String,
		/// City name.
		pub city: String,
		/// Postal code.
		pub zip: u32,
	}
}

dynrefl::reflect_struct! {
	/// Account record with one nested record and one hidden field.
	#[derive(Debug, Clone, Default, PartialEq)]
	pub struct User {
		/// Display name.
		pub name: String,
		/// Contact email.
		pub email: String,
		/// Age in years.
		pub age: u32,
		/// Whether the account is enabled.
		pub active: bool,
		/// Home address.
		pub address: Address,
		password: String,
	}
}

impl User {
	/// Hidden field, readable for assertions.
	pub fn password(&self) -> &str {
		&self.password
	}

	/// Set the hidden field.
	pub fn with_password(mut self, password: &str) -> Self {
		password.clone_into(&mut self.password);
		self
	}
}

/// Fully populated user with no nested zero values.
pub fn sample_user() -> User {
	User {
		name: "Ada Lovelace".to_owned(),
		email: "ada@example.com".to_owned(),
		age: 36,
		active: true,
		address: Address {
			street: "12 St James's Square".to_owned(),
			city: "London".to_owned(),
			zip: 10001,
		},
		password: String::new(),
	}
}

/// JSON payload matching [`sample_user`].
pub fn sample_user_json() -> serde_json::Value {
	serde_json::json!({
		"name": "Ada Lovelace",
		"email": "ada@example.com",
		"age": 36,
		"active": true,
		"address": {
			"street": "12 St James's Square",
			"city": "London",
			"zip": 10001
		}
	})
}

/// Build a dictionary from a JSON literal, panicking on unsupported payloads.
pub fn dict(value: serde_json::Value) -> Dict {
	Dict::from_json(&value).expect("fixture json converts to a dictionary")
}

/// `fn(i64, i64) -> i64` that adds its arguments.
pub fn adder() -> Func {
	Func::new(|a: i64, b: i64| a + b)
}

/// `fn(User) -> String` that formats a greeting.
pub fn greeter() -> Func {
	Func::new(|user: User| format!("hello, {}", user.name))
}
