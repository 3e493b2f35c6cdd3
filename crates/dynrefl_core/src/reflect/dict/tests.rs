mod dictionary {

	use serde_json::json;

	use crate::reflect::{Dict, Kind, Reflect, ReflectError, ReflectRef};

	#[test]
	fn from_json_maps_scalars_and_nested_objects() {
		let dict = Dict::from_json(&json!({
			"name": "ada",
			"age": 36,
			"score": 9.5,
			"big": u64::MAX,
			"active": true,
			"missing": null,
			"address": { "city": "london" }
		}))
		.expect("object converts");

		assert_eq!(dict.len(), 6, "null entries are dropped");
		assert!(!dict.contains_key("missing"), "null entries are dropped");
		assert_eq!(dict.get("name").and_then(|v| v.downcast_ref::<String>()).map(String::as_str), Some("ada"));
		assert_eq!(dict.get("age").and_then(|v| v.downcast_ref::<i64>()), Some(&36));
		assert_eq!(dict.get("score").and_then(|v| v.downcast_ref::<f64>()), Some(&9.5));
		assert_eq!(dict.get("big").and_then(|v| v.downcast_ref::<u64>()), Some(&u64::MAX));
		assert_eq!(dict.get("active").and_then(|v| v.downcast_ref::<bool>()), Some(&true));

		let address = dict.get("address").expect("nested object");
		assert_eq!(address.type_desc().kind(), Kind::Map);
		let ReflectRef::Map(address) = address.reflect_ref() else {
			panic!("expected nested dictionary");
		};
		assert!(address.contains_key("city"), "nested key kept");
	}

	#[test]
	fn from_json_rejects_arrays_and_non_objects() {
		let err = Dict::from_json(&json!({ "tags": ["a", "b"] })).expect_err("arrays are unsupported");
		assert_eq!(
			err,
			ReflectError::UnsupportedJson {
				key: "tags".to_owned(),
				found: "array",
			}
		);

		let err = Dict::from_json(&json!(42)).expect_err("root must be an object");
		assert_eq!(
			err,
			ReflectError::UnsupportedJson {
				key: String::new(),
				found: "number",
			}
		);
	}

	#[test]
	fn clone_is_deep() {
		let original = Dict::new().with("count", 1_i64).with("inner", Dict::new().with("flag", true));
		let mut copy = original.clone();
		copy.insert("count", 2_i64);

		assert_eq!(original.get("count").and_then(|v| v.downcast_ref::<i64>()), Some(&1));
		assert_eq!(copy.get("count").and_then(|v| v.downcast_ref::<i64>()), Some(&2));
		let keys: Vec<&str> = copy.iter().map(|(key, _)| key).collect();
		assert_eq!(keys, vec!["count", "inner"]);
	}
}
