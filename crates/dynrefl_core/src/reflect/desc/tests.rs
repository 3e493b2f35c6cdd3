mod type_descriptors {

	use serde_json::json;

	use crate::reflect::{Dict, Func, Kind, Reflect, Typed};

	crate::reflect_struct! {
		#[derive(Debug, Clone, Default)]
		pub struct Sensor {
			pub id: u16,
			pub reading: Box<f32>,
			calibration: f64,
		}
	}

	#[test]
	fn equality_is_exact_type_identity() {
		assert_eq!(i64::descriptor(), 7_i64.type_desc());
		assert_ne!(i64::descriptor(), i32::descriptor());
		assert_ne!(<Box<i64>>::descriptor(), i64::descriptor());
		assert_eq!(<Box<i64>>::descriptor().elem(), Some(i64::descriptor()));
		assert_eq!(i64::descriptor().elem(), None);
	}

	#[test]
	fn display_names_are_readable() {
		assert_eq!(String::descriptor().to_string(), "String");
		assert_eq!(<Box<Box<u8>>>::descriptor().to_string(), "Box<Box<u8>>");
		assert_eq!(Dict::descriptor().kind(), Kind::Map);
		let func = Func::new(|a: String, b: Box<Sensor>| b.id as usize + a.len());
		assert_eq!(func.type_desc().to_string(), "fn(String, Box<Sensor>) -> usize");
		assert_eq!(func.signature().params().len(), 2);
		assert_eq!(func.signature().results(), &[usize::descriptor()]);
	}

	#[test]
	fn schema_serializes_fields() {
		let schema = serde_json::to_value(Sensor::descriptor().schema()).expect("schema serializes");
		assert_eq!(schema["name"], json!("Sensor"));
		assert_eq!(schema["kind"], json!("struct"));
		assert_eq!(
			schema["fields"],
			json!([
				{ "name": "id", "type": "u16", "kind": "uint16", "public": true },
				{ "name": "reading", "type": "Box<f32>", "kind": "pointer", "public": true },
				{ "name": "calibration", "type": "f64", "kind": "float64", "public": false }
			])
		);

		let scalar = serde_json::to_value(bool::descriptor().schema()).expect("schema serializes");
		assert_eq!(scalar, json!({ "name": "bool", "module": "", "kind": "bool" }));
	}

	#[test]
	fn kind_labels_match_serialization() {
		for kind in [Kind::Invalid, Kind::Float32, Kind::Pointer, Kind::Map] {
			assert_eq!(serde_json::to_value(kind).expect("kind serializes"), json!(kind.as_str()));
		}
	}

	#[test]
	fn descriptors_are_built_once_per_type() {
		let first = Sensor::descriptor();
		let second = Sensor::default().type_desc();
		assert!(std::sync::Arc::ptr_eq(&first.inner, &second.inner), "record descriptor is cached");

		let (a, b) = (i64::descriptor(), 5_i64.type_desc());
		assert!(std::sync::Arc::ptr_eq(&a.inner, &b.inner), "scalar descriptor is cached");
		assert!(!std::sync::Arc::ptr_eq(&a.inner, &i32::descriptor().inner), "each type has its own cache");
	}
}
