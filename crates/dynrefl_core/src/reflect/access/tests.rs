mod type_access {

	use crate::reflect::{Func, Kind, Reflect, Typed, dereferenced_type_of, dereferenced_value_of, name_of, type_of, unique_reference, value_of};

	crate::reflect_struct! {
		#[derive(Debug, Clone, Default, PartialEq)]
		pub struct Point {
			pub x: i64,
			pub y: i64,
		}
	}

	crate::reflect_struct! {
		#[derive(Debug, Clone, Default)]
		pub struct Label {
			pub text: String,
		}
	}

	#[test]
	fn absent_value_yields_empty_handle_and_no_type() {
		let handle = value_of(None);
		assert!(!handle.is_valid(), "absent value must give the empty handle");
		assert_eq!(handle.kind(), Kind::Invalid);
		assert!(handle.type_desc().is_none(), "empty handle has no type");
		assert!(type_of(None).is_none(), "absent value has no type");
		assert!(!dereferenced_value_of(None).is_valid(), "dereferencing nothing stays empty");
	}

	#[test]
	fn pointer_is_followed_exactly_one_level() {
		let boxed = Box::new(Box::new(Point { x: 1, y: 2 }));
		let value: &dyn Reflect = &boxed;

		assert_eq!(value_of(Some(value)).kind(), Kind::Pointer);
		let once = dereferenced_value_of(Some(value));
		assert_eq!(once.kind(), Kind::Pointer, "only one level is followed");
		assert_eq!(once.dereferenced().kind(), Kind::Struct);

		let desc = dereferenced_type_of(Some(value)).expect("type present");
		assert_eq!(desc, <Box<Point>>::descriptor());
	}

	#[test]
	fn non_pointer_dereference_is_noop() {
		let point = Point { x: 3, y: 4 };
		let value: &dyn Reflect = &point;

		let handle = dereferenced_value_of(Some(value));
		assert_eq!(handle.kind(), Kind::Struct);
		let inner = handle.get().and_then(|value| value.downcast_ref::<Point>());
		assert_eq!(inner, Some(&point));
		assert_eq!(dereferenced_type_of(Some(value)), type_of(Some(value)));
	}

	#[test]
	fn names_are_declared_and_unqualified() {
		assert_eq!(name_of(&Point::descriptor()), "Point");
		assert_eq!(name_of(&i64::descriptor()), "i64");
		assert_eq!(name_of(&<Box<Point>>::descriptor()), "", "pointer types are unnamed");
		assert_eq!(<Box<Point>>::descriptor().to_string(), "Box<Point>");
	}

	#[test]
	fn unique_reference_is_stable_per_type() {
		let a = Point { x: 1, y: 1 };
		let b = Point { x: 9, y: 9 };
		let boxed = Box::new(Point::default());
		let label = Label::default();

		let key = unique_reference(&a);
		assert_eq!(key, unique_reference(&b), "same type, same key");
		assert_eq!(key, unique_reference(&boxed), "pointer and pointee share the key");
		assert_ne!(key, unique_reference(&label), "different types differ");
		assert!(key.ends_with("type_access.Point"), "key: {key}");
		assert_eq!(unique_reference(&5_i64), ".i64");
	}

	#[test]
	fn unnamed_types_get_distinct_references() {
		let add = Func::new(|a: i64, b: i64| a + b);
		let shout = Func::new(|s: String| s.to_uppercase());
		assert_eq!(unique_reference(&add), ".fn(i64, i64) -> i64");
		assert_eq!(unique_reference(&shout), ".fn(String) -> String");
		assert_ne!(unique_reference(&add), unique_reference(&shout));

		let nested_point = Box::new(Box::new(Point::default()));
		let nested_label = Box::new(Box::new(Label::default()));
		assert_eq!(unique_reference(&nested_point), ".Box<Point>");
		assert_ne!(unique_reference(&nested_point), unique_reference(&nested_label));
	}
}
