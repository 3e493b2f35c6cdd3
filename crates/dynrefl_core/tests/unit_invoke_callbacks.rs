#![allow(missing_docs)]

use dynrefl::reflect::{Reflect, ReflectError, check_and_call_function, check_function, unchecked_call_function, value_of};
use dynrefl_testkit::{User, adder, greeter, sample_user};

#[test]
fn validate_and_invoke_matches_direct_call() {
	let func = adder();
	for (a, b) in [(3_i64, 4_i64), (-10, 10), (i64::MAX - 1, 1)] {
		let results = check_and_call_function(Some(&func), &[&a, &b]).expect("call succeeds");
		assert_eq!(results.len(), 1);
		assert_eq!(results[0].downcast_ref::<i64>(), Some(&(a + b)));
	}
}

#[test]
fn record_arguments_are_passed_by_value() {
	let func = greeter();
	let user = sample_user();
	let results = check_and_call_function(Some(&func), &[&user]).expect("call succeeds");
	let greeting = results.into_iter().next().and_then(|value| value.take::<String>());
	assert_eq!(greeting.as_deref(), Some("hello, Ada Lovelace"));
	assert_eq!(user, sample_user(), "caller's value is untouched");
}

#[test]
fn pointer_argument_is_not_its_pointee() {
	let func = greeter();
	let boxed = Box::new(User::default());
	let err = check_function(Some(&func), &[&boxed]).expect_err("Box<User> is not User");
	assert_eq!(
		err,
		ReflectError::ParameterTypeMismatch {
			index: 0,
			expected: "User".to_owned(),
			got: "Box<User>".to_owned(),
		}
	);
}

#[test]
fn one_validation_serves_a_loop_of_calls() {
	let func = adder();
	let callable = check_function(Some(&func), &[&0_i64, &0_i64]).expect("signature matches");
	let mut total = 0_i64;
	for value in (10..=30_i64).step_by(10) {
		let results = unchecked_call_function(callable.func(), &[value_of(Some(&value)), value_of(Some(&total))]).expect("call succeeds");
		total = results[0].downcast_ref::<i64>().copied().expect("adder returns i64");
	}
	assert_eq!(total, 60);
}

#[test]
fn validation_rejects_surplus_arguments() {
	let func = adder();
	let err = check_function(Some(&func), &[&1_i64, &2_i64, &3_i64]).expect_err("adder takes two");
	assert_eq!(err, ReflectError::ParameterCountMismatch { expected: 2, got: 3 });
}

#[test]
fn unchecked_call_still_reports_wrong_arity() {
	let func = adder();
	let err = unchecked_call_function(value_of(Some(&func)), &[value_of(Some(&1_i64))]).expect_err("one argument short");
	assert_eq!(err, ReflectError::ParameterCountMismatch { expected: 2, got: 1 });
}

#[test]
fn results_expose_their_types() {
	let func = adder();
	let results = check_and_call_function(Some(&func), &[&1_i64, &2_i64]).expect("call succeeds");
	assert_eq!(results[0].type_desc(), func.signature().results()[0]);
}
