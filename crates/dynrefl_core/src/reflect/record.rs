/// Declare a record and implement [`Reflect`](crate::reflect::Reflect),
/// [`Typed`](crate::reflect::Typed), and [`IntoResults`](crate::reflect::IntoResults) for it.
///
/// The record must derive `Clone`, `Debug`, and `Default`, and every field type must itself
/// be [`Typed`](crate::reflect::Typed). Fields declared plain `pub` are exported; any other
/// visibility hides the field from name lookup and dictionary mapping.
///
/// ```
/// dynrefl::reflect_struct! {
/// 	#[derive(Debug, Clone, Default)]
/// 	pub struct Point {
/// 		pub x: i64,
/// 		pub y: i64,
/// 	}
/// }
///
/// use dynrefl::reflect::Reflect;
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(point.type_desc().name(), "Point");
/// assert_eq!(point.type_desc().fields().len(), 2);
/// ```
#[macro_export]
macro_rules! reflect_struct {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$fmeta:meta])*
				$fvis:vis $field:ident : $fty:ty
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		$vis struct $name {
			$(
				$(#[$fmeta])*
				$fvis $field: $fty,
			)*
		}

		impl $crate::reflect::Typed for $name {
			fn descriptor() -> $crate::reflect::TypeDesc {
				static DESC: ::std::sync::OnceLock<$crate::reflect::TypeDesc> = ::std::sync::OnceLock::new();
				DESC.get_or_init(|| {
					$crate::reflect::TypeDesc::record::<Self>(
						stringify!($name),
						module_path!(),
						::std::vec![$(
							$crate::reflect::FieldDesc::new(
								stringify!($field),
								$crate::reflect::is_exported(stringify!($fvis)),
								<$fty as $crate::reflect::Typed>::descriptor,
							)
						),*],
					)
				})
				.clone()
			}

			fn zero() -> ::core::option::Option<Self> {
				::core::option::Option::Some(<Self as ::core::default::Default>::default())
			}
		}

		impl $crate::reflect::Reflect for $name {
			fn type_desc(&self) -> $crate::reflect::TypeDesc {
				<Self as $crate::reflect::Typed>::descriptor()
			}

			fn clone_value(&self) -> ::std::boxed::Box<dyn $crate::reflect::Reflect> {
				::std::boxed::Box::new(::core::clone::Clone::clone(self))
			}

			fn reflect_ref(&self) -> $crate::reflect::ReflectRef<'_> {
				$crate::reflect::ReflectRef::Struct
			}

			fn reflect_mut(&mut self) -> $crate::reflect::ReflectMut<'_> {
				$crate::reflect::ReflectMut::Struct
			}

			fn assign(&mut self, value: &dyn $crate::reflect::Reflect) -> bool {
				$crate::reflect::assign_exact(self, value)
			}

			#[allow(unused_variables)]
			fn field(&self, name: &str) -> ::core::option::Option<&dyn $crate::reflect::Reflect> {
				$(
					if name == stringify!($field) {
						return ::core::option::Option::Some(&self.$field as &dyn $crate::reflect::Reflect);
					}
				)*
				::core::option::Option::None
			}

			#[allow(unused_variables)]
			fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn $crate::reflect::Reflect> {
				$(
					if name == stringify!($field) {
						return ::core::option::Option::Some(&mut self.$field as &mut dyn $crate::reflect::Reflect);
					}
				)*
				::core::option::Option::None
			}
		}

		impl $crate::reflect::IntoResults for $name {
			fn result_types() -> ::std::vec::Vec<$crate::reflect::TypeDesc> {
				::std::vec![<Self as $crate::reflect::Typed>::descriptor()]
			}

			fn into_results(self) -> ::std::vec::Vec<::std::boxed::Box<dyn $crate::reflect::Reflect>> {
				::std::vec![::std::boxed::Box::new(self) as ::std::boxed::Box<dyn $crate::reflect::Reflect>]
			}
		}
	};
}

/// Whether a stringified field visibility marks the field as exported.
#[doc(hidden)]
pub fn is_exported(vis: &str) -> bool {
	vis == "pub"
}
