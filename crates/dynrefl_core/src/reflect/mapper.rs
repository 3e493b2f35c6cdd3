use crate::reflect::{Dict, Reflect, ReflectError, ReflectMut, ReflectRef, Result};

/// Copy dictionary entries onto the exported fields of `destination`.
///
/// `destination` may be a record or a pointer (`Box<T>`) to one. Fields are visited in
/// declaration order:
/// - non-exported fields and fields without a matching key (exact, case-sensitive) are skipped;
/// - record fields recurse when the entry is itself a [`Dict`], and are left untouched otherwise;
/// - any other field takes the entry, converted to the field type.
///
/// The first failure aborts the whole call. Fields assigned before the failure keep their new
/// values. The mapper takes no locks; callers sharing `destination` across threads must
/// synchronize themselves.
pub fn map_to_struct(dict: &Dict, destination: &mut dyn Reflect) -> Result<()> {
	if let ReflectMut::Pointer(inner) = destination.reflect_mut() {
		return map_fields(dict, inner);
	}
	map_fields(dict, destination)
}

fn map_fields(dict: &Dict, target: &mut dyn Reflect) -> Result<()> {
	let desc = target.type_desc();
	if !desc.is_struct() {
		return Err(ReflectError::NotAStruct {
			type_name: desc.to_string(),
		});
	}

	for field in desc.fields() {
		if !field.is_public() {
			continue;
		}
		let Some(value) = dict.get(field.name()) else {
			continue;
		};
		let Some(slot) = target.field_mut(field.name()) else {
			continue;
		};

		let field_type = field.ty();
		if field_type.is_struct() {
			if let ReflectRef::Map(nested) = value.reflect_ref() {
				map_fields(nested, slot)?;
			}
			continue;
		}

		if !slot.assign(value) {
			return Err(ReflectError::Conversion {
				field: field.name().to_owned(),
				from: value.type_desc().to_string(),
				to: field_type.to_string(),
			});
		}
	}

	Ok(())
}

/// Collect the exported fields of a record (or pointer to one) into a [`Dict`].
///
/// Record fields become nested dictionaries, so the result maps back through [`map_to_struct`].
pub fn struct_to_dict(source: &dyn Reflect) -> Result<Dict> {
	let source = match source.reflect_ref() {
		ReflectRef::Pointer(inner) => inner,
		_ => source,
	};
	let desc = source.type_desc();
	if !desc.is_struct() {
		return Err(ReflectError::NotAStruct {
			type_name: desc.to_string(),
		});
	}

	let mut out = Dict::new();
	for field in desc.fields().iter().filter(|field| field.is_public()) {
		let Some(value) = source.field(field.name()) else {
			continue;
		};
		let value = if field.ty().is_struct() {
			Box::new(struct_to_dict(value)?) as Box<dyn Reflect>
		} else {
			value.clone_value()
		};
		out.insert_boxed(field.name(), value);
	}
	Ok(out)
}
