//! Runtime reflection helpers for values whose static type is erased.
//!
//! Provides type descriptors, dynamic function invocation with exact-type argument
//! checks, an instance factory, a structured value wrapper, and a mapper from
//! string-keyed dictionaries onto record fields.

/// Reflection substrate and the helper groups built on top of it.
pub mod reflect;
