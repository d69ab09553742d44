//! Service layer providing the specialties operations on top of models.
//! - Separates business rules (not-found policy, soft delete) from data access.
//! - Reuses entity definitions in the `models` crate.
//! - Persistence sits behind the `SpecialtyRepository` trait.

pub mod errors;
pub mod specialty;
#[cfg(test)]
pub mod test_support;

pub use specialty::SpecialtyService;
