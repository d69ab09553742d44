//! Specialty module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::{Specialty, SpecialtyCreate, SpecialtyUpdate};
pub use repository::SpecialtyRepository;
pub use seaorm::SeaOrmSpecialtyRepository;
pub use service::{SpecialtyConfig, SpecialtyService};
