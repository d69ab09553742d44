use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Specialty, SpecialtyCreate, SpecialtyUpdate};
use super::repository::SpecialtyRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "specialty";

/// Specialty service configuration
#[derive(Debug, Clone)]
pub struct SpecialtyConfig {
    /// Report an empty active list as not found instead of returning `[]`.
    pub empty_list_not_found: bool,
}

impl Default for SpecialtyConfig {
    fn default() -> Self { Self { empty_list_not_found: true } }
}

/// Specialty business service independent of web framework.
pub struct SpecialtyService<R: SpecialtyRepository + ?Sized> {
    repo: Arc<R>,
    cfg: SpecialtyConfig,
}

impl<R: SpecialtyRepository + ?Sized> SpecialtyService<R> {
    pub fn new(repo: Arc<R>, cfg: SpecialtyConfig) -> Self { Self { repo, cfg } }

    /// All active specialties.
    ///
    /// # Examples
    /// ```
    /// use service::specialty::{repository::mock::MockSpecialtyRepository, SpecialtyConfig, SpecialtyCreate, SpecialtyService};
    /// use std::sync::Arc;
    /// let svc = SpecialtyService::new(Arc::new(MockSpecialtyRepository::default()), SpecialtyConfig::default());
    /// assert!(tokio_test::block_on(svc.list_active()).unwrap_err().is_not_found());
    /// tokio_test::block_on(svc.create(SpecialtyCreate::new("Cardiology"))).unwrap();
    /// assert_eq!(tokio_test::block_on(svc.list_active()).unwrap().len(), 1);
    /// ```
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<Specialty>, ServiceError> {
        let rows = self.repo.list_active().await?;
        debug!(count = rows.len(), "specialties_listed");
        if rows.is_empty() && self.cfg.empty_list_not_found {
            return Err(ServiceError::not_found(ENTITY));
        }
        Ok(rows)
    }

    /// Fetch by id, active or not.
    pub async fn get(&self, id: i32) -> Result<Specialty, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: SpecialtyCreate) -> Result<Specialty, ServiceError> {
        let created = self.repo.insert(&input).await?;
        info!(id = created.id, is_active = created.is_active, "specialty_created");
        Ok(created)
    }

    /// Full replacement: every mutable field takes the input's value.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn replace(&self, id: i32, input: SpecialtyCreate) -> Result<Specialty, ServiceError> {
        let updated = self.repo.replace(id, &input).await?.ok_or_else(|| ServiceError::not_found(ENTITY))?;
        info!(id, "specialty_replaced");
        Ok(updated)
    }

    /// Merge update: only supplied fields change.
    #[instrument(skip(self, input))]
    pub async fn patch(&self, id: i32, input: SpecialtyUpdate) -> Result<Specialty, ServiceError> {
        let updated = self.repo.patch(id, &input).await?.ok_or_else(|| ServiceError::not_found(ENTITY))?;
        info!(id, "specialty_patched");
        Ok(updated)
    }

    /// Soft delete: clears `is_active`, keeps the row.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.deactivate(id).await? {
            return Err(ServiceError::not_found(ENTITY));
        }
        info!(id, "specialty_deactivated");
        Ok(())
    }
}
