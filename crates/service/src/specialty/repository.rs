use async_trait::async_trait;

use super::domain::{Specialty, SpecialtyCreate, SpecialtyUpdate};
use crate::errors::ServiceError;

/// Repository abstraction for specialty persistence.
///
/// Mutations report a missing id through `None` / `false` and leave the
/// error policy to the service.
#[async_trait]
pub trait SpecialtyRepository: Send + Sync {
    async fn list_active(&self) -> Result<Vec<Specialty>, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<Specialty>, ServiceError>;
    async fn insert(&self, input: &SpecialtyCreate) -> Result<Specialty, ServiceError>;
    async fn replace(&self, id: i32, input: &SpecialtyCreate) -> Result<Option<Specialty>, ServiceError>;
    async fn patch(&self, id: i32, input: &SpecialtyUpdate) -> Result<Option<Specialty>, ServiceError>;
    async fn deactivate(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i32, Specialty>,
        last_id: i32,
    }

    #[derive(Default)]
    pub struct MockSpecialtyRepository {
        state: Mutex<State>,
        failing: bool,
    }

    impl MockSpecialtyRepository {
        /// Every call fails with a database error.
        pub fn failing() -> Self {
            Self { failing: true, ..Self::default() }
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.failing {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl SpecialtyRepository for MockSpecialtyRepository {
        async fn list_active(&self) -> Result<Vec<Specialty>, ServiceError> {
            self.check()?;
            let state = self.state.lock().unwrap();
            Ok(state.rows.values().filter(|s| s.is_active).cloned().collect())
        }

        async fn find(&self, id: i32) -> Result<Option<Specialty>, ServiceError> {
            self.check()?;
            let state = self.state.lock().unwrap();
            Ok(state.rows.get(&id).cloned())
        }

        async fn insert(&self, input: &SpecialtyCreate) -> Result<Specialty, ServiceError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            state.last_id += 1;
            let row = Specialty {
                id: state.last_id,
                name: input.name.clone(),
                descriptions: input.descriptions.clone(),
                is_active: input.is_active,
            };
            state.rows.insert(row.id, row.clone());
            Ok(row)
        }

        async fn replace(&self, id: i32, input: &SpecialtyCreate) -> Result<Option<Specialty>, ServiceError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            Ok(state.rows.get_mut(&id).map(|row| {
                row.name = input.name.clone();
                row.descriptions = input.descriptions.clone();
                row.is_active = input.is_active;
                row.clone()
            }))
        }

        async fn patch(&self, id: i32, input: &SpecialtyUpdate) -> Result<Option<Specialty>, ServiceError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            Ok(state.rows.get_mut(&id).map(|row| {
                input.apply_to(row);
                row.clone()
            }))
        }

        async fn deactivate(&self, id: i32) -> Result<bool, ServiceError> {
            self.check()?;
            let mut state = self.state.lock().unwrap();
            match state.rows.get_mut(&id) {
                Some(row) => {
                    row.is_active = false;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }
}
