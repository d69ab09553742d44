use async_trait::async_trait;
use models::{errors::ModelError, specialty};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, Set, TransactionTrait};

use super::domain::{Specialty, SpecialtyCreate, SpecialtyUpdate};
use super::repository::SpecialtyRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository.
///
/// Each mutation runs in its own transaction. An early return drops the
/// transaction uncommitted, which rolls it back and hands the connection
/// back to the pool. Committed rows are re-read before being returned.
#[derive(Clone)]
pub struct SeaOrmSpecialtyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmSpecialtyRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn begin(&self) -> Result<DatabaseTransaction, ServiceError> {
        Ok(self.db.begin().await?)
    }

    async fn reload(&self, id: i32) -> Result<Specialty, ServiceError> {
        specialty::find(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::Db(format!("specialty {id} missing after commit")))
    }

    async fn load_row(txn: &DatabaseTransaction, id: i32) -> Result<Option<specialty::ActiveModel>, ServiceError> {
        let found = specialty::Entity::find_by_id(id).one(txn).await?;
        Ok(found.map(Into::into))
    }
}

#[async_trait]
impl SpecialtyRepository for SeaOrmSpecialtyRepository {
    async fn list_active(&self) -> Result<Vec<Specialty>, ServiceError> {
        Ok(specialty::find_active(&self.db).await?)
    }

    async fn find(&self, id: i32) -> Result<Option<Specialty>, ServiceError> {
        Ok(specialty::find(&self.db, id).await?)
    }

    async fn insert(&self, input: &SpecialtyCreate) -> Result<Specialty, ServiceError> {
        let txn = self.begin().await?;
        let created = specialty::create(&txn, &input.name, input.descriptions.as_deref(), input.is_active).await?;
        txn.commit().await?;
        self.reload(created.id).await
    }

    async fn replace(&self, id: i32, input: &SpecialtyCreate) -> Result<Option<Specialty>, ServiceError> {
        let txn = self.begin().await?;
        let Some(mut am) = Self::load_row(&txn, id).await? else { return Ok(None) };
        am.name = Set(input.name.clone());
        am.descriptions = Set(input.descriptions.clone());
        am.is_active = Set(input.is_active);
        am.update(&txn).await?;
        txn.commit().await?;
        self.reload(id).await.map(Some)
    }

    async fn patch(&self, id: i32, input: &SpecialtyUpdate) -> Result<Option<Specialty>, ServiceError> {
        let txn = self.begin().await?;
        let Some(mut am) = Self::load_row(&txn, id).await? else { return Ok(None) };
        if !input.is_empty() {
            if let Some(name) = &input.name { am.name = Set(name.clone()); }
            if let Some(d) = &input.descriptions { am.descriptions = Set(Some(d.clone())); }
            if let Some(b) = input.is_active { am.is_active = Set(b); }
            am.update(&txn).await?;
        }
        txn.commit().await?;
        self.reload(id).await.map(Some)
    }

    async fn deactivate(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.begin().await?;
        match specialty::set_active(&txn, id, false).await {
            Ok(_) => {}
            Err(ModelError::NotFound(_)) => return Ok(false),
            Err(e) => return Err(e.into()),
        }
        txn.commit().await?;
        Ok(true)
    }
}
