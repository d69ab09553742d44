use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "specialties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(nullable)]
    pub descriptions: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    descriptions: Option<&str>,
    is_active: bool,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        name: Set(name.to_string()),
        descriptions: Set(descriptions.map(str::to_string)),
        is_active: Set(is_active),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Every row with `is_active = true`, lowest id first.
pub async fn find_active<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .filter(Column::IsActive.eq(true))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Flip the active flag; the row itself is kept.
pub async fn set_active<C: ConnectionTrait>(db: &C, id: i32, is_active: bool) -> Result<Model, ModelError> {
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ModelError::NotFound("specialty".into()))?
        .into();
    found.is_active = Set(is_active);
    Ok(found.update(db).await?)
}
