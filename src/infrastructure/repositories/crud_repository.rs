//! SeaORM implementation of CrudRepository, shared by every resource

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, Value,
};

use crate::domain::{CrudRepository, DomainError};

/// Table metadata the generic repository is instantiated with.
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + From<Self::Input>
        + Send
        + Sync
        + 'static;
    type Item: From<Self::Model> + Send + 'static;
    type Input: Send + 'static;

    /// Table name, used in log lines.
    const TABLE: &'static str;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn id_of(model: &Self::Model) -> i32;
}

/// SeaORM-based implementation of CrudRepository for any [`Resource`]
pub struct SeaOrmRepository<R> {
    db: DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> SeaOrmRepository<R> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    async fn find_model(&self, id: i32) -> Result<Option<R::Model>, DomainError> {
        let model = R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(&self.db)
            .await?;
        Ok(model)
    }
}

#[async_trait]
impl<R: Resource> CrudRepository for SeaOrmRepository<R> {
    type Item = R::Item;
    type Input = R::Input;

    async fn find_all(&self) -> Result<Vec<R::Item>, DomainError> {
        let models = R::Entity::find()
            .order_by_asc(R::id_column())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(R::Item::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<R::Item>, DomainError> {
        Ok(self.find_model(id).await?.map(R::Item::from))
    }

    async fn create(&self, input: R::Input) -> Result<R::Item, DomainError> {
        let inserted = R::ActiveModel::from(input).insert(&self.db).await?;
        let id = R::id_of(&inserted);

        // Re-read so values written by triggers (the student RA) are included
        let stored = self.find_model(id).await?.ok_or_else(|| {
            DomainError::Internal(format!("{} {} vanished after insert", R::TABLE, id))
        })?;

        tracing::info!("Inserted {} row {}", R::TABLE, id);
        Ok(R::Item::from(stored))
    }

    async fn update(&self, id: i32, input: R::Input) -> Result<R::Item, DomainError> {
        if self.find_model(id).await?.is_none() {
            return Err(DomainError::NotFound);
        }

        let mut active = R::ActiveModel::from(input);
        active.set(R::id_column(), Value::from(id));
        let updated = active.update(&self.db).await?;

        tracing::info!("Updated {} row {}", R::TABLE, id);
        Ok(R::Item::from(updated))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = R::Entity::delete_many()
            .filter(R::id_column().eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        tracing::info!("Deleted {} row {}", R::TABLE, id);
        Ok(())
    }
}
