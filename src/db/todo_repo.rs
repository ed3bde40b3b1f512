use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, Statement,
};

use super::entities::prelude::Todo;
use super::entities::todo;
use super::StorageResult;

/// Partial update applied by [`update`]; absent fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct TodoChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// All todos, newest first. Ties on `created_at` fall back to descending id,
/// which matches insertion order.
pub async fn list_all(db: &DatabaseConnection) -> StorageResult<Vec<todo::Model>> {
    Ok(Todo::find()
        .order_by_desc(todo::Column::CreatedAt)
        .order_by_desc(todo::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> StorageResult<Option<todo::Model>> {
    Ok(Todo::find_by_id(id).one(db).await?)
}

pub async fn create(
    db: &DatabaseConnection,
    title: &str,
    description: &str,
) -> StorageResult<todo::Model> {
    let now = Utc::now().fixed_offset();
    let model = todo::ActiveModel {
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        completed: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    changes: TodoChanges,
) -> StorageResult<Option<todo::Model>> {
    let Some(existing) = Todo::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: todo::ActiveModel = existing.into();
    if let Some(title) = changes.title {
        active.title = Set(title);
    }
    if let Some(description) = changes.description {
        active.description = Set(description);
    }
    if let Some(completed) = changes.completed {
        active.completed = Set(completed);
    }
    active.updated_at = Set(Utc::now().fixed_offset());
    Ok(Some(active.update(db).await?))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> StorageResult<bool> {
    let result = Todo::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Connectivity probe for the health endpoint: a trivial `SELECT 1`.
pub async fn ping(db: &DatabaseConnection) -> StorageResult<()> {
    db.query_one_raw(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1".to_owned(),
    ))
    .await?;
    Ok(())
}
