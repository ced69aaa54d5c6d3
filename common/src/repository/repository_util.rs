use crate::errors::{AppError, AppResult};
use crate::repository::index_trait::MongoIndexModelProvider;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::{Serialize, de::DeserializeOwned};

/// 按 `_id` 存取的通用数据访问接口
#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<T>>;
    /// 等值过滤查询，空过滤返回全部，顺序由存储决定
    async fn query(&self, filter: Document) -> AppResult<Vec<T>>;
    async fn insert(&self, entity: &T) -> AppResult<ObjectId>;
    async fn insert_many(&self, entities: &[T]) -> AppResult<usize>;
    /// `$set` 指定字段并返回更新后的文档
    async fn find_one_and_set(&self, id: &ObjectId, set: Document) -> AppResult<Option<T>>;
    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<u64>;
    async fn delete_all(&self) -> AppResult<u64>;
}

pub struct BaseRepository<T: Send + Sync> {
    pub collection: Collection<T>, // 线程安全的数据库连接池
}

impl<T: Send + Sync> BaseRepository<T> {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self { collection: db.collection(collection_name) }
    }
}

impl<T: MongoIndexModelProvider + Send + Sync> BaseRepository<T> {
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let models = T::index_models();
        if models.is_empty() {
            return Ok(());
        }
        self.collection.create_indexes(models).await?;
        Ok(())
    }
}

#[async_trait]
impl<T> Repository<T> for BaseRepository<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<T>> {
        let result = self.collection.find_one(doc! { "_id": *id }).await?;
        Ok(result)
    }

    async fn query(&self, filter: Document) -> AppResult<Vec<T>> {
        let cursor = self.collection.find(filter).await?;
        let result: Vec<T> = cursor.try_collect().await?;
        Ok(result)
    }

    async fn insert(&self, entity: &T) -> AppResult<ObjectId> {
        let result = self.collection.insert_one(entity).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal(format!("unexpected inserted id: {}", result.inserted_id)))
    }

    async fn insert_many(&self, entities: &[T]) -> AppResult<usize> {
        if entities.is_empty() {
            return Ok(0);
        }
        let result = self.collection.insert_many(entities).await?;
        Ok(result.inserted_ids.len())
    }

    async fn find_one_and_set(&self, id: &ObjectId, set: Document) -> AppResult<Option<T>> {
        let result = self
            .collection
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(result)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
