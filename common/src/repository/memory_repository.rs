use crate::errors::AppResult;
use crate::repository::repository_util::Repository;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, from_document, to_document};
use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;
use tokio::sync::RwLock;

/// 进程内存储：文档以 BSON 形式保存，按插入顺序返回
pub struct MemoryRepository<T> {
    docs: RwLock<Vec<Document>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self { docs: RwLock::new(Vec::new()), _marker: PhantomData }
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, value)| doc.get(key) == Some(value))
}

fn has_id(doc: &Document, id: &ObjectId) -> bool {
    doc.get_object_id("_id").map(|found| found == *id).unwrap_or(false)
}

#[async_trait]
impl<T> Repository<T> for MemoryRepository<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<T>> {
        let docs = self.docs.read().await;
        match docs.iter().find(|doc| has_id(doc, id)) {
            Some(doc) => Ok(Some(from_document(doc.clone())?)),
            None => Ok(None),
        }
    }

    async fn query(&self, filter: Document) -> AppResult<Vec<T>> {
        let docs = self.docs.read().await;
        let mut result = Vec::new();
        for doc in docs.iter().filter(|doc| matches(doc, &filter)) {
            result.push(from_document(doc.clone())?);
        }
        Ok(result)
    }

    async fn insert(&self, entity: &T) -> AppResult<ObjectId> {
        let mut doc = to_document(entity)?;
        let id = match doc.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                doc.insert("_id", id);
                id
            }
        };
        self.docs.write().await.push(doc);
        Ok(id)
    }

    async fn insert_many(&self, entities: &[T]) -> AppResult<usize> {
        for entity in entities {
            self.insert(entity).await?;
        }
        Ok(entities.len())
    }

    async fn find_one_and_set(&self, id: &ObjectId, set: Document) -> AppResult<Option<T>> {
        let mut docs = self.docs.write().await;
        let Some(doc) = docs.iter_mut().find(|doc| has_id(doc, id)) else {
            return Ok(None);
        };
        for (key, value) in set {
            doc.insert(key, value);
        }
        Ok(Some(from_document(doc.clone())?))
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<u64> {
        let mut docs = self.docs.write().await;
        let before = docs.len();
        docs.retain(|doc| !has_id(doc, id));
        Ok((before - docs.len()) as u64)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut docs = self.docs.write().await;
        let count = docs.len() as u64;
        docs.clear();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Dish {
        #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
        id: Option<ObjectId>,
        name: String,
        category: String,
    }

    fn dish(name: &str, category: &str) -> Dish {
        Dish { id: None, name: name.into(), category: category.into() }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let repo = MemoryRepository::<Dish>::new();
        let a = repo.insert(&dish("Samosa", "Snacks")).await.unwrap();
        let b = repo.insert(&dish("Samosa", "Snacks")).await.unwrap();
        assert_ne!(a, b);

        let found = repo.find_by_id(&a).await.unwrap().unwrap();
        assert_eq!(found.id, Some(a));
        assert_eq!(found.name, "Samosa");
    }

    #[tokio::test]
    async fn query_filters_by_equality_in_insert_order() {
        let repo = MemoryRepository::<Dish>::new();
        repo.insert_many(&[dish("Samosa", "Snacks"), dish("Sandesh", "Bengali"), dish("Kachori", "Snacks")]).await.unwrap();

        let snacks = repo.query(doc! { "category": "Snacks" }).await.unwrap();
        let names: Vec<_> = snacks.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Samosa", "Kachori"]);
        assert_eq!(repo.query(doc! {}).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn set_only_touches_given_fields() {
        let repo = MemoryRepository::<Dish>::new();
        let id = repo.insert(&dish("Samosa", "Snacks")).await.unwrap();

        let updated = repo.find_one_and_set(&id, doc! { "name": "Aloo Samosa" }).await.unwrap().unwrap();
        assert_eq!(updated.name, "Aloo Samosa");
        assert_eq!(updated.category, "Snacks");

        let missing = repo.find_one_and_set(&ObjectId::new(), doc! { "name": "x" }).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn delete_reports_count() {
        let repo = MemoryRepository::<Dish>::new();
        let id = repo.insert(&dish("Samosa", "Snacks")).await.unwrap();
        assert_eq!(repo.delete_by_id(&id).await.unwrap(), 1);
        assert_eq!(repo.delete_by_id(&id).await.unwrap(), 0);

        repo.insert_many(&[dish("a", "x"), dish("b", "y")]).await.unwrap();
        assert_eq!(repo.delete_all().await.unwrap(), 2);
        assert!(repo.query(doc! {}).await.unwrap().is_empty());
    }
}
