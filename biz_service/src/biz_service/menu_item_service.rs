use crate::biz_service::seed_data::seed_menu_items;
use crate::dto::menu_item_dto::{CreateMenuItemDto, UpdateMenuItemDto};
use crate::entitys::menu_item_entity::MenuItemEntity;
use common::errors::{AppError, AppResult};
use common::memory_repository::MemoryRepository;
use common::repository_util::{BaseRepository, Repository};
use log::{debug, info, warn};
use mongodb::Database;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{DateTime, doc};
use std::sync::Arc;

pub const MENU_ITEM_COLLECTION: &str = "menuItems";
/// 门店演示规则：前 6 个菜品作为招牌
pub const BEST_SELLER_LIMIT: usize = 6;

pub struct MenuItemService {
    pub dao: Arc<dyn Repository<MenuItemEntity>>,
}

impl MenuItemService {
    pub fn new(dao: Arc<dyn Repository<MenuItemEntity>>) -> Self {
        Self { dao }
    }

    /// MongoDB 存储；索引创建失败不影响启动
    pub async fn with_mongo(db: &Database) -> Self {
        let repository = BaseRepository::<MenuItemEntity>::new(db, MENU_ITEM_COLLECTION);
        if let Err(e) = repository.ensure_indexes().await {
            warn!("create indexes on {} failed: {}", MENU_ITEM_COLLECTION, e);
        }
        Self::new(Arc::new(repository))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryRepository::<MenuItemEntity>::new()))
    }

    /// 非法 id 与不存在的 id 对调用方都是 404，日志中区分
    fn parse_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id).map_err(|_| {
            debug!("malformed menu item id: {}", id);
            AppError::NotFound
        })
    }

    fn not_found(id: &ObjectId) -> AppError {
        debug!("menu item not found: {}", id);
        AppError::NotFound
    }

    pub async fn list_all(&self, category: Option<&str>) -> AppResult<Vec<MenuItemEntity>> {
        let filter = match category {
            Some(category) => doc! { "category": category },
            None => doc! {},
        };
        self.dao.query(filter).await
    }

    pub async fn best_sellers(&self) -> AppResult<Vec<MenuItemEntity>> {
        let mut items = self.list_all(None).await?;
        items.truncate(BEST_SELLER_LIMIT);
        Ok(items)
    }

    /// 去重后的分类，保持首次出现的顺序
    pub async fn categories(&self) -> AppResult<Vec<String>> {
        let items = self.list_all(None).await?;
        let mut categories: Vec<String> = Vec::new();
        for item in items {
            if !categories.contains(&item.category) {
                categories.push(item.category);
            }
        }
        Ok(categories)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<MenuItemEntity> {
        let oid = Self::parse_id(id)?;
        self.dao.find_by_id(&oid).await?.ok_or_else(|| Self::not_found(&oid))
    }

    pub async fn create(&self, dto: CreateMenuItemDto) -> AppResult<MenuItemEntity> {
        let mut entity = dto.into_entity()?;
        let id = self.dao.insert(&entity).await?;
        entity.id = Some(id);
        info!("menu item created: {} ({})", entity.name, id);
        Ok(entity)
    }

    pub async fn update(&self, id: &str, dto: UpdateMenuItemDto) -> AppResult<MenuItemEntity> {
        let oid = Self::parse_id(id)?;
        let patch = dto.into_patch()?;
        let set = patch.to_set_document(DateTime::now());
        let updated = self.dao.find_one_and_set(&oid, set).await?.ok_or_else(|| Self::not_found(&oid))?;
        info!("menu item updated: {}", oid);
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let oid = Self::parse_id(id)?;
        if self.dao.delete_by_id(&oid).await? == 0 {
            return Err(Self::not_found(&oid));
        }
        info!("menu item deleted: {}", oid);
        Ok(())
    }

    /// 清空集合并写入固定初始数据，返回写入条数
    pub async fn seed(&self) -> AppResult<usize> {
        let removed = self.dao.delete_all().await?;
        let count = self.dao.insert_many(&seed_menu_items()).await?;
        info!("menu seeded: removed {}, inserted {}", removed, count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::menu_item_dto::REQUIRED_FIELDS_MSG;
    use serde_json::json;

    fn create_dto(body: serde_json::Value) -> CreateMenuItemDto {
        serde_json::from_value(body).unwrap()
    }

    fn update_dto(body: serde_json::Value) -> UpdateMenuItemDto {
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let service = MenuItemService::in_memory();
        let created = service.create(create_dto(json!({"name": "Rabri", "category": "Indian Sweets", "price": "75"}))).await.unwrap();
        let id = created.id.unwrap().to_hex();
        assert!(!id.is_empty());
        assert_eq!(created.price, 75.0);

        let fetched = service.get_by_id(&id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_ids_are_unique() {
        let service = MenuItemService::in_memory();
        let body = json!({"name": "Samosa", "category": "Snacks", "price": 20});
        let a = service.create(create_dto(body.clone())).await.unwrap();
        let b = service.create(create_dto(body)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn create_without_name_is_validation_error() {
        let service = MenuItemService::in_memory();
        let err = service.create(create_dto(json!({"category": "Snacks", "price": 10}))).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == REQUIRED_FIELDS_MSG));
        assert!(service.list_all(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_and_malformed_ids_are_not_found() {
        let service = MenuItemService::in_memory();
        for id in ["000000000000000000000000", "not-an-id", ""] {
            assert!(matches!(service.get_by_id(id).await, Err(AppError::NotFound)));
            assert!(matches!(service.update(id, update_dto(json!({"price": 1}))).await, Err(AppError::NotFound)));
            assert!(matches!(service.delete(id).await, Err(AppError::NotFound)));
        }
    }

    #[tokio::test]
    async fn update_price_leaves_other_fields() {
        let service = MenuItemService::in_memory();
        let created = service
            .create(create_dto(json!({"name": "Sandesh", "category": "Bengali Sweets", "price": 380, "description": "soft"})))
            .await
            .unwrap();
        let id = created.id.unwrap().to_hex();

        let updated = service.update(&id, update_dto(json!({"price": 999}))).await.unwrap();
        assert_eq!(updated.price, 999.0);
        assert!(updated.updated_at.is_some());
        assert_eq!(
            MenuItemEntity { price: created.price, updated_at: None, ..updated.clone() },
            created
        );
    }

    #[tokio::test]
    async fn update_empty_string_overwrites() {
        let service = MenuItemService::in_memory();
        let created = service
            .create(create_dto(json!({"name": "Sandesh", "category": "Bengali Sweets", "price": 380, "description": "soft"})))
            .await
            .unwrap();
        let id = created.id.unwrap().to_hex();
        let updated = service.update(&id, update_dto(json!({"description": ""}))).await.unwrap();
        assert_eq!(updated.description, "");
        assert_eq!(updated.name, "Sandesh");
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let service = MenuItemService::in_memory();
        let created = service.create(create_dto(json!({"name": "Bhujia", "category": "Snacks", "price": 200}))).await.unwrap();
        let id = created.id.unwrap().to_hex();
        service.delete(&id).await.unwrap();
        assert!(matches!(service.get_by_id(&id).await, Err(AppError::NotFound)));
        assert!(matches!(service.delete(&id).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn seed_replaces_collection() {
        let service = MenuItemService::in_memory();
        service.create(create_dto(json!({"name": "Old", "category": "Gone", "price": 1}))).await.unwrap();

        let count = service.seed().await.unwrap();
        assert_eq!(count, 20);
        let items = service.list_all(None).await.unwrap();
        assert_eq!(items.len(), count);
        assert!(items.iter().all(|i| i.name != "Old"));

        // 重复执行结果一致
        assert_eq!(service.seed().await.unwrap(), 20);
        assert_eq!(service.list_all(None).await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn category_filter_and_derived_views() {
        let service = MenuItemService::in_memory();
        service.seed().await.unwrap();

        let snacks = service.list_all(Some("Snacks & Namkeen")).await.unwrap();
        assert_eq!(snacks.len(), 4);
        assert!(snacks.iter().all(|i| i.category == "Snacks & Namkeen"));
        assert!(service.list_all(Some("snacks & namkeen")).await.unwrap().is_empty());

        let best = service.best_sellers().await.unwrap();
        assert_eq!(best.len(), BEST_SELLER_LIMIT);
        assert_eq!(best[0].name, "Kaju Katli");

        let categories = service.categories().await.unwrap();
        assert_eq!(
            categories,
            vec!["Indian Sweets", "Bengali Sweets", "Snacks & Namkeen", "Chaat & Dishes", "Seasonal Specials"]
        );
    }
}
