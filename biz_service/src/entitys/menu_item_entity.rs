use common::index_trait::MongoIndexModelProvider;
use common::util::url_util::form_encode;
use mongodb::IndexModel;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{DateTime, Document, doc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 菜品信息，存储于 `menuItems` 集合
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemEntity {
    /// 由存储层分配，创建后不可变
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 分类，仅用于等值过滤
    pub category: String,
    /// 价格（卢比），非负
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

fn default_available() -> bool {
    true
}

impl MongoIndexModelProvider for MenuItemEntity {
    fn index_models() -> Vec<IndexModel> {
        vec![IndexModel::builder().keys(doc! { "category": 1 }).build()]
    }
}

/// 以菜品名称生成占位图片地址
pub fn placeholder_image(name: &str) -> String {
    format!("https://via.placeholder.com/300x200?text={}", form_encode(name))
}

/// 对外返回的菜品结构（不含时间戳）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub is_available: bool,
}

impl From<MenuItemEntity> for MenuItemView {
    fn from(entity: MenuItemEntity) -> Self {
        Self {
            id: entity.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: entity.name,
            category: entity.category,
            price: entity.price,
            description: entity.description,
            image: entity.image,
            is_available: entity.is_available,
        }
    }
}

/// 已校验的局部更新：`Some` 表示请求中出现了该字段
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_available: Option<bool>,
}

impl MenuItemPatch {
    /// 生成 `$set` 内容，总是带上 `updatedAt`
    pub fn to_set_document(&self, updated_at: DateTime) -> Document {
        let mut set = Document::new();
        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        if let Some(category) = &self.category {
            set.insert("category", category.as_str());
        }
        if let Some(price) = self.price {
            set.insert("price", price);
        }
        if let Some(description) = &self.description {
            set.insert("description", description.as_str());
        }
        if let Some(image) = &self.image {
            set.insert("image", image.as_str());
        }
        if let Some(is_available) = self.is_available {
            set.insert("isAvailable", is_available);
        }
        set.insert("updatedAt", updated_at);
        set
    }
}
