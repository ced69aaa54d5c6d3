use crate::entitys::menu_item_entity::{MenuItemEntity, MenuItemPatch, placeholder_image};
use common::errors::{AppError, AppResult};
use mongodb::bson::DateTime;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

pub const REQUIRED_FIELDS_MSG: &str = "Name, category, and price are required";
pub const INVALID_PRICE_MSG: &str = "Price must be a non-negative number";

/// 价格既可以是数字也可以是数字字符串
pub fn parse_price(value: &Value) -> AppResult<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match price {
        Some(p) if p.is_finite() && p >= 0.0 => Ok(p),
        _ => Err(AppError::Validation(INVALID_PRICE_MSG.to_string())),
    }
}

/// 创建菜品请求
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemDto {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub category: Option<String>,
    #[validate(required)]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Value>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_available: Option<bool>,
}

impl CreateMenuItemDto {
    /// 校验必填字段并补全默认值，`id` 由存储层分配
    pub fn into_entity(self) -> AppResult<MenuItemEntity> {
        let blank_price = matches!(&self.price, Some(Value::String(s)) if s.trim().is_empty());
        if self.validate().is_err() || blank_price {
            return Err(AppError::Validation(REQUIRED_FIELDS_MSG.to_string()));
        }
        let price = match &self.price {
            Some(value) => parse_price(value)?,
            None => return Err(AppError::Validation(REQUIRED_FIELDS_MSG.to_string())),
        };
        let name = self.name.unwrap_or_default();
        let image = self.image.unwrap_or_else(|| placeholder_image(&name));
        Ok(MenuItemEntity {
            id: None,
            name,
            category: self.category.unwrap_or_default(),
            price,
            description: self.description.unwrap_or_default(),
            image,
            is_available: self.is_available.unwrap_or(true),
            created_at: Some(DateTime::now()),
            updated_at: None,
        })
    }
}

/// 区分"字段缺省"与"字段为 null"
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// 局部更新请求：外层 `None` 表示未提交该字段
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItemDto {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Option<Value>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<bool>)]
    pub is_available: Option<Option<bool>>,
}

fn not_null<T>(field: &str, value: Option<Option<T>>) -> AppResult<Option<T>> {
    match value {
        None => Ok(None),
        Some(Some(v)) => Ok(Some(v)),
        Some(None) => Err(AppError::Validation(format!("{} cannot be null", field))),
    }
}

impl UpdateMenuItemDto {
    pub fn into_patch(self) -> AppResult<MenuItemPatch> {
        let price = match not_null("price", self.price)? {
            Some(value) => Some(parse_price(&value)?),
            None => None,
        };
        Ok(MenuItemPatch {
            name: not_null("name", self.name)?,
            category: not_null("category", self.category)?,
            price,
            description: not_null("description", self.description)?,
            image: not_null("image", self.image)?,
            is_available: not_null("isAvailable", self.is_available)?,
        })
    }
}
