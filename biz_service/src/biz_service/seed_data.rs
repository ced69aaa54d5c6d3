use crate::entitys::menu_item_entity::{MenuItemEntity, placeholder_image};
use mongodb::bson::DateTime;

struct SeedItem {
    name: &'static str,
    category: &'static str,
    price: f64,
    description: &'static str,
}

const fn item(name: &'static str, category: &'static str, price: f64, description: &'static str) -> SeedItem {
    SeedItem { name, category, price, description }
}

const INDIAN_SWEETS: &str = "Indian Sweets";
const BENGALI_SWEETS: &str = "Bengali Sweets";
const SNACKS_NAMKEEN: &str = "Snacks & Namkeen";
const CHAAT_DISHES: &str = "Chaat & Dishes";
const SEASONAL_SPECIALS: &str = "Seasonal Specials";

/// 初始化数据（v1），价格单位：卢比
static SEED_MENU: [SeedItem; 20] = [
    item("Kaju Katli", INDIAN_SWEETS, 450.0, "Premium cashew fudge, thin and diamond-shaped, garnished with silver leaf"),
    item("Gulab Jamun", INDIAN_SWEETS, 50.0, "Soft milk-solid balls deep-fried and soaked in rose-flavored sugar syrup"),
    item("Rasgulla", INDIAN_SWEETS, 40.0, "Spongy cottage cheese balls soaked in light sugar syrup"),
    item("Motichoor Laddu", INDIAN_SWEETS, 350.0, "Round sweet balls made from fine boondi pearls, melts in mouth"),
    item("Milk Cake", INDIAN_SWEETS, 400.0, "Rich and crumbly sweet made from solidified sweetened milk"),
    item("Rosogolla", BENGALI_SWEETS, 45.0, "Authentic Bengali spongy cottage cheese balls in sugar syrup"),
    item("Sandesh", BENGALI_SWEETS, 380.0, "Delicate sweet made from fresh cottage cheese, lightly sweetened"),
    item("Chamcham", BENGALI_SWEETS, 420.0, "Cylindrical sweet made from chhena, coated with coconut"),
    item("Mishti Doi", BENGALI_SWEETS, 60.0, "Sweet yogurt dessert, caramelized and fermented to perfection"),
    item("Samosa", SNACKS_NAMKEEN, 20.0, "Crispy triangular pastry filled with spiced potatoes and peas"),
    item("Kachori", SNACKS_NAMKEEN, 25.0, "Flaky deep-fried snack filled with spiced lentils"),
    item("Namkeen Mixture", SNACKS_NAMKEEN, 180.0, "Crunchy blend of fried lentils, peanuts, and spices (per kg)"),
    item("Bhujia", SNACKS_NAMKEEN, 200.0, "Crispy noodle-like snack made from gram flour (per kg)"),
    item("Pani Puri", CHAAT_DISHES, 40.0, "Crispy hollow puris filled with tangy tamarind water and potatoes"),
    item("Dahi Puri", CHAAT_DISHES, 50.0, "Crispy puris topped with yogurt, chutneys, and sev"),
    item("Pav Bhaji", CHAAT_DISHES, 80.0, "Spicy mashed vegetable curry served with buttered bread rolls"),
    item("Chole Bhature", CHAAT_DISHES, 90.0, "Spicy chickpea curry served with fluffy deep-fried bread"),
    item("Gujiya", SEASONAL_SPECIALS, 300.0, "Crescent-shaped pastry filled with khoya and dry fruits (per kg)"),
    item("Soan Papdi", SEASONAL_SPECIALS, 320.0, "Flaky crisp sweet with cardamom flavor that melts in mouth"),
    item("Dry Fruit Laddu", SEASONAL_SPECIALS, 500.0, "Premium laddus packed with almonds, cashews, and pistachios"),
];

pub fn seed_menu_items() -> Vec<MenuItemEntity> {
    let now = DateTime::now();
    SEED_MENU
        .iter()
        .map(|seed| MenuItemEntity {
            id: None,
            name: seed.name.to_string(),
            category: seed.category.to_string(),
            price: seed.price,
            description: seed.description.to_string(),
            image: placeholder_image(seed.name),
            is_available: true,
            created_at: Some(now),
            updated_at: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_has_twenty_items_across_five_categories() {
        let items = seed_menu_items();
        assert_eq!(items.len(), 20);
        let mut categories: Vec<_> = items.iter().map(|i| i.category.as_str()).collect();
        categories.dedup();
        assert_eq!(categories, vec![INDIAN_SWEETS, BENGALI_SWEETS, SNACKS_NAMKEEN, CHAAT_DISHES, SEASONAL_SPECIALS]);
    }

    #[test]
    fn fixture_keeps_known_prices() {
        let items = seed_menu_items();
        let price_of = |name: &str| items.iter().find(|i| i.name == name).map(|i| i.price);
        assert_eq!(price_of("Kaju Katli"), Some(450.0));
        assert_eq!(price_of("Gulab Jamun"), Some(50.0));
        assert_eq!(price_of("Samosa"), Some(20.0));
        let dry_fruit = items.iter().find(|i| i.name == "Dry Fruit Laddu").unwrap();
        assert_eq!(dry_fruit.image, "https://via.placeholder.com/300x200?text=Dry+Fruit+Laddu");
    }
}
