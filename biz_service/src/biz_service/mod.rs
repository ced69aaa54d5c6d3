pub mod menu_item_service;
pub mod seed_data;
