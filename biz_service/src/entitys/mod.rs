pub mod menu_item_entity;
