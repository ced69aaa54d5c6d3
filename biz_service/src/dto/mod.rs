pub mod menu_item_dto;
