pub mod prelude;

pub mod event;
pub mod global_setting;
pub mod member;
pub mod news;
pub mod project;
pub mod store_item;
pub mod team;
pub mod vote;
