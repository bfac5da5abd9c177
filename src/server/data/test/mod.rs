mod event;
mod member;
mod news;
mod project;
mod setting;
mod store_item;
mod vote;
