mod registration;
mod settings;
mod store;
mod team;
mod ticket;
mod voting;
