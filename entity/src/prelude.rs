pub use super::event::Entity as Event;
pub use super::global_setting::Entity as GlobalSetting;
pub use super::member::Entity as Member;
pub use super::news::Entity as News;
pub use super::project::Entity as Project;
pub use super::store_item::Entity as StoreItem;
pub use super::team::Entity as Team;
pub use super::vote::Entity as Vote;
