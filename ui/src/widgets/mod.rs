pub mod badge;
pub mod card;
pub mod pagination;
pub mod sidebar;
pub mod table;
pub mod top_bar;

pub use badge::status_badge;
pub use card::{card, summary_card};
pub use pagination::{PageAction, pagination};
pub use sidebar::{SIDEBAR_WIDTH, sidebar};
pub use table::data_table;
pub use top_bar::top_bar;
