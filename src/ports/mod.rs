pub mod api;
pub mod storage;
pub mod ui;

pub use api::*;
pub use storage::*;
pub use ui::*;
