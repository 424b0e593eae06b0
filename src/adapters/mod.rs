pub mod github;
pub mod storage;
pub mod ui;
