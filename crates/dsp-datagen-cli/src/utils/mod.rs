pub mod logging;
pub mod ui;
