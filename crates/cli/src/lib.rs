//! Interactive front end for browsing and ordering stock.

pub mod config;
pub mod console;
pub mod controller;
pub mod menu;
pub mod source;

pub use config::CliArgs;
pub use console::Console;
pub use controller::Controller;
pub use menu::MenuOption;
