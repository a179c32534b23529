#![warn(clippy::all, rust_2018_idioms)]

//! Desktop front-end of the manufacturing ERP module.

pub mod app;
pub mod pages;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::ErpApp;
