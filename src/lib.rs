#![deny(dead_code)]

pub mod cli;
pub mod convert;
pub mod env;
pub mod logging;
pub mod report;
pub mod secrets;


pub use convert::{convert, Category};
pub use env::{Environment, ProcessEnvironment};
pub use report::{run, Entry, Report, DEFAULT_TITLE};
pub use secrets::REQUIRED_SECRETS;
