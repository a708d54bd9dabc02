pub mod config;
pub mod error;
pub mod logging;
pub mod parse;
pub mod route;
pub mod show;
pub mod table;

pub use error::Error;
pub use route::Route;
pub use table::{LoadSummary, RouteAttr, RouteTable, Verdict};
