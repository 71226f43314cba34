pub mod config;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod page;
pub mod parse;

pub use config::SheetConfig;
pub use error::LoadFailure;
pub use fetch::Fetch;
pub use loader::SheetLoader;
pub use page::PageData;
pub use parse::{parse_csv, Dataset, Row};
