// src/page.rs
//
// Entry point for the page-rendering host: hand in a fetch-capable client,
// get back `{ data }`. Never fails.

use serde::Serialize;

use crate::{config::SheetConfig, fetch::Fetch, loader::SheetLoader, parse::Dataset};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageData {
    pub data: Dataset,
}

/// Loads the published sheet with the host's client.
pub async fn load<F: Fetch>(fetch: F) -> PageData {
    load_with(fetch, &SheetConfig::default()).await
}

pub async fn load_with<F: Fetch>(fetch: F, config: &SheetConfig) -> PageData {
    let loader = SheetLoader::new(fetch, config.clone());
    PageData {
        data: loader.load().await,
    }
}
