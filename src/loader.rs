// src/loader.rs
use tracing::{debug, error, instrument};

use crate::{
    config::SheetConfig,
    error::LoadFailure,
    fetch::Fetch,
    parse::{parse_csv, Dataset},
};

/// Fetches the configured sheet and parses it into a [`Dataset`].
///
/// Stateless: every call issues one GET and builds a fresh dataset.
#[derive(Debug, Clone)]
pub struct SheetLoader<F> {
    client: F,
    config: SheetConfig,
}

impl<F: Fetch> SheetLoader<F> {
    pub fn new(client: F, config: SheetConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    #[instrument(level = "info", skip(self), fields(url = %self.config.url))]
    pub async fn try_load(&self) -> Result<Dataset, LoadFailure> {
        let url = &self.config.url;
        let text = self
            .client
            .get_text(url)
            .await
            .map_err(|cause| LoadFailure::Fetch {
                url: url.clone(),
                cause,
            })?;

        let data = parse_csv(&text);
        debug!(bytes = text.len(), rows = data.len(), "parsed sheet");
        Ok(data)
    }

    /// Like [`try_load`](Self::try_load), but a failure is logged and
    /// becomes an empty dataset so the page still renders.
    pub async fn load(&self) -> Dataset {
        match self.try_load().await {
            Ok(data) => data,
            Err(e) => {
                error!(error = %e, "load error");
                Vec::new()
            }
        }
    }
}
