//! Fixture accumulator and deployment pipeline

use std::path::{Path, PathBuf};

use smocker::{Mock, MockServerClient};
use tracing::{debug, info};
use types::ExchangeMock;

use crate::error::{OriginError, Result};
use crate::exchange::build_mocks_for_exchange;

/// Collects fixtures per exchange and turns them into one mock batch
///
/// Exchanges are built in the order their first fixture was added; fixtures
/// for one exchange keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct MocksBuilder {
    reset: bool,
    debug_path: Option<PathBuf>,
    groups: Vec<(String, Vec<ExchangeMock>)>,
}

impl MocksBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the server's existing mocks before deploying
    pub fn reset(mut self) -> Self {
        self.reset = true;
        self
    }

    /// Write the serialized batch to `path` while deploying
    pub fn debug(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_path = Some(path.into());
        self
    }

    pub fn add(mut self, model: ExchangeMock) -> Self {
        self.push(model);
        self
    }

    pub fn push(&mut self, model: ExchangeMock) {
        match self.groups.iter_mut().find(|(name, _)| *name == model.name) {
            Some((_, models)) => models.push(model),
            None => self.groups.push((model.name.clone(), vec![model])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Exchange names in build order
    pub fn exchanges(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn debug_path(&self) -> Option<&Path> {
        self.debug_path.as_deref()
    }

    /// Build and validate every mock without contacting a server
    pub fn build(&self) -> Result<Vec<Mock>> {
        let mut mocks = Vec::new();
        for (name, models) in &self.groups {
            mocks.extend(build_mocks_for_exchange(name, models)?);
        }
        debug!(exchanges = self.groups.len(), mocks = mocks.len(), "Assembled mock batch");
        Ok(mocks)
    }

    /// Build the batch and register it with `client`
    ///
    /// Building happens before anything is sent, so a bad fixture leaves the
    /// server untouched. Returns the number of mocks submitted.
    pub async fn deploy<C>(&self, client: &C) -> Result<usize>
    where
        C: MockServerClient + ?Sized,
    {
        let mocks = self.build()?;

        if self.reset {
            client
                .reset()
                .await
                .map_err(|source| OriginError::server("reset", source))?;
        }

        let payload = serde_json::to_string(&mocks)?;
        if let Some(path) = &self.debug_path {
            tokio::fs::write(path, &payload).await?;
            info!(path = %path.display(), "Wrote mock batch");
        }

        if self.is_empty() {
            info!("No fixtures added, nothing to deploy");
            return Ok(0);
        }

        client
            .add_mocks_json(payload)
            .await
            .map_err(|source| OriginError::server("submit", source))?;
        info!(mocks = mocks.len(), "Deployed mocks");
        Ok(mocks.len())
    }
}
