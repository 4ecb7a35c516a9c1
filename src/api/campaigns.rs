use async_trait::async_trait;
use std::rc::Rc;

use crate::api::{ApiClient, ApiError};
use crate::models::Campaign;

/// Anything that can produce the campaign collection.
///
/// The dashboard only ever talks to this trait; the HTTP client is one
/// implementation and tests plug in their own.
///
/// A source that aborts its own request (for instance one wrapping a
/// browser abort signal) should return `ApiError::Cancelled`; the loader
/// treats that like teardown and never shows it to the user.
#[async_trait(?Send)]
pub trait CampaignSource {
    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, ApiError>;
}

#[async_trait(?Send)]
impl CampaignSource for ApiClient {
    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        tracing::debug!("Fetching campaigns from {}", self.endpoint());
        self.get().await
    }
}

/// Shared handle to the campaign source, provided to the component tree
/// as context.
#[derive(Clone)]
pub struct CampaignSourceHandle(Rc<dyn CampaignSource>);

impl CampaignSourceHandle {
    pub fn new(source: impl CampaignSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn source(&self) -> &dyn CampaignSource {
        self.0.as_ref()
    }
}
