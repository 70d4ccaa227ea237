//! The seam between search sessions and the remote service.

use std::rc::Rc;

use async_trait::async_trait;
use common::{camp_site::CampSite, park::Park, search_request::SearchRequest};

use crate::{api, config::ServiceConfig, error::QueryFailure};

/// Turns a validated search request into a remote call.
///
/// Implementations do not retry; any non-success is an opaque [`QueryFailure`].
#[async_trait(?Send)]
pub trait QueryAdapter {
    async fn query_free_parks(&self, request: &SearchRequest) -> Result<Vec<Park>, QueryFailure>;

    async fn query_free_camp_sites(&self, park_name: &str, request: &SearchRequest) -> Result<Vec<CampSite>, QueryFailure>;
}

#[async_trait(?Send)]
impl<A: QueryAdapter + ?Sized> QueryAdapter for Rc<A> {
    async fn query_free_parks(&self, request: &SearchRequest) -> Result<Vec<Park>, QueryFailure> {
        (**self).query_free_parks(request).await
    }

    async fn query_free_camp_sites(&self, park_name: &str, request: &SearchRequest) -> Result<Vec<CampSite>, QueryFailure> {
        (**self).query_free_camp_sites(park_name, request).await
    }
}

#[derive(Debug, Clone)]
pub struct HttpQueryAdapter {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl HttpQueryAdapter {
    pub fn new(config: ServiceConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl QueryAdapter for HttpQueryAdapter {
    async fn query_free_parks(&self, request: &SearchRequest) -> Result<Vec<Park>, QueryFailure> {
        api::query_free_parks(&self.client, &self.config, request).await
    }

    async fn query_free_camp_sites(&self, park_name: &str, request: &SearchRequest) -> Result<Vec<CampSite>, QueryFailure> {
        api::query_free_camp_sites(&self.client, &self.config, park_name, request).await
    }
}
