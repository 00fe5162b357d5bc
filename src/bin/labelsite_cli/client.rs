#![deny(clippy::all, clippy::pedantic)]

use std::fs;

use async_trait::async_trait;
use labelsite::application::listing::{ListSource, SourceError};
use labelsite::config::{LoadError, Settings};
use labelsite::domain::resources::Resource;
use labelsite::infra::error::InfraError;
use labelsite::infra::session::{AuthToken, Session};
use labelsite::presentation::views::TemplateRenderError;
use labelsite_api_types::{ListEnvelope, ListQuery};
use reqwest::{Client, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::args::Cli;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("site URL is required (use --site, LABELSITE_SITE_URL or site.base_url)")]
    MissingSite,
    #[error("failed to read token file: {0}")]
    TokenFile(std::io::Error),
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Template(#[from] TemplateRenderError),
    #[error("{resource} list unavailable: {detail}")]
    Fetch { resource: Resource, detail: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Clone, Debug)]
pub struct Ctx {
    pub client: Client,
    pub session: Session,
}

impl Ctx {
    pub fn new(session: Session) -> Result<Self, CliError> {
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self { client, session })
    }

    pub fn user_agent() -> &'static str {
        concat!("labelsite-cli/", env!("CARGO_PKG_VERSION"))
    }
}

#[async_trait]
impl ListSource for Ctx {
    async fn fetch<T>(
        &self,
        resource: Resource,
        query: ListQuery,
    ) -> Result<ListEnvelope<T>, SourceError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let mut url = self
            .session
            .endpoint(resource)
            .map_err(|e| SourceError::Configuration(e.to_string()))?;
        url.query_pairs_mut().extend_pairs(query.pairs());
        debug!(%url, "fetching list slice");

        let mut req = self.client.get(url);
        if let Some(token) = self.session.token() {
            req = req.header(AUTHORIZATION, token.bearer());
        }

        let resp = req
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        serde_json::from_slice(&bytes).map_err(|e| SourceError::Decode(e.to_string()))
    }
}

pub fn build_ctx(cli: &Cli, settings: &Settings) -> Result<Ctx, CliError> {
    let site = settings
        .site
        .base_url
        .as_deref()
        .ok_or(CliError::MissingSite)?;
    let token = if let Some(path) = &cli.token_file {
        AuthToken::new(fs::read_to_string(path).map_err(CliError::TokenFile)?)
    } else {
        cli.token_env.as_deref().and_then(AuthToken::new)
    };

    Ctx::new(Session::new(site)?.with_token(token))
}
