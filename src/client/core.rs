// File: src/client/core.rs

use crate::client::CatalogApi;
use crate::client::cert::NoVerifier;
use crate::config::Config;
use crate::error::ApiError;
use crate::model::{Character, Episode, Page};

use http::header::{ACCEPT, USER_AGENT};
use http::{Request, Uri};
use http_body_util::BodyExt;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

type HttpsClient = Client<hyper_rustls::HttpsConnector<HttpConnector>, String>;

const AGENT: &str = concat!("rmdex/", env!("CARGO_PKG_VERSION"));

// The API reports failures as `{"error": "Character not found"}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: HttpsClient,
    base_url: String,
    timeout: Duration,
}

impl CatalogClient {
    pub fn new(base_url: &str, insecure: bool, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let base_uri = parse_uri(&base_url)?;

        let https_connector = if insecure {
            let tls_config = rustls::ClientConfig::builder()
                .dangerous()
                .with_custom_certificate_verifier(Arc::new(NoVerifier))
                .with_no_client_auth();
            HttpsConnectorBuilder::new()
                .with_tls_config(tls_config)
                .https_or_http()
                .enable_http1()
                .build()
        } else {
            let mut root_store = rustls::RootCertStore::empty();
            let result = rustls_native_certs::load_native_certs();
            for err in &result.errors {
                log::debug!("Skipping native certificate source: {}", err);
            }
            root_store.add_parsable_certificates(result.certs);

            // A plain-http base (a local mirror, a test server) works without roots.
            if root_store.is_empty() {
                if base_uri.scheme_str() == Some("https") {
                    return Err(ApiError::Tls(
                        "No valid system certificates found.".to_string(),
                    ));
                }
                log::warn!("No system certificates found; https URLs will fail");
            }

            let tls_config = rustls::ClientConfig::builder()
                .with_root_certificates(root_store)
                .with_no_client_auth();
            HttpsConnectorBuilder::new()
                .with_tls_config(tls_config)
                .https_or_http()
                .enable_http1()
                .build()
        };

        let http = Client::builder(TokioExecutor::new()).build(https_connector);
        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(
            &config.base_url,
            config.allow_insecure_certs,
            config.request_timeout(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // --- TRANSPORT ---

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let uri = parse_uri(url)?;
        let req = Request::get(uri)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, AGENT)
            .body(String::new())
            .map_err(|e| ApiError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let fetch = async {
            let resp = self
                .http
                .request(req)
                .await
                .map_err(|e| ApiError::Transport(transport_message(&e)))?;
            let status = resp.status();
            let body = resp
                .into_body()
                .collect()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .to_bytes();
            Ok::<_, ApiError>((status, body))
        };

        let (status, body) = tokio::time::timeout(self.timeout, fetch)
            .await
            .map_err(|_| ApiError::Timeout(self.timeout.as_secs()))??;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            log::debug!("GET {} -> {} ({})", url, status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(serde_json::from_slice(&body)?)
    }

    // --- CHARACTERS ---

    pub async fn get_character_page(&self, url: &str) -> Result<Page<Character>, ApiError> {
        self.get_json(url).await
    }

    pub async fn get_character(&self, id: u32) -> Result<Character, ApiError> {
        self.get_json(&format!("{}/character/{}", self.base_url, id))
            .await
    }

    /// Walks `info.next` from the first page until the API reports no more pages.
    pub async fn get_all_characters(&self) -> Result<Vec<Character>, ApiError> {
        let mut next = Some(format!("{}/character?page=1", self.base_url));
        let mut seen = HashSet::new();
        let mut characters = Vec::new();

        while let Some(url) = next.take() {
            if !seen.insert(url.clone()) {
                log::warn!("Pagination loop detected at {}, stopping", url);
                break;
            }
            let page = self.get_character_page(&url).await?;
            characters.extend(page.results);
            next = page.info.next;
        }

        log::info!("Fetched {} characters", characters.len());
        Ok(characters)
    }

    // --- EPISODES ---

    pub async fn get_episode_by_url(&self, url: &str) -> Result<Episode, ApiError> {
        self.get_json(url).await
    }
}

impl CatalogApi for CatalogClient {
    async fn get_all_characters(&self) -> Result<Vec<Character>, ApiError> {
        CatalogClient::get_all_characters(self).await
    }

    async fn get_episode_by_url(&self, url: &str) -> Result<Episode, ApiError> {
        CatalogClient::get_episode_by_url(self, url).await
    }
}

fn parse_uri(url: &str) -> Result<Uri, ApiError> {
    let uri: Uri = url.parse().map_err(|e: http::uri::InvalidUri| ApiError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(ApiError::InvalidUrl {
            url: url.to_string(),
            reason: "expected an absolute http(s) URL".to_string(),
        });
    }
    Ok(uri)
}

// hyper-util's top-level error only says "client error (Connect)"; the cause is in the source chain.
fn transport_message(err: &hyper_util::client::legacy::Error) -> String {
    let mut msg = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        source = inner.source();
    }
    msg
}
