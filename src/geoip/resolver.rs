//! Geolocation lookups against the ipstack HTTP API.

use log::debug;
use serde_json::Value;

use super::classify::{FieldShapeClassifier, ResponseClassifier};
use super::types::ResolutionOutcome;
use crate::config::Config;
use crate::error_handling::LookupError;
use crate::extract::BanToken;

/// Something that can turn a ban token into a [`ResolutionOutcome`].
///
/// The pipeline is generic over this so tests can count and script lookups.
#[allow(async_fn_in_trait)] // Only used through generics, never boxed
pub trait GeoLookup {
    async fn resolve(&self, token: &BanToken) -> Result<ResolutionOutcome, LookupError>;
}

/// Endpoint and credential for the geolocation service.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL, without a trailing path
    pub endpoint: String,
    pub access_key: String,
}

impl From<&Config> for LookupConfig {
    fn from(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            access_key: config.access_key.clone(),
        }
    }
}

/// Resolves ban tokens through the geolocation service.
///
/// One GET per call, no retries and no caching: a token banned twice is
/// looked up twice.
pub struct GeoResolver<C = FieldShapeClassifier> {
    client: reqwest::Client,
    config: LookupConfig,
    classifier: C,
}

impl GeoResolver<FieldShapeClassifier> {
    pub fn new(client: reqwest::Client, config: LookupConfig) -> Self {
        Self::with_classifier(client, config, FieldShapeClassifier)
    }
}

impl<C: ResponseClassifier> GeoResolver<C> {
    pub fn with_classifier(client: reqwest::Client, config: LookupConfig, classifier: C) -> Self {
        Self {
            client,
            config,
            classifier,
        }
    }

    /// Builds `{endpoint}/{ip}?access_key={key}`.
    pub fn lookup_url(&self, token: &BanToken) -> String {
        format!(
            "{}/{}?access_key={}",
            self.config.endpoint.trim_end_matches('/'),
            token,
            self.config.access_key
        )
    }
}

impl<C: ResponseClassifier> GeoLookup for GeoResolver<C> {
    /// Looks up `token` and classifies the response body.
    ///
    /// The HTTP status is not inspected: the service reports its own errors in
    /// the body, which the classifier handles.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the request fails or the body is not JSON.
    async fn resolve(&self, token: &BanToken) -> Result<ResolutionOutcome, LookupError> {
        let response = self.client.get(self.lookup_url(token)).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;

        let outcome = self.classifier.classify(&value);
        debug!("Lookup {} -> HTTP {} {:?}", token, status.as_u16(), outcome);
        Ok(outcome)
    }
}
