//! Requisition transport trait and reqwest-based HTTP implementation.

use std::sync::Arc;

use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};

use crate::{
    API_KEY_HEADER, RESPONSE_LANGUAGE, RequisitionQuery, UpstreamConfig, UpstreamError,
    UpstreamFuture,
};

/// Issues one upstream request and returns the raw body of a successful response.
///
/// Non-success statuses are reported as [`UpstreamErrorKind::Http`](crate::UpstreamErrorKind)
/// errors carrying the status and the response body.
pub trait RequisitionTransport: Send + Sync + std::fmt::Debug {
    fn fetch<'a>(
        &'a self,
        query: RequisitionQuery,
    ) -> UpstreamFuture<'a, Result<String, UpstreamError>>;
}

#[derive(Debug, Clone)]
pub struct HttpRequisitionTransport {
    client: Client,
    config: Arc<UpstreamConfig>,
}

impl HttpRequisitionTransport {
    /// Builds a transport with a client bounded by the configured timeout.
    pub fn new(config: Arc<UpstreamConfig>) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| UpstreamError::configuration(err.to_string()))?;

        Ok(Self { client, config })
    }
}

impl RequisitionTransport for HttpRequisitionTransport {
    fn fetch<'a>(
        &'a self,
        query: RequisitionQuery,
    ) -> UpstreamFuture<'a, Result<String, UpstreamError>> {
        Box::pin(async move {
            let response = self
                .client
                .get(self.config.endpoint())
                .header(API_KEY_HEADER, self.config.api_key().expose())
                .header(ACCEPT, "application/json")
                .header(ACCEPT_LANGUAGE, RESPONSE_LANGUAGE)
                .query(&query.query_pairs())
                .send()
                .await
                .map_err(UpstreamError::from_reqwest)?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(UpstreamError::from_reqwest)?;

            if !status.is_success() {
                return Err(UpstreamError::http(
                    status.as_u16(),
                    format!("upstream request failed with status {status}: {body}"),
                ));
            }

            Ok(body)
        })
    }
}
