//! Requisition client: one transport call per query, records extracted from the body.
//!
//! There is no retry. A failed call is returned to the caller as-is.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::{
    NoopUpstreamHooks, RequisitionQuery, RequisitionTransport, UpstreamError, UpstreamHooks,
    extract_records,
};

#[derive(Clone)]
pub struct RequisitionClient {
    transport: Arc<dyn RequisitionTransport>,
    hooks: Arc<dyn UpstreamHooks>,
}

impl RequisitionClient {
    pub fn new(transport: Arc<dyn RequisitionTransport>) -> Self {
        Self {
            transport,
            hooks: Arc::new(NoopUpstreamHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn UpstreamHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub async fn list(&self, query: RequisitionQuery) -> Result<Value, UpstreamError> {
        self.hooks.on_request_start(&query);
        let started = Instant::now();

        match self.transport.fetch(query.clone()).await {
            Ok(body) => {
                let records = extract_records(&body);
                self.hooks.on_request_success(&query, started.elapsed());
                Ok(records)
            }
            Err(error) => {
                self.hooks
                    .on_request_failure(&query, &error, started.elapsed());
                Err(error)
            }
        }
    }
}
