use std::time::Duration;

use crate::{RequisitionQuery, UpstreamError};

pub trait UpstreamHooks: Send + Sync {
    fn on_request_start(&self, _query: &RequisitionQuery) {}

    fn on_request_success(&self, _query: &RequisitionQuery, _elapsed: Duration) {}

    fn on_request_failure(
        &self,
        _query: &RequisitionQuery,
        _error: &UpstreamError,
        _elapsed: Duration,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopUpstreamHooks;

impl UpstreamHooks for NoopUpstreamHooks {}
