//! The `list_purchase_requisitions` tool.
//!
//! Validated arguments map onto OData query options (`top` to `$top`, `select` to `$select`,
//! `filter` to `$filter`) and the extracted upstream records become the success payload.

use serde_json::{Map, Value, json};

use rtooling::{
    InputSchema, InvocationContext, ParamSpec, Tool, ToolDescriptor, ToolError, ToolFuture,
    optional_string, required_integer,
};
use rupstream::{DEFAULT_TOP, RequisitionClient, RequisitionQuery, UpstreamError, UpstreamErrorKind};

use crate::MAX_TOP;

pub const LIST_PURCHASE_REQUISITIONS: &str = "list_purchase_requisitions";

const DESCRIPTION: &str = "Retrieve purchase requisitions from the SAP sandbox OData endpoint. \
Supports optional $select and $filter expressions to trim the payload.";

/// HTTP status reported when the upstream gave no response at all.
const BAD_GATEWAY: u16 = 502;
const GATEWAY_TIMEOUT: u16 = 504;

#[derive(Clone)]
pub struct PurchaseRequisitionTool {
    client: RequisitionClient,
    default_top: u32,
}

impl PurchaseRequisitionTool {
    pub fn new(client: RequisitionClient) -> Self {
        Self {
            client,
            default_top: DEFAULT_TOP,
        }
    }

    pub fn with_default_top(mut self, default_top: u32) -> Self {
        self.default_top = default_top;
        self
    }

    fn query_from(&self, args: &Map<String, Value>) -> Result<RequisitionQuery, ToolError> {
        let top = match args.get("top") {
            Some(_) => required_integer(args, "top")?,
            None => i64::from(self.default_top),
        };
        let top = u32::try_from(top)
            .map_err(|_| ToolError::invalid_field("top", "must be a positive integer"))?;

        let mut query = RequisitionQuery::new(top);
        if let Some(select) = optional_string(args, "select") {
            query = query.with_select(select);
        }
        if let Some(filter) = optional_string(args, "filter") {
            query = query.with_filter(filter);
        }
        Ok(query)
    }
}

impl Tool for PurchaseRequisitionTool {
    fn descriptor(&self) -> ToolDescriptor {
        let schema = InputSchema::new()
            .param(
                ParamSpec::integer("top")
                    .with_default(json!(self.default_top))
                    .with_minimum(1)
                    .with_maximum(i64::from(MAX_TOP))
                    .with_description("Maximum number of requisitions to return"),
            )
            .param(
                ParamSpec::string("select")
                    .with_description("Comma-separated list of fields for $select"),
            )
            .param(ParamSpec::string("filter").with_description("OData $filter expression"));

        ToolDescriptor::new(LIST_PURCHASE_REQUISITIONS, DESCRIPTION, schema)
    }

    fn invoke<'a>(
        &'a self,
        args: Map<String, Value>,
        context: &'a InvocationContext,
    ) -> ToolFuture<'a, Result<Value, ToolError>> {
        Box::pin(async move {
            let query = self.query_from(&args)?;
            tracing::debug!(
                request_id = %context.request_id,
                query = %query.to_query_string(),
                "listing purchase requisitions"
            );

            self.client.list(query).await.map_err(upstream_failure)
        })
    }
}

/// Maps an upstream failure onto the tool error surface.
///
/// HTTP failures keep the upstream status. Timeouts report 504 and other transport failures 502.
pub fn upstream_failure(error: UpstreamError) -> ToolError {
    match error.kind {
        UpstreamErrorKind::Configuration => ToolError::configuration(error.message),
        UpstreamErrorKind::Http => {
            let status = error.status.unwrap_or(BAD_GATEWAY);
            ToolError::upstream(format!("SAP API request failed: {}", error.message))
                .with_status(status)
                .with_detail(json!({ "status": status }))
        }
        UpstreamErrorKind::Timeout => {
            ToolError::upstream(format!("SAP API request timed out: {}", error.message))
                .with_status(GATEWAY_TIMEOUT)
        }
        UpstreamErrorKind::Transport => {
            ToolError::upstream(format!("SAP API request failed: {}", error.message))
                .with_status(BAD_GATEWAY)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rtooling::ToolErrorKind;
    use rupstream::{RequisitionTransport, UpstreamFuture};

    use super::*;

    #[derive(Debug)]
    struct EchoTransport;

    impl RequisitionTransport for EchoTransport {
        fn fetch<'a>(
            &'a self,
            query: RequisitionQuery,
        ) -> UpstreamFuture<'a, Result<String, UpstreamError>> {
            Box::pin(async move {
                Ok(json!({ "value": [{ "query": query.to_query_string() }] }).to_string())
            })
        }
    }

    fn tool() -> PurchaseRequisitionTool {
        PurchaseRequisitionTool::new(RequisitionClient::new(Arc::new(EchoTransport)))
    }

    #[test]
    fn descriptor_declares_optional_top_select_and_filter() {
        let descriptor = tool().with_default_top(7).descriptor();
        let schema = descriptor.input_schema.to_json_schema();

        assert_eq!(descriptor.name, LIST_PURCHASE_REQUISITIONS);
        assert_eq!(schema["required"], json!([]));
        assert_eq!(schema["properties"]["top"]["type"], "integer");
        assert_eq!(schema["properties"]["top"]["default"], 7);
        assert_eq!(schema["properties"]["top"]["maximum"], 200);
        assert_eq!(schema["properties"]["select"]["type"], "string");
        assert_eq!(schema["properties"]["filter"]["type"], "string");
    }

    #[tokio::test]
    async fn blank_select_and_filter_are_not_forwarded() {
        let mut args = Map::new();
        args.insert("top".to_string(), json!(2));
        args.insert("select".to_string(), json!(""));
        args.insert("filter".to_string(), json!("Plant eq '1000'"));

        let payload = tool()
            .invoke(args, &InvocationContext::new("req-1"))
            .await
            .expect("invocation should succeed");

        assert_eq!(payload, json!([{ "query": "$top=2&$filter=Plant eq '1000'" }]));
    }

    #[tokio::test]
    async fn missing_top_falls_back_to_the_configured_default() {
        let payload = tool()
            .with_default_top(9)
            .invoke(Map::new(), &InvocationContext::new("req-2"))
            .await
            .expect("invocation should succeed");

        assert_eq!(payload, json!([{ "query": "$top=9" }]));
    }

    #[test]
    fn http_failures_keep_status_and_body() {
        let error = upstream_failure(UpstreamError::http(
            500,
            "upstream request failed with status 500 Internal Server Error: boom",
        ));

        assert_eq!(error.kind, ToolErrorKind::Upstream);
        assert_eq!(error.code(), "upstream_error");
        assert_eq!(error.status, Some(500));
        assert_eq!(error.detail, Some(json!({ "status": 500 })));
        assert!(error.message.contains("boom"));
    }

    #[test]
    fn transport_failures_map_to_gateway_statuses() {
        let timeout = upstream_failure(UpstreamError::timeout("operation timed out"));
        assert_eq!(timeout.status, Some(504));
        assert_eq!(timeout.detail, None);

        let refused = upstream_failure(UpstreamError::transport("connection refused"));
        assert_eq!(refused.status, Some(502));
        assert!(refused.message.contains("connection refused"));

        let misconfigured = upstream_failure(UpstreamError::configuration("bad client"));
        assert_eq!(misconfigured.kind, ToolErrorKind::Configuration);
    }
}
