//! Wiring helpers that assemble the gateway from configuration or an explicit transport.

use std::sync::Arc;

use robserve::{ObservabilityHooks, SafeToolGatewayHooks, SafeUpstreamHooks};
use rtooling::{DefaultToolGateway, ToolRegistry};
use rupstream::{HttpRequisitionTransport, RequisitionClient, RequisitionTransport};

use crate::{AppConfig, ConfigError, PurchaseRequisitionTool};

/// Builds the registry holding the purchase requisition tool.
pub fn requisition_registry(
    transport: Arc<dyn RequisitionTransport>,
    default_top: u32,
) -> Result<ToolRegistry, ConfigError> {
    let client = RequisitionClient::new(transport)
        .with_hooks(Arc::new(SafeUpstreamHooks::new(ObservabilityHooks::default())));

    let mut registry = ToolRegistry::new();
    registry
        .register(PurchaseRequisitionTool::new(client).with_default_top(default_top))
        .map_err(|err| ConfigError::invalid(err.message))?;
    Ok(registry)
}

/// Builds an observed gateway over `transport`.
pub fn build_gateway_with(
    transport: Arc<dyn RequisitionTransport>,
    default_top: u32,
) -> Result<DefaultToolGateway, ConfigError> {
    let registry = requisition_registry(transport, default_top)?;

    Ok(DefaultToolGateway::new(Arc::new(registry))
        .with_hooks(Arc::new(SafeToolGatewayHooks::new(ObservabilityHooks::default()))))
}

/// Builds the gateway against the configured SAP endpoint.
pub fn build_gateway(config: &AppConfig) -> Result<DefaultToolGateway, ConfigError> {
    let upstream = config.upstream_config()?;
    tracing::info!(
        upstream = %upstream.endpoint(),
        timeout_secs = upstream.timeout().as_secs(),
        default_top = config.default_top,
        "configured requisition upstream"
    );

    let transport = HttpRequisitionTransport::new(upstream)?;
    build_gateway_with(Arc::new(transport), config.default_top)
}

#[cfg(test)]
mod tests {
    use rtooling::ToolGateway;

    use super::*;
    use crate::LIST_PURCHASE_REQUISITIONS;

    #[test]
    fn build_gateway_registers_the_single_tool() {
        let config = AppConfig::from_vars([
            ("SAP_API_KEY".to_string(), "sandbox-key".to_string()),
            ("DEFAULT_TOP".to_string(), "12".to_string()),
        ])
        .expect("config should load");

        let gateway = build_gateway(&config).expect("gateway should build");
        let tools = gateway.discover();

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, LIST_PURCHASE_REQUISITIONS);
        assert_eq!(
            tools[0].input_schema.to_json_schema()["properties"]["top"]["default"],
            12
        );
    }
}
