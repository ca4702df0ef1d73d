//! Tool Registry
//!
//! The fixed tool catalog. It is the single source of truth both for what
//! `tools/list` advertises and for how `tools/call` reaches the agent service.

use super::models::{HttpVerb, Reply, ToolArgument, ToolDescriptor, ToolSpec};
use std::time::Duration;

/// Timeout for tools that run inference on the agent
pub const CONTENT_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout for the health check tool
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

pub const SRE_CHAT: &str = "sre_chat";
pub const ANALYZE_LOGS: &str = "analyze_logs";
pub const INCIDENT_RESPONSE: &str = "incident_response";
pub const MONITORING_ADVICE: &str = "monitoring_advice";
pub const HEALTH_CHECK: &str = "health_check";

pub static TOOLS: [ToolSpec; 5] = [
    ToolSpec {
        name: SRE_CHAT,
        description: "General SRE chat and consultation",
        argument: Some(ToolArgument {
            name: "message",
            description: "Your SRE question or request",
        }),
        endpoint: "/chat",
        method: HttpVerb::Post,
        timeout: CONTENT_TIMEOUT,
        reply: Reply::Field {
            key: "response",
            placeholder: "No response",
        },
    },
    ToolSpec {
        name: ANALYZE_LOGS,
        description: "Analyze logs for SRE insights",
        argument: Some(ToolArgument {
            name: "logs",
            description: "Log data to analyze",
        }),
        endpoint: "/analyze-logs",
        method: HttpVerb::Post,
        timeout: CONTENT_TIMEOUT,
        reply: Reply::Field {
            key: "analysis",
            placeholder: "No analysis",
        },
    },
    ToolSpec {
        name: INCIDENT_RESPONSE,
        description: "Get incident response guidance",
        argument: Some(ToolArgument {
            name: "incident",
            description: "Incident description",
        }),
        endpoint: "/incident-response",
        method: HttpVerb::Post,
        timeout: CONTENT_TIMEOUT,
        reply: Reply::Field {
            key: "response",
            placeholder: "No response",
        },
    },
    ToolSpec {
        name: MONITORING_ADVICE,
        description: "Get monitoring and alerting advice",
        argument: Some(ToolArgument {
            name: "system",
            description: "System description",
        }),
        endpoint: "/monitoring-advice",
        method: HttpVerb::Post,
        timeout: CONTENT_TIMEOUT,
        reply: Reply::Field {
            key: "advice",
            placeholder: "No advice",
        },
    },
    ToolSpec {
        name: HEALTH_CHECK,
        description: "Check the health status",
        argument: None,
        endpoint: "/health",
        method: HttpVerb::Get,
        timeout: HEALTH_CHECK_TIMEOUT,
        reply: Reply::Document,
    },
];

/// Looks up a tool by its exact name
pub fn find_tool(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|tool| tool.name == name)
}

/// Descriptors for every registered tool, in catalog order
pub fn descriptors() -> Vec<ToolDescriptor> {
    TOOLS.iter().map(ToolSpec::descriptor).collect()
}
