//! Starter config written by `iotsim init`

use crate::domain::value_objects::Variant;

/// Render a commented deployment file for `variant`
///
/// The result validates as-is; the endpoint is a placeholder to replace.
pub fn render_template(variant: Variant) -> String {
    let mut out = String::new();

    out.push_str("# iotsim deployment configuration\n");
    out.push_str("#\n");
    out.push_str("# Every key below can also be set through IOTSIM_* environment variables.\n\n");
    out.push_str(&format!("variant = \"{}\"\n", variant.as_str()));
    out.push_str(&format!("stack_name = \"{}\"\n", variant.default_stack_name()));
    out.push_str("region = \"ap-northeast-2\"\n\n");
    out.push_str("# Networks allowed to reach the coordinator UI\n");
    out.push_str("allowed_cidrs = [\"10.0.0.0/8\"]\n\n");

    match variant {
        Variant::LoadTesting => {
            out.push_str("# Number of load-testing worker replicas\n");
            out.push_str("worker_desired_count = 10\n\n");
        }
        Variant::FaultInjection => {
            out.push_str("# Host pool for the host-networked worker (runs exactly one replica)\n");
            out.push_str("instance_type = \"t2.2xlarge\"\n\n");
        }
    }

    out.push_str("# Serve the coordinator UI over HTTPS\n");
    out.push_str("# certificate_arn = \"arn:aws:acm:ap-northeast-2:123456789012:certificate/...\"\n\n");
    out.push_str("# Basic auth for the coordinator UI (set both or neither)\n");
    out.push_str("# web_username = \"admin\"\n");
    out.push_str("# web_password = \"change-me\"\n\n");

    out.push_str("[mqtt]\n");
    out.push_str("wait_time = 1\n");
    out.push_str("qos = 0\n");
    out.push_str("message = \"Test Message payload\"\n\n");

    let slug = variant.as_str();
    out.push_str("[iot]\n");
    out.push_str("endpoint = \"xxxxxxxxxxxxxx-ats.iot.ap-northeast-2.amazonaws.com\"\n");
    out.push_str(&format!("topic = \"iot-simulator-{}-topic\"\n", slug));
    out.push_str(&format!("thing_name = \"iot-simulator-{}-thing\"\n", slug));

    out
}
