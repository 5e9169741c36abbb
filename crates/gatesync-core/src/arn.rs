// ── Resource addressing ──
//
// Tag operations address the resource by ARN. The account field is left
// empty: API Gateway ARNs are account-agnostic for this resource family.

use serde::{Deserialize, Serialize};

const SERVICE_NAME: &str = "apigateway";

/// The deployment region, resolved once at process start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub partition: String,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let partition = partition_for(&name).to_owned();
        Self { name, partition }
    }
}

/// Map a region name onto its ARN partition.
fn partition_for(region: &str) -> &'static str {
    if region.starts_with("cn-") {
        "aws-cn"
    } else if region.starts_with("us-gov-") {
        "aws-us-gov"
    } else {
        "aws"
    }
}

/// `arn:{partition}:apigateway:{region}::/restapis/{id}`
pub fn rest_api_arn(region: &Region, rest_api_id: &str) -> String {
    format!(
        "arn:{}:{}:{}::/restapis/{}",
        region.partition, SERVICE_NAME, region.name, rest_api_id
    )
}
