use crate::deserializers::aws::aws_region;
use rusoto_core::region::Region;
use serde::Deserialize;

/// Addressing information shared by every IAM call: the region and, for local runs, a custom
/// endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AwsClientConfig {
    /// Current AWS region. IAM is a global service, any commercial region reaches it.
    #[serde(deserialize_with = "aws_region", default = "default_aws_region")]
    aws_region: Region,

    /// Only used for development. LocalStack endpoint
    #[serde(default = "default_localstack_test_mode_endpoint")]
    pub localstack_test_mode_endpoint: Option<String>,
}

impl AwsClientConfig {
    pub fn new(aws_region: Region, localstack_test_mode_endpoint: Option<String>) -> Self {
        Self {
            aws_region,
            localstack_test_mode_endpoint,
        }
    }

    pub fn region(&self) -> Region {
        match &self.localstack_test_mode_endpoint {
            Some(endpoint) => Region::Custom {
                name: self.aws_region.name().to_owned(),
                endpoint: endpoint.clone(),
            },
            None => self.aws_region.clone(),
        }
    }
}

impl Default for AwsClientConfig {
    fn default() -> Self {
        Self::new(default_aws_region(), default_localstack_test_mode_endpoint())
    }
}

fn default_aws_region() -> Region {
    Region::UsEast1
}

fn default_localstack_test_mode_endpoint() -> Option<String> {
    None
}
