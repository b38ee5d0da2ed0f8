//! Hardcoded generation parameters

/// AWS region queried for resources and baked into the template
pub const REGION: &str = "us-east-1";

/// Instance type used for spot price lookups and the rendered requests
pub const INSTANCE_TYPE: &str = "m3.medium";

/// Product description filter for spot price history
pub const PRODUCT_DESCRIPTION: &str = "Linux/UNIX (Amazon VPC)";

/// Key pair created when the account has none
pub const KEY_NAME: &str = "demo-app";

/// Private key output file, written only on key pair creation
pub const KEY_FILE: &str = "demo-app.pem";

/// Rendered template output file
pub const TEMPLATE_FILE: &str = "template.tf";

/// Amazon Linux AMI baked into the rendered spot requests
pub const AMI: &str = "ami-29160d47";

/// Maximum number of subnets consumed from the default VPC
pub const MAX_SUBNETS: usize = 2;
