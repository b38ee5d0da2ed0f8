//! EC2 lookups for the generate command

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_ec2::{
    types::{Filter, InstanceType},
    Client,
};
use tracing::debug;

use crate::config;

/// A subnet of the default VPC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    pub subnet_id: String,
    pub availability_zone: String,
}

/// A freshly created key pair, private material included.
///
/// The API only returns private material at creation time; pre-existing
/// key pairs come back as a bare name.
#[derive(Debug, Clone)]
pub struct CreatedKeyPair {
    pub key_name: String,
    pub key_material: String,
}

/// The EC2 operations the generate command needs.
///
/// Implemented by [`Ec2Client`] over the real SDK and by fixture-backed
/// mocks in tests.
#[async_trait]
pub trait Ec2Api: Send + Sync {
    /// Id of the account's default VPC, if one exists
    async fn default_vpc(&self) -> Result<Option<String>>;

    /// Subnets belonging to the given VPC, in API order
    async fn subnets(&self, vpc_id: &str) -> Result<Vec<Subnet>>;

    /// Name of the first existing key pair, if any exist
    async fn first_key_pair(&self) -> Result<Option<String>>;

    /// Create a key pair and return its private material
    async fn create_key_pair(&self, name: &str) -> Result<CreatedKeyPair>;

    /// Most recent spot price for the fixed instance type in the given zone
    async fn latest_spot_price(&self, availability_zone: &str) -> Result<Option<String>>;
}

/// EC2 client bound to the hardcoded region
pub struct Ec2Client {
    client: Client,
}

impl Ec2Client {
    /// Create a new EC2 client
    pub async fn new(region: &str) -> Result<Self> {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;

        let client = Client::new(&config);

        Ok(Self { client })
    }
}

#[async_trait]
impl Ec2Api for Ec2Client {
    async fn default_vpc(&self) -> Result<Option<String>> {
        let response = self
            .client
            .describe_vpcs()
            .filters(Filter::builder().name("isDefault").values("true").build())
            .send()
            .await
            .context("Failed to describe VPCs")?;

        let vpc_id = response
            .vpcs()
            .first()
            .and_then(|vpc| vpc.vpc_id())
            .map(|id| id.to_string());

        debug!(vpc_id = ?vpc_id, "Default VPC lookup");

        Ok(vpc_id)
    }

    async fn subnets(&self, vpc_id: &str) -> Result<Vec<Subnet>> {
        let response = self
            .client
            .describe_subnets()
            .filters(Filter::builder().name("vpc-id").values(vpc_id).build())
            .send()
            .await
            .context("Failed to describe subnets")?;

        let subnets = response
            .subnets()
            .iter()
            .filter_map(|subnet| {
                Some(Subnet {
                    subnet_id: subnet.subnet_id()?.to_string(),
                    availability_zone: subnet.availability_zone()?.to_string(),
                })
            })
            .collect();

        Ok(subnets)
    }

    async fn first_key_pair(&self) -> Result<Option<String>> {
        let response = self
            .client
            .describe_key_pairs()
            .send()
            .await
            .context("Failed to describe key pairs")?;

        Ok(response
            .key_pairs()
            .first()
            .and_then(|key_pair| key_pair.key_name())
            .map(|name| name.to_string()))
    }

    async fn create_key_pair(&self, name: &str) -> Result<CreatedKeyPair> {
        let response = self
            .client
            .create_key_pair()
            .key_name(name)
            .send()
            .await
            .context("Failed to create key pair")?;

        let key_name = response
            .key_name()
            .context("No key name in response")?
            .to_string();

        let key_material = response
            .key_material()
            .context("No key material in response")?
            .to_string();

        Ok(CreatedKeyPair {
            key_name,
            key_material,
        })
    }

    async fn latest_spot_price(&self, availability_zone: &str) -> Result<Option<String>> {
        let response = self
            .client
            .describe_spot_price_history()
            .instance_types(InstanceType::from(config::INSTANCE_TYPE))
            .product_descriptions(config::PRODUCT_DESCRIPTION)
            .availability_zone(availability_zone)
            .send()
            .await
            .context("Failed to describe spot price history")?;

        Ok(response
            .spot_price_history()
            .first()
            .and_then(|entry| entry.spot_price())
            .map(|price| price.to_string()))
    }
}
