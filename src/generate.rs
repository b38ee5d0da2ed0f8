//! The generate command: collect facts from EC2 and render `template.tf`

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::aws::Ec2Api;
use crate::config;
use crate::template::{self, SpotPriceRecord, TemplateContext};

/// Run the generate sequence against `ec2`, writing outputs under `out_dir`.
///
/// Writes `template.tf` on success and `demo-app.pem` only when no key pair
/// exists yet. Both writes overwrite without confirmation.
pub async fn run(ec2: &impl Ec2Api, out_dir: &Path) -> Result<()> {
    let vpc_id = ec2
        .default_vpc()
        .await?
        .context("No default VPC found in this account")?;

    info!(vpc_id = %vpc_id, "Found default VPC");

    let mut subnets = ec2.subnets(&vpc_id).await?;
    subnets.truncate(config::MAX_SUBNETS);

    info!(count = subnets.len(), "Using subnets of the default VPC");

    let key_name = match ec2.first_key_pair().await? {
        Some(name) => {
            info!(key_name = %name, "Reusing existing key pair");
            name
        }
        None => {
            let created = ec2.create_key_pair(config::KEY_NAME).await?;

            let key_path = out_dir.join(config::KEY_FILE);
            fs::write(&key_path, &created.key_material)
                .with_context(|| format!("Failed to write {}", key_path.display()))?;

            info!(key_name = %created.key_name, path = %key_path.display(), "Created key pair");
            created.key_name
        }
    };

    let mut spot_prices = Vec::with_capacity(subnets.len());
    for subnet in &subnets {
        let price = ec2
            .latest_spot_price(&subnet.availability_zone)
            .await?
            .with_context(|| {
                format!(
                    "No spot price history for {} in {}",
                    config::INSTANCE_TYPE,
                    subnet.availability_zone
                )
            })?;

        info!(subnet_id = %subnet.subnet_id, price = %price, "Found spot price");

        spot_prices.push(SpotPriceRecord {
            subnet_id: subnet.subnet_id.clone(),
            price,
        });
    }

    let context = TemplateContext {
        region: config::REGION.to_string(),
        vpc_id,
        spot_prices,
        key_name,
    };

    let rendered = template::render(&context);
    let template_path = out_dir.join(config::TEMPLATE_FILE);
    fs::write(&template_path, rendered)
        .with_context(|| format!("Failed to write {}", template_path.display()))?;

    info!(path = %template_path.display(), "Template written");

    Ok(())
}
