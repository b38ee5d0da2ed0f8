//! tfgen - Terraform template generation from the AWS default VPC
//!
//! Queries EC2 for the account's default networking resources (VPC, subnets,
//! a key pair, current spot prices) and renders a `template.tf` seeded with
//! the collected values.

pub mod aws;
pub mod config;
pub mod generate;
pub mod template;
