//! AWS service clients

pub mod ec2;

pub use ec2::{CreatedKeyPair, Ec2Api, Ec2Client, Subnet};
