//! Template context and rendering
//!
//! Rendering is a pure function over the collected context; writing the
//! result to disk is the caller's job.

use crate::config;

/// Spot price observed for one subnet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotPriceRecord {
    pub subnet_id: String,
    pub price: String,
}

/// Everything the template needs, collected once and never mutated
#[derive(Debug)]
pub struct TemplateContext {
    pub region: String,
    pub vpc_id: String,
    pub spot_prices: Vec<SpotPriceRecord>,
    pub key_name: String,
}

/// Render the Terraform template for the given context
pub fn render(context: &TemplateContext) -> String {
    let mut out = format!(
        r#"provider "aws" {{
  region = "{region}"
}}

resource "aws_security_group" "demo_app" {{
  name   = "demo-app"
  vpc_id = "{vpc_id}"

  egress {{
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }}
}}
"#,
        region = context.region,
        vpc_id = context.vpc_id,
    );

    for (index, record) in context.spot_prices.iter().enumerate() {
        out.push_str(&format!(
            r#"
resource "aws_spot_instance_request" "demo_app_{index}" {{
  ami                    = "{ami}"
  spot_price             = "{price}"
  instance_type          = "{instance_type}"
  subnet_id              = "{subnet_id}"
  key_name               = "{key_name}"
  vpc_security_group_ids = [aws_security_group.demo_app.id]
}}
"#,
            index = index,
            ami = config::AMI,
            price = record.price,
            instance_type = config::INSTANCE_TYPE,
            subnet_id = record.subnet_id,
            key_name = context.key_name,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> TemplateContext {
        TemplateContext {
            region: "us-east-1".to_string(),
            vpc_id: "vpc-1234abcd".to_string(),
            spot_prices: vec![
                SpotPriceRecord {
                    subnet_id: "subnet-aaaa1111".to_string(),
                    price: "0.0095".to_string(),
                },
                SpotPriceRecord {
                    subnet_id: "subnet-bbbb2222".to_string(),
                    price: "0.0102".to_string(),
                },
            ],
            key_name: "demo-app".to_string(),
        }
    }

    #[test]
    fn render_includes_all_context_fields() {
        let rendered = render(&context());

        assert!(rendered.contains(r#"region = "us-east-1""#));
        assert!(rendered.contains("vpc-1234abcd"));
        assert!(rendered.contains("subnet-aaaa1111"));
        assert!(rendered.contains("subnet-bbbb2222"));
        assert!(rendered.contains("0.0095"));
        assert!(rendered.contains("0.0102"));
        assert!(rendered.contains(r#"key_name               = "demo-app""#));
    }

    #[test]
    fn render_keeps_subnet_order() {
        let rendered = render(&context());

        let first = rendered.find("subnet-aaaa1111").unwrap();
        let second = rendered.find("subnet-bbbb2222").unwrap();
        assert!(first < second);
    }

    #[test]
    fn render_is_deterministic() {
        let context = context();
        assert_eq!(render(&context), render(&context));
    }

    #[test]
    fn render_without_subnets_emits_no_spot_requests() {
        let context = TemplateContext {
            spot_prices: Vec::new(),
            ..context()
        };

        let rendered = render(&context);
        assert!(!rendered.contains("aws_spot_instance_request"));
        assert!(rendered.contains("vpc-1234abcd"));
    }
}
