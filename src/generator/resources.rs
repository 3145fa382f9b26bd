//! # Resource Describer
//!
//! Derives a one-line description for every resource. Rules are evaluated in a
//! fixed order and the first one that produces text wins:
//!
//! 1. an explicit `Properties.Description`
//! 2. the canonical description of a known resource type
//! 3. a heuristic on the logical name
//!
//! When nothing matches the description is empty.

use crate::template::{ConfigDocument, DeclarationKind, LineIndex, ResourceSpec};

/// Canonical descriptions for well-known resource types.
pub const KNOWN_RESOURCE_TYPES: &[(&str, &str)] = &[
    ("AWS::EC2::VPC", "Virtual Private Cloud network"),
    ("AWS::EC2::Subnet", "Network subnet"),
    ("AWS::EC2::InternetGateway", "Internet gateway for public access"),
    ("AWS::EC2::NatGateway", "NAT gateway for private subnet internet access"),
    ("AWS::EC2::RouteTable", "Route table for network routing"),
    ("AWS::EC2::Route", "Network route definition"),
    ("AWS::EC2::SecurityGroup", "Security group for access control"),
    ("AWS::EC2::Instance", "EC2 compute instance"),
    ("AWS::EC2::EIP", "Elastic IP address"),
    ("AWS::EIP", "Elastic IP address"),
    ("AWS::RDS::DBInstance", "RDS database instance"),
    ("AWS::Logs::LogGroup", "CloudWatch log group"),
    ("AWS::S3::Bucket", "S3 storage bucket"),
    ("AWS::EFS::FileSystem", "EFS file system"),
    ("AWS::SNS::Topic", "SNS notification topic"),
    ("AWS::Route53::HostedZone", "Route53 hosted zone"),
    ("AWS::CloudFormation::WaitCondition", "Wait condition for stack coordination"),
    ("AWS::CloudFormation::WaitConditionHandle", "Wait condition handle"),
];

/// A logical-name heuristic: every fragment must appear in the name.
#[derive(Debug, Clone, Copy)]
pub struct NamePattern {
    pub fragments: &'static [&'static str],
    pub description: &'static str,
}

pub const NAME_PATTERNS: &[NamePattern] = &[
    NamePattern {
        fragments: &["Public", "Subnet"],
        description: "Public subnet for internet-accessible resources",
    },
    NamePattern {
        fragments: &["Private", "Subnet"],
        description: "Private subnet for internal resources",
    },
    NamePattern {
        fragments: &["LogGroup", "Services"],
        description: "CloudWatch log group for services",
    },
    NamePattern {
        fragments: &["LogGroup", "Workers"],
        description: "CloudWatch log group for workers",
    },
    NamePattern {
        fragments: &["LogGroup", "Lambda"],
        description: "CloudWatch log group for Lambda functions",
    },
    NamePattern {
        fragments: &["LogGroup", "Instances"],
        description: "CloudWatch log group for EC2 instances",
    },
    NamePattern {
        fragments: &["LogGroup", "Pipelines"],
        description: "CloudWatch log group for pipelines",
    },
];

impl NamePattern {
    pub fn matches(&self, name: &str) -> bool {
        self.fragments.iter().all(|f| name.contains(f))
    }
}

/// One step of the description precedence chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionRule {
    Explicit,
    KnownType,
    NamePattern,
}

/// Evaluation order of the rules.
pub const DESCRIPTION_RULES: &[DescriptionRule] = &[
    DescriptionRule::Explicit,
    DescriptionRule::KnownType,
    DescriptionRule::NamePattern,
];

impl DescriptionRule {
    pub fn apply(self, resource: &ResourceSpec) -> Option<String> {
        match self {
            DescriptionRule::Explicit => resource.explicit_description().map(|d| d.to_string()),
            DescriptionRule::KnownType => {
                let resource_type = resource.resource_type.as_deref()?;
                KNOWN_RESOURCE_TYPES
                    .iter()
                    .find(|(known, _)| *known == resource_type)
                    .map(|(_, description)| description.to_string())
            }
            DescriptionRule::NamePattern => NAME_PATTERNS
                .iter()
                .find(|pattern| pattern.matches(&resource.name))
                .map(|pattern| pattern.description.to_string()),
        }
    }
}

/// Description of `resource`, or an empty string when no rule applies.
pub fn describe_resource(resource: &ResourceSpec) -> String {
    DESCRIPTION_RULES
        .iter()
        .find_map(|rule| rule.apply(resource))
        .unwrap_or_default()
}

/// A resource as presented in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRow<'a> {
    pub spec: &'a ResourceSpec,
    pub line: Option<usize>,
    pub description: String,
}

/// One row per resource, in declaration order.
pub fn describe_resources<'a>(
    document: &'a ConfigDocument,
    index: &LineIndex,
) -> Vec<ResourceRow<'a>> {
    document
        .resources()
        .iter()
        .map(|spec| {
            let description = describe_resource(spec);
            if description.is_empty() {
                log::debug!(
                    "No description derived for resource {} ({})",
                    spec.name,
                    spec.type_label()
                );
            }
            ResourceRow {
                spec,
                line: index.line(DeclarationKind::Resource, &spec.name),
                description,
            }
        })
        .collect()
}
