#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;

pub const SAMPLE_TEMPLATE: &str = r#"AWSTemplateFormatVersion: '2010-09-09'
Description: Sample deployment
Metadata:
  CodeOcean::VersionInfo:
    Version: v3.4.1
    Commit: 0a1b2c3
  AWS::CloudFormation::Interface:
    ParameterGroups:
      - Label:
          default: Networking
        Parameters:
          - VpcCidr
          - PublicSubnetCidr
      - Label:
          default: Compute
        Parameters:
          - WorkerInstanceType
          - VpcCidr
Parameters:
  VpcCidr:
    Type: String
    Default: 10.0.0.0/16
    Description: CIDR block for the VPC
  PublicSubnetCidr:
    Type: String
  WorkerInstanceType:
    Type: String
    Default: r5d.4xlarge
  AdminEmail:
    Type: String
    Description: Administrator email
  AmiId:
    Type: AWS::EC2::Image::Id
Resources:
  Vpc:
    Type: AWS::EC2::VPC
    Properties:
      CidrBlock: !Ref VpcCidr
  PublicSubnetA:
    Type: AWS::EC2::Subnet
  PrivateSubnetB:
    Type: Custom::Subnet
  LogGroupServices:
    Type: Custom::LogGroup
  Notes:
    Type: AWS::SNS::Topic
    Properties:
      Description: Custom note
  Mystery:
    Type: Custom::Thing
Outputs:
  VpcId:
    Value: !Ref Vpc
"#;

pub fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("cfn-docgen").expect("binary built");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A temp dir holding `codeocean.template.yaml` with `content`.
pub fn template_dir(content: &str) -> TempDir {
    let temp = TempDir::new().expect("create temp dir");
    temp.child("codeocean.template.yaml")
        .write_str(content)
        .expect("write template");
    temp
}

/// Table rows (lines starting with `| `) between `heading` and the next `## ` heading.
pub fn table_rows<'a>(report: &'a str, heading: &str) -> Vec<&'a str> {
    report
        .split("\n## ")
        .find(|section| section.trim_start_matches("## ").starts_with(heading))
        .map(|section| {
            section
                .lines()
                .filter(|l| l.starts_with("| "))
                .skip(2)
                .collect()
        })
        .unwrap_or_default()
}
