mod common;

use assert_fs::prelude::*;
use common::{cmd, table_rows, template_dir, SAMPLE_TEMPLATE};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn generates_report_next_to_template() {
    let temp = template_dir(SAMPLE_TEMPLATE);
    let template = temp.child("codeocean.template.yaml");

    cmd()
        .arg(template.path())
        .assert()
        .success()
        .stdout(contains("System requirements document generated successfully:"))
        .stdout(contains("System Requirements.md"))
        .stdout(contains("  - Parameters: 5"))
        .stdout(contains("  - Resources: 6"));

    temp.child("System Requirements.md")
        .assert(predicate::str::starts_with("# Code Ocean VPC System Requirements\n\n## Overview"));
}

#[test]
fn report_tables_cover_every_declaration() {
    let temp = template_dir(SAMPLE_TEMPLATE);
    cmd()
        .arg(temp.child("codeocean.template.yaml").path())
        .assert()
        .success();

    let report = fs::read_to_string(temp.child("System Requirements.md").path()).unwrap();
    assert!(report.contains("**Template Version:** v3.4.1  \n**Commit:** 0a1b2c3\n"));

    let parameters = table_rows(&report, "Parameters");
    assert_eq!(
        parameters,
        vec![
            "| **Networking** | | | |",
            "| [VpcCidr](codeocean.template.yaml#L20) | String | `10.0.0.0/16` | CIDR block for the VPC |",
            "| [PublicSubnetCidr](codeocean.template.yaml#L24) | String |  |  |",
            "| **Compute** | | | |",
            "| [WorkerInstanceType](codeocean.template.yaml#L26) | String | `r5d.4xlarge` |  |",
            "| **Other Parameters** | | | |",
            "| [AdminEmail](codeocean.template.yaml#L29) | String |  | Administrator email |",
            "| [AmiId](codeocean.template.yaml#L32) | AWS::EC2::Image::Id |  |  |",
        ]
    );

    let resources = table_rows(&report, "Resources");
    assert_eq!(
        resources,
        vec![
            "| [Vpc](codeocean.template.yaml#L35) | AWS::EC2::VPC | Virtual Private Cloud network |",
            "| [PublicSubnetA](codeocean.template.yaml#L39) | AWS::EC2::Subnet | Network subnet |",
            "| [PrivateSubnetB](codeocean.template.yaml#L41) | Custom::Subnet | Private subnet for internal resources |",
            "| [LogGroupServices](codeocean.template.yaml#L43) | Custom::LogGroup | CloudWatch log group for services |",
            "| [Notes](codeocean.template.yaml#L45) | AWS::SNS::Topic | Custom note |",
            "| [Mystery](codeocean.template.yaml#L49) | Custom::Thing |  |",
        ]
    );
}

#[test]
fn ungrouped_parameters_are_sorted_by_name() {
    let temp = template_dir(
        "Parameters:\n  InstanceType:\n    Type: String\n    Default: \"m5.large\"\n  ClusterSize:\n    Type: Number\n",
    );
    cmd()
        .arg(temp.child("codeocean.template.yaml").path())
        .assert()
        .success();

    let report = fs::read_to_string(temp.child("System Requirements.md").path()).unwrap();
    assert_eq!(
        table_rows(&report, "Parameters"),
        vec![
            "| **Other Parameters** | | | |",
            "| [ClusterSize](codeocean.template.yaml#L5) | Number |  |  |",
            "| [InstanceType](codeocean.template.yaml#L2) | String | `m5.large` |  |",
        ]
    );
    assert!(report.contains("No resources defined in this template."));
}

#[test]
fn public_subnet_name_pattern_applies_to_unknown_type() {
    let temp = template_dir("Resources:\n  PublicSubnetA:\n    Type: Custom::Whatever\n");
    cmd()
        .arg(temp.child("codeocean.template.yaml").path())
        .assert()
        .success();

    temp.child("System Requirements.md").assert(contains(
        "| [PublicSubnetA](codeocean.template.yaml#L2) | Custom::Whatever | Public subnet for internet-accessible resources |",
    ));
}

#[test]
fn explicit_description_overrides_type_and_name() {
    let temp = template_dir(
        "Resources:\n  PublicSubnetA:\n    Type: AWS::EC2::VPC\n    Properties:\n      Description: \"Custom note\"\n",
    );
    cmd()
        .arg(temp.child("codeocean.template.yaml").path())
        .assert()
        .success();

    temp.child("System Requirements.md")
        .assert(contains("| AWS::EC2::VPC | Custom note |"));
}

#[test]
fn malformed_template_leaves_existing_output_untouched() {
    let temp = template_dir("Parameters: {Env: {Type: String}\n");
    let output = temp.child("System Requirements.md");
    output.write_str("previous report").unwrap();

    cmd()
        .arg(temp.child("codeocean.template.yaml").path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error generating requirements document:"))
        .stderr(contains("Error parsing YAML template"));

    output.assert("previous report");
}

#[test]
fn missing_template_fails_without_writing() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("out.md");

    cmd()
        .arg(temp.child("absent.yaml").path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Template file not found"));

    output.assert(predicate::path::missing());
}

#[test]
fn output_override_is_respected() {
    let temp = template_dir(SAMPLE_TEMPLATE);
    let output = temp.child("docs-out.md");

    cmd()
        .arg(temp.child("codeocean.template.yaml").path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stdout(contains("docs-out.md"));

    output.assert(contains("## Resources"));
    temp.child("System Requirements.md").assert(predicate::path::missing());
}

#[test]
fn unwritable_output_is_reported() {
    let temp = template_dir(SAMPLE_TEMPLATE);

    cmd()
        .arg(temp.child("codeocean.template.yaml").path())
        .arg("-o")
        .arg(temp.child("no-such-dir").child("report.md").path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Failed to write report"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let temp = template_dir(SAMPLE_TEMPLATE);
    let template = temp.child("codeocean.template.yaml");
    let report = temp.child("System Requirements.md");

    cmd().arg(template.path()).assert().success();
    let first = fs::read(report.path()).unwrap();
    cmd().arg(template.path()).assert().success();
    let second = fs::read(report.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn dry_run_prints_document_and_writes_nothing() {
    let temp = template_dir(SAMPLE_TEMPLATE);

    cmd()
        .arg(temp.child("codeocean.template.yaml").path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Code Ocean VPC System Requirements"))
        .stdout(contains(
            "| [Notes](codeocean.template.yaml#L45) | AWS::SNS::Topic | Custom note |",
        ));

    temp.child("System Requirements.md").assert(predicate::path::missing());
}

#[test]
fn json_summary() {
    let temp = template_dir(SAMPLE_TEMPLATE);
    let out = cmd()
        .arg(temp.child("codeocean.template.yaml").path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(summary["parameters"], 5);
    assert_eq!(summary["resources"], 6);
    assert!(summary["output"].as_str().unwrap().ends_with("System Requirements.md"));
}

#[test]
fn config_file_customizes_report() {
    let temp = template_dir(SAMPLE_TEMPLATE);
    temp.child("overview.md")
        .write_str("## System Overview\n\nIn-house narrative.\n")
        .unwrap();
    temp.child("docgen.toml")
        .write_str(
            r#"[report]
title = "Platform Requirements"
system_name = "Acme Platform"
source_link = "../infra/stack.yaml"
ungrouped_label = "Advanced"
system_overview = "overview.md"

[output]
file_name = "REQUIREMENTS.md"
"#,
        )
        .unwrap();

    cmd()
        .arg(temp.child("codeocean.template.yaml").path())
        .arg("--config")
        .arg(temp.child("docgen.toml").path())
        .assert()
        .success();

    let report = temp.child("REQUIREMENTS.md");
    report.assert(predicate::str::starts_with("# Platform Requirements\n"));
    report.assert(contains("defined in the Acme Platform CloudFormation template"));
    report.assert(contains("In-house narrative."));
    report.assert(contains("### VPC Network").not());
    report.assert(contains("| **Advanced** | | | |"));
    report.assert(contains("[Vpc](../infra/stack.yaml#L35)"));
}

#[test]
fn invalid_config_is_reported() {
    let temp = template_dir(SAMPLE_TEMPLATE);
    temp.child("docgen.toml").write_str("[report]\nunknown = 1\n").unwrap();

    cmd()
        .arg(temp.child("codeocean.template.yaml").path())
        .arg("--config")
        .arg(temp.child("docgen.toml").path())
        .assert()
        .failure()
        .stderr(contains("Configuration error"));

    temp.child("System Requirements.md").assert(predicate::path::missing());
}
