//! Shared fixtures for handler tests.

use std::sync::Arc;

use crate::adapters::markup::XmlMarkupParser;
use crate::adapters::storage::InMemoryDocumentSource;
use crate::application::pipeline::process_tree;
use crate::application::DocumentRegistry;
use crate::domain::foundation::DocumentId;
use crate::ports::MarkupParser;

/// Two indicators: a four-point series and a direct target/actual pair.
pub const LIBRARY_PLAN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<StrategicPlan Version="2.1">
  <Name>City Library Plan</Name>
  <Description>Five year plan</Description>
  <OrganizationName>City Library</OrganizationName>
  <VisionStatement><Description>Readers everywhere</Description></VisionStatement>
  <Goal>
    <Name>Grow membership</Name>
    <Objective>
      <Name>Sign up new readers</Name>
      <PerformanceIndicator>
        <Name>New members</Name>
        <UnitOfMeasurement>members</UnitOfMeasurement>
        <PerformanceMeasurement><MeasurementDate>2021</MeasurementDate><TargetValue>100</TargetValue><ActualValue>80</ActualValue></PerformanceMeasurement>
        <PerformanceMeasurement><MeasurementDate>2022</MeasurementDate><TargetValue>100</TargetValue><ActualValue>90</ActualValue></PerformanceMeasurement>
        <PerformanceMeasurement><MeasurementDate>2023</MeasurementDate><TargetValue>100</TargetValue><ActualValue>105</ActualValue></PerformanceMeasurement>
        <PerformanceMeasurement><MeasurementDate>2024</MeasurementDate><TargetValue>100</TargetValue><ActualValue>120</ActualValue></PerformanceMeasurement>
      </PerformanceIndicator>
      <PerformanceIndicator>
        <Name>Branch visits</Name>
        <TargetValue>200</TargetValue>
        <ActualValue>100</ActualValue>
      </PerformanceIndicator>
    </Objective>
  </Goal>
</StrategicPlan>"#;

pub const NOT_A_PLAN: &str = "<Inventory><Item>Chair</Item></Inventory>";

pub const MALFORMED: &str = "<StrategicPlan><Goal></StrategicPlan>";

pub fn source_with(files: &[(&str, &str)]) -> Arc<InMemoryDocumentSource> {
    Arc::new(InMemoryDocumentSource::with_documents(files.iter().copied()))
}

/// A registry holding `content` as its only, processed, document.
pub async fn registry_with_processed(content: &str) -> (DocumentRegistry, DocumentId) {
    let registry = DocumentRegistry::new();
    let tree = XmlMarkupParser::new().parse(content).unwrap();
    let id = registry.append("plan.xml", content.len() as u64, tree).await;
    let doc = registry.get(id).await.unwrap();
    let processed = process_tree(id, &doc.file_name, &doc.tree).unwrap();
    registry.record_processed(id, Arc::new(processed)).await.unwrap();
    (registry, id)
}
