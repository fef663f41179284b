//! Record store backed by `aws-sdk-dynamodb`.
//!
//! Records map to items with string attributes `Id` (hash key) and `Name`.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Builder as DynamoConfigBuilder;
use aws_sdk_dynamodb::error::{BuildError, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use crate::clients::RecordStoreClient;
use crate::gateway::error::{ServiceError, ServiceFamily};
use crate::models::Record;

const HASH_KEY_ATTRIBUTE: &str = "Id";
const NAME_ATTRIBUTE: &str = "Name";
const READ_CAPACITY_UNITS: i64 = 5;
const WRITE_CAPACITY_UNITS: i64 = 6;

pub struct DynamoRecordStore {
    client: Client,
}

impl DynamoRecordStore {
    pub async fn new(endpoint_url: &str) -> Self {
        let region = aws_config::meta::region::RegionProviderChain::default_provider()
            .or_else("us-east-1");
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let config = DynamoConfigBuilder::from(&sdk_config)
            .endpoint_url(endpoint_url)
            .build();

        Self {
            client: Client::from_conf(config),
        }
    }
}

fn classify<E>(err: SdkError<E>) -> ServiceError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match err {
        SdkError::ServiceError(ctx) => {
            let err = ctx.into_err();
            let message = err
                .message()
                .map(str::to_owned)
                .unwrap_or_else(|| err.to_string());
            ServiceError::ServiceSpecific {
                family: ServiceFamily::Dynamo,
                message,
            }
        }
        other => ServiceError::Generic(other.to_string()),
    }
}

fn build_error(err: BuildError) -> ServiceError {
    ServiceError::Unknown(format!("invalid table definition: {err}"))
}

fn to_item(record: &Record) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            HASH_KEY_ATTRIBUTE.to_string(),
            AttributeValue::S(record.id.clone()),
        ),
        (
            NAME_ATTRIBUTE.to_string(),
            AttributeValue::S(record.name.clone()),
        ),
    ])
}

fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Record, ServiceError> {
    let id = item
        .get(HASH_KEY_ATTRIBUTE)
        .and_then(|v| v.as_s().ok())
        .ok_or_else(|| ServiceError::Unknown("stored item is missing the Id attribute".into()))?;
    let name = item
        .get(NAME_ATTRIBUTE)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .unwrap_or_default();

    Ok(Record {
        id: id.clone(),
        name,
    })
}

#[async_trait]
impl RecordStoreClient for DynamoRecordStore {
    async fn list_tables(&self) -> Result<Vec<String>, ServiceError> {
        let output = self.client.list_tables().send().await.map_err(classify)?;
        Ok(output.table_names().to_vec())
    }

    async fn create_table(&self, name: &str) -> Result<(), ServiceError> {
        let attribute = AttributeDefinition::builder()
            .attribute_name(HASH_KEY_ATTRIBUTE)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(build_error)?;
        let key_schema = KeySchemaElement::builder()
            .attribute_name(HASH_KEY_ATTRIBUTE)
            .key_type(KeyType::Hash)
            .build()
            .map_err(build_error)?;
        let throughput = ProvisionedThroughput::builder()
            .read_capacity_units(READ_CAPACITY_UNITS)
            .write_capacity_units(WRITE_CAPACITY_UNITS)
            .build()
            .map_err(build_error)?;

        self.client
            .create_table()
            .table_name(name)
            .attribute_definitions(attribute)
            .key_schema(key_schema)
            .provisioned_throughput(throughput)
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn put_record(&self, table: &str, record: &Record) -> Result<(), ServiceError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(to_item(record)))
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn scan_records(&self, table: &str) -> Result<Vec<Record>, ServiceError> {
        let mut stream = self
            .client
            .scan()
            .table_name(table)
            .into_paginator()
            .items()
            .send();

        let mut records = Vec::new();
        while let Some(item) = stream.next().await {
            let item = item.map_err(classify)?;
            records.push(from_item(&item)?);
        }
        Ok(records)
    }

    async fn get_record(&self, table: &str, id: &str) -> Result<Option<Record>, ServiceError> {
        let output = self
            .client
            .get_item()
            .table_name(table)
            .key(HASH_KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(classify)?;

        output.item().map(from_item).transpose()
    }
}
