use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use super::error::{map_put_item_error, map_query_error};
use super::{QueryPage, RecordStore, StoreError};
use crate::record::{item_to_record, record_to_item, Record, PARTITION_ATTR};

/// DynamoDB table holding one item per student.
pub(crate) struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    async fn put(&self, record: &Record) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &self.table_name))?;

        Ok(())
    }

    async fn query(&self, partition_key: &str) -> Result<QueryPage, StoreError> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression(format!("{PARTITION_ATTR} = :university"))
            .expression_attribute_values(":university", AttributeValue::S(partition_key.to_string()))
            .send()
            .await
            .map_err(|e| map_query_error(e, &self.table_name))?;

        Ok(QueryPage {
            items: result
                .items
                .map(|items| items.iter().map(item_to_record).collect()),
            truncated: result.last_evaluated_key.is_some(),
        })
    }
}
