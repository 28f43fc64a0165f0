//! Record storage.
//!
//! The handler only needs two capabilities from the table: an upsert and a
//! partition query. `RecordStore` captures exactly that so the handler can
//! run against DynamoDB in production and an in-memory store in tests.

mod dynamodb;
mod error;
#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;

use crate::record::Record;

pub(crate) use dynamodb::DynamoDbStore;
pub(crate) use error::StoreError;

/// One query response, as returned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct QueryPage {
    /// Matching records in store order. `None` when the response carried no items list.
    pub items: Option<Vec<Record>>,
    /// The store stopped early and handed back a continuation key.
    pub truncated: bool,
}

#[async_trait]
pub(crate) trait RecordStore: Send + Sync {
    /// Stores `record`, replacing any item with the same key.
    async fn put(&self, record: &Record) -> Result<(), StoreError>;

    /// Returns the first page of records whose partition key equals `partition_key`.
    async fn query(&self, partition_key: &str) -> Result<QueryPage, StoreError>;
}
