//! In-memory store for handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{QueryPage, RecordStore, StoreError};
use crate::record::Record;

/// Records every put and answers queries from a canned response.
///
/// Queries do not see earlier puts; the response is whatever the test primed.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryStore {
    puts: Arc<Mutex<Vec<Record>>>,
    queries: Arc<Mutex<Vec<String>>>,
    page: QueryPage,
    put_error: Option<StoreError>,
    query_error: Option<StoreError>,
}

impl MemoryStore {
    pub fn with_records(records: Vec<Record>) -> Self {
        Self::with_page(QueryPage {
            items: Some(records),
            truncated: false,
        })
    }

    pub fn with_page(page: QueryPage) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn failing_put(mut self, err: StoreError) -> Self {
        self.put_error = Some(err);
        self
    }

    pub fn failing_query(mut self, err: StoreError) -> Self {
        self.query_error = Some(err);
        self
    }

    pub fn puts(&self) -> Vec<Record> {
        self.puts.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn put(&self, record: &Record) -> Result<(), StoreError> {
        if let Some(err) = &self.put_error {
            return Err(err.clone());
        }
        self.puts.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn query(&self, partition_key: &str) -> Result<QueryPage, StoreError> {
        self.queries.lock().unwrap().push(partition_key.to_string());
        match &self.query_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.page.clone()),
        }
    }
}
