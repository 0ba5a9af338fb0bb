#![allow(dead_code)]

use async_trait::async_trait;
use hesiod_application::ports::TxtLookup;
use hesiod_domain::LookupFailure;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Map-backed TXT lookup. Unknown names fail with `NotFound`.
#[derive(Clone, Default)]
pub struct MockTxtLookup {
    records: Arc<RwLock<HashMap<String, Vec<String>>>>,
    errors: Arc<RwLock<HashMap<String, LookupFailure>>>,
    queried: Arc<Mutex<Vec<String>>>,
}

impl MockTxtLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(entries: Vec<(&str, Vec<&str>)>) -> Self {
        let mock = Self::new();
        for (name, records) in entries {
            mock.set_records(name, records);
        }
        mock
    }

    pub fn set_records(&self, name: &str, records: Vec<&str>) {
        self.records.write().unwrap().insert(
            name.to_string(),
            records.into_iter().map(str::to_string).collect(),
        );
    }

    pub fn set_error(&self, name: &str, error: LookupFailure) {
        self.errors
            .write()
            .unwrap()
            .insert(name.to_string(), error);
    }

    /// Names passed to `lookup_txt`, in call order.
    pub fn queried_names(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl TxtLookup for MockTxtLookup {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupFailure> {
        self.queried.lock().unwrap().push(name.to_string());

        if let Some(err) = self.errors.read().unwrap().get(name).cloned() {
            return Err(err);
        }

        self.records
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| LookupFailure::NotFound(name.to_string()))
    }
}
