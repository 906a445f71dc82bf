//! In-memory stand-in for a vendor API.

#![allow(dead_code)]

use async_trait::async_trait;
use reconcile_engine::impl_mergeable;
use reconcile_provider::{ProviderError, ProviderResult, Resource, ResourceApi};
use reconcile_types::Field;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub id: Field<String>,
    #[serde(default)]
    pub name: Field<String>,
    #[serde(default)]
    pub password: Field<String>,
    #[serde(default)]
    pub region: Field<String>,
    #[serde(default)]
    pub self_link: Field<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl_mergeable!(Database {
    id,
    name,
    password,
    region,
    self_link,
    tags,
});

impl Resource for Database {
    const TYPE_NAME: &'static str = "example_database";

    fn id(&self) -> &Field<String> {
        &self.id
    }

    fn name(&self) -> &Field<String> {
        &self.name
    }
}

pub fn declared(name: &str) -> Database {
    Database {
        name: name.into(),
        password: "hunter2".into(),
        region: "eu-west-1".into(),
        ..Database::default()
    }
}

/// Stores entities in memory. Create does not echo the assigned id unless
/// `echoes_id` is set, and the password is never returned. With
/// `echoes_empty_id`, create answers with `"id": ""` instead.
pub struct FakeDatabaseApi {
    pub echoes_id: bool,
    pub echoes_empty_id: bool,
    pub entities: Mutex<Vec<Database>>,
    pub list_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
}

impl FakeDatabaseApi {
    pub fn new(echoes_id: bool) -> Self {
        Self {
            echoes_id,
            echoes_empty_id: false,
            entities: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
        }
    }

    pub fn echoing_empty_id() -> Self {
        Self {
            echoes_empty_id: true,
            ..Self::new(false)
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    fn redact(record: &Database) -> Database {
        Database {
            password: Field::Value(String::new()),
            ..record.clone()
        }
    }
}

#[async_trait]
impl ResourceApi for FakeDatabaseApi {
    type Record = Database;

    async fn create(&self, planned: &Database) -> ProviderResult<Database> {
        let id = Uuid::new_v4().to_string();
        let stored = Database {
            id: Field::Value(id.clone()),
            self_link: Field::Value(format!("https://api.example.test/databases/{id}")),
            ..planned.clone()
        };
        self.entities.lock().await.push(stored.clone());
        if self.echoes_id {
            Ok(Self::redact(&stored))
        } else if self.echoes_empty_id {
            Ok(Database {
                id: Field::Value(String::new()),
                self_link: Field::Unset,
                ..Self::redact(&stored)
            })
        } else {
            Ok(Database {
                id: Field::Unset,
                self_link: Field::Unset,
                ..Self::redact(&stored)
            })
        }
    }

    async fn list(&self) -> ProviderResult<Vec<Database>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entities.lock().await.iter().map(Self::redact).collect())
    }

    async fn get(&self, id: &str) -> ProviderResult<Database> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.entities
            .lock()
            .await
            .iter()
            .find(|e| e.id.as_str() == Some(id))
            .map(Self::redact)
            .ok_or_else(|| ProviderError::RemoteNotFound(id.to_string()))
    }

    async fn update(&self, id: &str, planned: &Database) -> ProviderResult<Database> {
        let mut entities = self.entities.lock().await;
        let entity = entities
            .iter_mut()
            .find(|e| e.id.as_str() == Some(id))
            .ok_or_else(|| ProviderError::RemoteNotFound(id.to_string()))?;
        if planned.region.is_known() {
            entity.region = planned.region.clone();
        }
        if !planned.tags.is_empty() {
            entity.tags = planned.tags.clone();
        }
        Ok(Self::redact(entity))
    }

    async fn delete(&self, id: &str) -> ProviderResult<()> {
        let mut entities = self.entities.lock().await;
        let before = entities.len();
        entities.retain(|e| e.id.as_str() != Some(id));
        if entities.len() == before {
            return Err(ProviderError::RemoteNotFound(id.to_string()));
        }
        Ok(())
    }
}
