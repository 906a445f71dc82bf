//! Record shapes shared by the merge tests.

#![allow(dead_code)]

use reconcile_engine::impl_mergeable;
use reconcile_types::Field;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub protocol: Field<String>,
    #[serde(default)]
    pub port: Field<i64>,
}

impl_mergeable!(Rule { protocol, port });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub tier: Field<String>,
    #[serde(default)]
    pub replicas: Field<i64>,
}

impl_mergeable!(Settings { tier, replicas });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Firewall {
    #[serde(default)]
    pub id: Field<String>,
    #[serde(default)]
    pub name: Field<String>,
    #[serde(default)]
    pub secret: Field<String>,
    #[serde(default)]
    pub enabled: Field<bool>,
    #[serde(default)]
    pub settings: Option<Box<Settings>>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl_mergeable!(Firewall {
    id,
    name,
    secret,
    enabled,
    settings,
    rules,
});

pub fn rule(protocol: &str, port: i64) -> Rule {
    Rule {
        protocol: protocol.into(),
        port: Field::Value(port),
    }
}

pub fn firewall(name: &str) -> Firewall {
    Firewall {
        name: name.into(),
        ..Firewall::default()
    }
}
