//! JSON test vector loader shared by envelope tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use serde::Deserialize;
use serde_json::Value;
use sioemit_core::protocol::{from_json, Arg};

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub input: EmitInput,
    pub expect_hex: String,
    #[serde(default)]
    pub expect_channels: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmitInput {
    pub prefix: String,
    pub nsp: String,
    pub event: String,
    #[serde(default)]
    pub args: Vec<Value>,
    #[serde(default)]
    pub rooms: Vec<String>,
    #[serde(default)]
    pub flags: Vec<String>,
}

impl EmitInput {
    /// Arguments as wire values. `{"$bin": "<hex>"}` stands for a binary argument.
    pub fn wire_args(&self) -> Vec<Arg> {
        self.args
            .iter()
            .map(|a| match a.get("$bin").and_then(Value::as_str) {
                Some(h) => Arg::Binary(hex::decode(h).expect("invalid $bin hex in test vector")),
                None => from_json(a.clone()),
            })
            .collect()
    }
}

impl TestVector {
    pub fn expected_bytes(&self) -> Vec<u8> {
        hex::decode(&self.expect_hex).expect("invalid hex in test vector")
    }
}

pub fn load(name: &str) -> TestVector {
    let s = std::fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
