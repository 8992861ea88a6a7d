//! Common test utilities

#![allow(dead_code)]

use std::collections::BTreeMap;

use colorpref::config::{Config, PreferenceConfig};
use colorpref::PreferenceStore;

pub const RED: u32 = 0xFFFF_0000;
pub const GREEN: u32 = 0xFF00_FF00;
pub const BLUE: u32 = 0xFF00_00FF;

/// Store that records every write
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub values: BTreeMap<String, u32>,
    pub puts: Vec<(String, u32)>,
}

impl RecordingStore {
    pub fn with_value(key: &str, value: u32) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value);
        store
    }
}

impl PreferenceStore for RecordingStore {
    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get_int(&self, key: &str, default: u32) -> u32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn put_int(&mut self, key: &str, value: u32) -> bool {
        self.values.insert(key.to_string(), value);
        self.puts.push((key.to_string(), value));
        true
    }
}

/// Red, green and blue in five columns
pub fn rgb_preference(key: &str) -> PreferenceConfig {
    PreferenceConfig::new(key)
        .with_title("Accent color")
        .with_choices(["#FF0000", "#00FF00", "#0000FF"])
        .with_num_columns(5)
}

pub fn config_with(preferences: Vec<PreferenceConfig>) -> Config {
    Config {
        preferences,
        ..Default::default()
    }
}
