use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use toml::{Table, Value};

/// Settings read from an optional TOML file. Values in the section named after the
/// service win over values in the `[default]` section.
pub struct Config {
    table: Table,
    service: String,
    err: Option<Box<dyn Error>>,
}

impl Config {
    /// A missing file is not an error: the config is just empty.
    pub fn load<P: AsRef<Path>>(path: P, service: &str) -> Config {
        match fs::read_to_string(path) {
            Ok(contents) => Config::parse(&contents, service),
            Err(err) if err.kind() == ErrorKind::NotFound => Config::empty(service, None),
            Err(err) => Config::empty(service, Some(Box::new(err))),
        }
    }

    pub fn parse(contents: &str, service: &str) -> Config {
        match contents.parse::<Table>() {
            Ok(table) => Config {
                table,
                service: service.to_string(),
                err: None,
            },
            Err(err) => Config::empty(service, Some(Box::new(err))),
        }
    }

    /// If there was an error reading the config file it will be returned here and the
    /// config will be empty. This is awkward but errors are reported via logging and
    /// logging is initialized after the config loads.
    pub fn error(&self) -> &Option<Box<dyn Error>> {
        &self.err
    }

    pub fn str_value(&self, key: &str, default: &str) -> String {
        self.value(key)
            .and_then(|value| value.as_str())
            .map_or_else(|| default.to_string(), |s| s.to_string())
    }

    pub fn int_value(&self, key: &str) -> Option<i64> {
        self.value(key).and_then(|value| value.as_integer())
    }

    pub fn bool_value(&self, key: &str) -> Option<bool> {
        self.value(key).and_then(|value| value.as_bool())
    }

    fn empty(service: &str, err: Option<Box<dyn Error>>) -> Config {
        Config {
            table: Table::new(),
            service: service.to_string(),
            err,
        }
    }

    fn value(&self, key: &str) -> Option<&Value> {
        self.section_value(&self.service, key)
            .or_else(|| self.section_value("default", key))
    }

    fn section_value(&self, section: &str, key: &str) -> Option<&Value> {
        self.table
            .get(section)
            .and_then(|value| match value {
                Value::Table(table) => Some(table),
                _ => None,
            })
            .and_then(|table| table.get(key))
    }
}
