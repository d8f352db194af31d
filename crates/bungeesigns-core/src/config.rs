//! Configuration document schemas
//!
//! This module turns the parsed YAML documents into value types. Each
//! keyed section becomes a collection:
//!
//! - `config.yml`: scalar settings and `servers.<name>`
//! - `layout.yml`: `layouts.<name>` and `variables.<name>`
//! - `signs.yml`: the `signs` string list
//!
//! Sections are required; a missing section or a malformed entry is an
//! error for the whole document.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{CustomVariable, ServerPing, SignLayout};

/// Key of the server section in `config.yml`
pub const SERVERS_KEY: &str = "servers";
/// Key of the layout section in `layout.yml`
pub const LAYOUTS_KEY: &str = "layouts";
/// Key of the variable section in `layout.yml`
pub const VARIABLES_KEY: &str = "variables";
/// Key of the sign list in `signs.yml`
pub const SIGNS_KEY: &str = "signs";

/// Scalar settings from `config.yml`
///
/// Absent or blank keys fall back to the values of the bundled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Log ping results to the console
    pub log_console: bool,

    /// Seconds between two pings of the same server
    pub interval: u32,

    /// Seconds to wait for a ping answer
    pub timeout: u32,

    /// Teleport cooldown in seconds
    pub cooldown: u32,
}

/// `config.yml` scalars as written; a blank value reads as `None`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsEntry {
    log_console: Option<bool>,
    interval: Option<u32>,
    timeout: Option<u32>,
    cooldown: Option<u32>,
}

impl From<SettingsEntry> for Settings {
    fn from(entry: SettingsEntry) -> Self {
        Self {
            log_console: entry.log_console.unwrap_or_default(),
            interval: entry.interval.unwrap_or_else(default_interval),
            timeout: entry.timeout.unwrap_or_else(default_timeout),
            cooldown: entry.cooldown.unwrap_or_else(default_cooldown),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_console: false,
            interval: default_interval(),
            timeout: default_timeout(),
            cooldown: default_cooldown(),
        }
    }
}

fn default_interval() -> u32 {
    10
}

fn default_timeout() -> u32 {
    5
}

fn default_cooldown() -> u32 {
    3
}

/// A `servers.<name>` entry
#[derive(Debug, Clone, Default, Deserialize)]
struct ServerEntry {
    displayname: Option<String>,
    address: Option<String>,
}

/// A `layouts.<name>` entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct LayoutEntry {
    online: Option<String>,
    offline: Option<String>,
    layout: Option<Vec<String>>,
    teleport: Option<bool>,
    offline_int: Option<String>,
    offline_motd: Option<String>,
    offline_message: Option<String>,
    cooldown_message: Option<String>,
}

/// A `variables.<name>` entry
#[derive(Debug, Clone, Default, Deserialize)]
struct VariableEntry {
    #[serde(rename = "type")]
    kind: Option<String>,
    arguments: Option<String>,
}

/// Parse the scalar settings
pub fn parse_settings(doc: &Value) -> Result<Settings> {
    let entry: SettingsEntry = entry("settings", doc)?;
    Ok(entry.into())
}

/// Parse the server list, sharing `timeout_secs` between all targets
///
/// Servers keep the order in which they appear in the document.
pub fn parse_servers(doc: &Value, timeout_secs: u32) -> Result<Vec<ServerPing>> {
    let mut servers = Vec::new();

    for (name, value) in section(doc, SERVERS_KEY)? {
        let path = format!("{}.{}", SERVERS_KEY, name);
        let entry: ServerEntry = entry(&path, value)?;

        let address = entry
            .address
            .ok_or_else(|| Error::missing_key(format!("{}.address", path)))?;
        let (host, port) = parse_address(&name, &address)?;
        let display_name = entry.displayname.unwrap_or_else(|| name.clone());

        let mut server = ServerPing::new(name, display_name, host, port, timeout_secs);
        server.reset_ping_delay();
        servers.push(server);
    }

    Ok(servers)
}

/// Parse the layout templates, keyed by name
pub fn parse_layouts(doc: &Value) -> Result<HashMap<String, SignLayout>> {
    let mut layouts = HashMap::new();

    for (name, value) in section(doc, LAYOUTS_KEY)? {
        let path = format!("{}.{}", LAYOUTS_KEY, name);
        let entry: LayoutEntry = entry(&path, value)?;

        let layout = SignLayout {
            name: name.clone(),
            online: entry.online,
            offline: entry.offline,
            lines: entry.layout.unwrap_or_default(),
            teleport: entry.teleport.unwrap_or_default(),
            offline_int: entry.offline_int,
            offline_motd: entry.offline_motd,
            offline_message: entry.offline_message,
            cooldown_message: entry.cooldown_message,
        };
        layouts.insert(name, layout);
    }

    Ok(layouts)
}

/// Parse the custom variables
pub fn parse_variables(doc: &Value) -> Result<Vec<CustomVariable>> {
    let mut variables = Vec::new();

    for (name, value) in section(doc, VARIABLES_KEY)? {
        let path = format!("{}.{}", VARIABLES_KEY, name);
        let entry: VariableEntry = entry(&path, value)?;

        let kind = entry
            .kind
            .ok_or_else(|| Error::missing_key(format!("{}.type", path)))?;
        variables.push(CustomVariable::new(
            kind,
            &name,
            entry.arguments.unwrap_or_default(),
        ));
    }

    Ok(variables)
}

/// Split a `host:port` address once on the first `:`
pub fn parse_address(server: &str, address: &str) -> Result<(String, u16)> {
    let (host, port) = address
        .split_once(':')
        .ok_or_else(|| Error::invalid_address(server, address))?;

    let host = host.trim();
    if host.is_empty() {
        return Err(Error::invalid_address(server, address));
    }

    let port = port
        .trim()
        .parse::<u16>()
        .map_err(|_| Error::invalid_address(server, address))?;

    Ok((host.to_string(), port))
}

/// Read the encoded sign strings; an absent list is empty
pub fn sign_list(doc: &Value) -> Result<Vec<String>> {
    match doc.get(SIGNS_KEY) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(Error::config(format!(
                    "{} contains a non-string entry: {:?}",
                    SIGNS_KEY, other
                ))),
            })
            .collect(),
        Some(_) => Err(Error::config(format!("{} must be a list", SIGNS_KEY))),
    }
}

/// Replace the encoded sign strings, keeping every other key
pub fn set_sign_list(doc: &mut Value, signs: Vec<String>) {
    let list = Value::Sequence(signs.into_iter().map(Value::String).collect());
    match doc {
        Value::Mapping(map) => {
            map.insert(Value::String(SIGNS_KEY.to_string()), list);
        }
        other => {
            let mut map = Mapping::new();
            map.insert(Value::String(SIGNS_KEY.to_string()), list);
            *other = Value::Mapping(map);
        }
    }
}

/// Entries of a required keyed section, in document order
fn section<'a>(doc: &'a Value, key: &str) -> Result<Vec<(String, &'a Value)>> {
    match doc.get(key) {
        None => Err(Error::missing_key(key)),
        Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Mapping(map)) => map
            .iter()
            .map(|(k, v)| Ok((key_name(key, k)?, v)))
            .collect(),
        Some(_) => Err(Error::config(format!("{} must be a section", key))),
    }
}

fn key_name(section: &str, key: &Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::config(format!(
            "{} has an unsupported key: {:?}",
            section, other
        ))),
    }
}

/// Deserialize one entry; an empty entry reads as an empty section
fn entry<T: DeserializeOwned>(path: &str, value: &Value) -> Result<T> {
    let value = match value {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other.clone(),
    };
    serde_yaml::from_value(value).map_err(|e| Error::config(format!("{}: {}", path, e)))
}
