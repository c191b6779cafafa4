//! User-facing messages
//!
//! Messages live in an embedded JSON table keyed by dotted path
//! (`help.skip_conda`). Placeholders are written as `{name}`.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

const WORDING_JSON: &str = include_str!("wording.json");

static WORDING: OnceLock<Wording> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct Wording(HashMap<String, Value>);

impl Wording {
	fn load() -> Self {
		// The table is compiled in; a parse failure leaves every lookup falling back to its key.
		serde_json::from_str(WORDING_JSON).unwrap_or_else(|_| Wording(HashMap::new()))
	}

	fn lookup(&self, key: &str) -> Option<&str> {
		let mut parts = key.split('.');
		let mut value = self.0.get(parts.next()?)?;
		for part in parts {
			value = value.get(part)?;
		}
		value.as_str()
	}
}

/// Message for `key`, or the key itself when missing
pub fn get(key: &str) -> &str {
	WORDING.get_or_init(Wording::load).lookup(key).unwrap_or(key)
}

/// Message for `key` with `{name}` placeholders filled in
pub fn format(key: &str, args: &[(&str, &str)]) -> String {
	args.iter().fold(get(key).to_string(), |message, (name, value)| {
		message.replace(&format!("{{{}}}", name), value)
	})
}
