// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The shares document.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```

use anyhow::{bail, Context, Result};
use num_bigint::BigInt;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use sss_recovery::{parse_radix, Share, ShareSet};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Keys {
    pub n: u64,
    pub k: usize,
}

/// A radix is written as a string in the document, but a bare number is accepted too.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawRadix {
    Number(u32),
    Text(String),
}

impl RawRadix {
    fn parse(&self) -> Result<u32> {
        let text = match self {
            RawRadix::Number(n) => n.to_string(),
            RawRadix::Text(t) => t.clone(),
        };
        Ok(parse_radix(&text)?)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RawShare {
    pub base: RawRadix,
    pub value: String,
}

/// Share entries keep document order. A key that appears twice is a parse
/// error, never a silent overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharesDocument {
    pub keys: Keys,
    pub shares: Vec<(String, RawShare)>,
}

impl<'de> Deserialize<'de> for SharesDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = SharesDocument;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a shares document with a `keys` entry")
            }

            fn visit_map<V>(self, mut map: V) -> Result<SharesDocument, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut keys = None;
                let mut seen = HashSet::new();
                let mut shares = Vec::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "keys" {
                        if keys.is_some() {
                            return Err(de::Error::duplicate_field("keys"));
                        }
                        keys = Some(map.next_value::<Keys>()?);
                        continue;
                    }
                    if !seen.insert(key.clone()) {
                        return Err(de::Error::custom(format!("duplicate share key '{key}'")));
                    }
                    let raw = map.next_value::<RawShare>()?;
                    shares.push((key, raw));
                }

                let keys = keys.ok_or_else(|| de::Error::missing_field("keys"))?;
                Ok(SharesDocument { keys, shares })
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

impl SharesDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Could not parse shares document")
    }

    pub fn read(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Could not read shares document {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("In {}", path.display()))
    }

    pub fn share(&self, key: &str) -> Option<&RawShare> {
        self.shares
            .iter()
            .find_map(|(k, raw)| (k == key).then_some(raw))
    }

    /// Decodes every share and builds the set.
    pub fn into_share_set(self) -> Result<ShareSet> {
        let mut shares = Vec::with_capacity(self.shares.len());

        for (key, raw) in &self.shares {
            let x = BigInt::from_str(key)
                .with_context(|| format!("Share key '{key}' is not an integer"))?;
            let radix = raw
                .base
                .parse()
                .with_context(|| format!("Share {key} has an invalid base"))?;
            let share = Share::decode(x, &raw.value, radix)
                .with_context(|| format!("Could not decode share {key}"))?;
            info!(x = %share.x(), y = %share.y(), base = radix, "decoded share");
            shares.push(share);
        }

        Ok(ShareSet::new(self.keys.n, self.keys.k, shares)?)
    }
}

/// Reports a declared `n` that does not match the shares present.
pub fn check_declared_count(set: &ShareSet, strict: bool) -> Result<()> {
    if set.count_matches_declared() {
        return Ok(());
    }
    if strict {
        bail!(
            "Document declares n = {} but contains {} shares",
            set.n(),
            set.len()
        );
    }
    warn!(
        declared = set.n(),
        present = set.len(),
        "declared share count does not match the document"
    );
    Ok(())
}
