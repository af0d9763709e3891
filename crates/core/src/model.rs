use serde::{Deserialize, Serialize};
use std::fmt;

/// A language model under evaluation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ModelSpec {
    /// Model identifier, also the first path segment of its result files.
    pub name: String,
    /// Inference strategy, used in the result file name.
    pub strategy: String,
    /// Display name of the model vendor.
    pub provider: String,
}

impl ModelSpec {
    pub fn new(name: &str, strategy: &str, provider: &str) -> Self {
        Self {
            name: name.to_string(),
            strategy: strategy.to_string(),
            provider: provider.to_string(),
        }
    }

    /// Relative location of the statistics file for `benchmark`.
    pub fn result_path(&self, benchmark: &BenchmarkId) -> String {
        format!(
            "{model}/{benchmark}/statistics_{benchmark}_instruct_{strategy}.json",
            model = self.name,
            strategy = self.strategy,
        )
    }
}

/// Identifier of a code repair benchmark, e.g. `defects4j`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BenchmarkId(String);

/// Identifier of a scoring metric, e.g. `exact_match@1`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct MetricId(String);

macro_rules! string_id {
    ($t:ident) => {
        impl $t {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(BenchmarkId);
string_id!(MetricId);

/// A benchmark with its column group title.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Benchmark {
    pub id: BenchmarkId,
    pub title: String,
}

/// A metric with its column title.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Metric {
    pub id: MetricId,
    pub title: String,
}

/// Country code used for providers missing from the lookup.
pub const UNKNOWN_COUNTRY: &str = "UN";

/// Renders a two letter country code as its flag emoji.
///
/// Each ASCII letter maps to the matching Unicode regional indicator symbol,
/// so `US` becomes 🇺🇸. Anything that is not two ASCII letters yields an
/// empty string.
pub fn flag_glyph(country_code: &str) -> String {
    if country_code.len() != 2 || !country_code.chars().all(|c| c.is_ascii_alphabetic()) {
        return String::new();
    }
    country_code
        .chars()
        .filter_map(|c| {
            let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
            char::from_u32(0x1F1E6 + offset)
        })
        .collect()
}
