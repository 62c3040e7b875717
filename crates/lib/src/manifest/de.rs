//! Lenient field deserializers.
//!
//! Manifests are hand written and often leave keys empty (`chdir:`) or let
//! YAML type a version as a number (`version: 1.0`). These helpers turn such
//! values into the defaults the model expects rather than rejecting them.

use serde::Deserialize;
use serde::de::Deserializer;

/// Deserialize a scalar as its source text. `null` becomes `""`.
///
/// Plain scalars keep their text as written, so `version: 2.10` stays
/// `"2.10"` instead of going through a float.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Like [`string`], but empty values become `None`.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  string(deserializer).map(|value| if value.is_empty() { None } else { Some(value) })
}

/// Deserialize a sequence, treating `null` as empty.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  nullable(deserializer)
}

/// Deserialize a sequence of scalars into strings, treating `null` as empty.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let items: Vec<Scalar> = nullable(deserializer)?;
  Ok(items.into_iter().map(|Scalar(value)| value).collect())
}

/// Deserialize a value, treating `null` as its default.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

struct Scalar(String);

impl<'de> Deserialize<'de> for Scalar {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    string(deserializer).map(Scalar)
  }
}
