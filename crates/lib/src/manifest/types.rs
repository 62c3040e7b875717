//! Manifest types for fpmfile.
//!
//! The manifest is an ordered list of [`PackageSpec`]s. Each package declares
//! where its contents come from (`source`), what kind of package to produce
//! (`target`) and the positional `paths` handed to the packaging tool.
//!
//! # Example
//!
//! ```yaml
//! packages:
//!   - name: example
//!     source:
//!       mode: dir
//!       excludes: ["*.swp"]
//!     target:
//!       mode: deb
//!       version: ${GITHUB_REF}
//!       depends: ["libc6 (>= 2.31)"]
//!     paths:
//!       - build/example=/usr/bin/example
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::de;

/// The complete build manifest. Build order is declaration order.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct Manifest {
  #[serde(default, deserialize_with = "de::list")]
  pub packages: Vec<PackageSpec>,
}

/// One package to build.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct PackageSpec {
  #[serde(default, deserialize_with = "de::string")]
  pub name: String,

  #[serde(default, deserialize_with = "de::nullable")]
  pub source: SourceSpec,

  #[serde(default, deserialize_with = "de::nullable")]
  pub target: TargetSpec,

  /// Positional arguments, interpreted according to `source.mode`.
  #[serde(default, deserialize_with = "de::string_list")]
  pub paths: Vec<String>,
}

/// Where the package contents are gathered from.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct SourceSpec {
  #[serde(default)]
  pub mode: SourceMode,

  /// Glob patterns excluded from a `dir` source.
  #[serde(default, deserialize_with = "de::string_list")]
  pub excludes: Vec<String>,

  /// Directory the tool changes into before collecting `paths`.
  #[serde(default, deserialize_with = "de::optional_string")]
  pub chdir: Option<String>,
}

/// The package format to produce and its metadata.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct TargetSpec {
  #[serde(default)]
  pub mode: TargetMode,

  /// Declared version, possibly a CI ref such as `refs/tags/v1.0.0`.
  #[serde(default, deserialize_with = "de::string")]
  pub version: String,

  // Metadata
  #[serde(default, deserialize_with = "de::optional_string")]
  pub maintainer: Option<String>,
  #[serde(default, deserialize_with = "de::optional_string")]
  pub vendor: Option<String>,
  #[serde(default, deserialize_with = "de::optional_string")]
  pub url: Option<String>,
  #[serde(default, deserialize_with = "de::optional_string")]
  pub license: Option<String>,
  #[serde(default, deserialize_with = "de::optional_string")]
  pub description: Option<String>,

  // Special files
  #[serde(default, deserialize_with = "de::string_list")]
  pub directories: Vec<String>,
  #[serde(default, deserialize_with = "de::string_list")]
  pub config_files: Vec<String>,
  #[serde(default, deserialize_with = "de::string_list")]
  pub systemd: Vec<String>,

  // Relationships
  #[serde(default, deserialize_with = "de::string_list")]
  pub depends: Vec<String>,
  #[serde(default, deserialize_with = "de::string_list")]
  pub suggests: Vec<String>,
  #[serde(default, deserialize_with = "de::string_list")]
  pub conflicts: Vec<String>,
  #[serde(default, deserialize_with = "de::nullable")]
  pub no_auto_depends: bool,

  // Maintainer scripts
  #[serde(default, deserialize_with = "de::optional_string")]
  pub before_install: Option<String>,
  #[serde(default, deserialize_with = "de::optional_string")]
  pub after_install: Option<String>,
  #[serde(default, deserialize_with = "de::optional_string")]
  pub before_remove: Option<String>,
  #[serde(default, deserialize_with = "de::optional_string")]
  pub after_remove: Option<String>,
  #[serde(default, deserialize_with = "de::optional_string")]
  pub before_upgrade: Option<String>,
  #[serde(default, deserialize_with = "de::optional_string")]
  pub after_upgrade: Option<String>,

  // Systemd unit handling
  #[serde(default, deserialize_with = "de::nullable")]
  pub systemd_enable: bool,
  #[serde(default, deserialize_with = "de::nullable")]
  pub systemd_auto_start: bool,
  #[serde(default, deserialize_with = "de::nullable")]
  pub systemd_restart_after_upgrade: bool,
}

/// How the package contents are gathered.
///
/// Unknown spellings are kept in [`SourceMode::Unsupported`] so validation
/// can report them against the `source.mode` field instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceMode {
  /// Package files from a local directory tree.
  Dir,
  Unsupported(String),
}

impl SourceMode {
  /// Spellings accepted in a manifest.
  pub const SUPPORTED: &'static [&'static str] = &["dir"];

  pub fn parse(value: &str) -> Self {
    match value {
      "dir" => SourceMode::Dir,
      other => SourceMode::Unsupported(other.to_string()),
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      SourceMode::Dir => "dir",
      SourceMode::Unsupported(other) => other,
    }
  }

  pub fn is_supported(&self) -> bool {
    !matches!(self, SourceMode::Unsupported(_))
  }
}

impl Default for SourceMode {
  fn default() -> Self {
    SourceMode::Unsupported(String::new())
  }
}

/// The output package format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetMode {
  /// Debian `.deb` package.
  Deb,
  Unsupported(String),
}

impl TargetMode {
  /// Spellings accepted in a manifest.
  pub const SUPPORTED: &'static [&'static str] = &["deb"];

  pub fn parse(value: &str) -> Self {
    match value {
      "deb" => TargetMode::Deb,
      other => TargetMode::Unsupported(other.to_string()),
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      TargetMode::Deb => "deb",
      TargetMode::Unsupported(other) => other,
    }
  }

  pub fn is_supported(&self) -> bool {
    !matches!(self, TargetMode::Unsupported(_))
  }
}

impl Default for TargetMode {
  fn default() -> Self {
    TargetMode::Unsupported(String::new())
  }
}

macro_rules! mode_serde {
  ($ty:ty) => {
    impl fmt::Display for $ty {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
      }
    }

    impl Serialize for $ty {
      fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
      }
    }

    impl<'de> Deserialize<'de> for $ty {
      fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        de::string(deserializer).map(|value| Self::parse(&value))
      }
    }
  };
}

mode_serde!(SourceMode);
mode_serde!(TargetMode);
