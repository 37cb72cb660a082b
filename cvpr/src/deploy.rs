//! Deploy types and the catalog that maps them to branch environments.
//!
//! A deploy type names a release stage. Each stage moves code from a
//! `source` environment to a `target` environment, and each has a menu
//! title and description used by the interactive prompt.

use std::fmt;

/// A release stage.
///
/// # Examples
///
/// ```
/// use cvpr::DeployType;
///
/// assert_eq!(DeployType::parse("prod"), Some(DeployType::Prod));
/// assert_eq!(DeployType::parse("staging"), None);
/// assert_eq!(DeployType::default(), DeployType::Test);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeployType {
    /// Test deployment (dev -> test).
    #[default]
    Test,
    /// Production deployment (test -> prod).
    Prod,
}

impl DeployType {
    /// Returns the value used on the command line and in the config file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Prod => "prod",
        }
    }

    /// Parses a deploy type from its exact, lowercase name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "test" => Some(Self::Test),
            "prod" => Some(Self::Prod),
            _ => None,
        }
    }
}

impl fmt::Display for DeployType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pair of environment tags a deploy type moves code between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchPair {
    /// Environment the pull request head comes from.
    pub source: &'static str,
    /// Environment the pull request merges into.
    pub target: &'static str,
}

/// One row of the deploy-type catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployTypeEntry {
    /// The deploy type this row describes.
    pub value: DeployType,
    /// Menu title.
    pub title: &'static str,
    /// Menu description.
    pub description: &'static str,
    /// Derived branch environments.
    pub branches: BranchPair,
}

impl fmt::Display for DeployTypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.description)
    }
}

/// The fixed table of deploy types.
///
/// Lookups never fail: an unknown or absent deploy type resolves to the
/// catalog's default entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployCatalog {
    entries: &'static [DeployTypeEntry],
    default: DeployType,
}

/// The built-in deploy types, in menu order.
pub const DEPLOY_TYPES: &[DeployTypeEntry] = &[
    DeployTypeEntry {
        value: DeployType::Test,
        title: "Test",
        description: "Test deployment (dev -> test)",
        branches: BranchPair {
            source: "dev",
            target: "test",
        },
    },
    DeployTypeEntry {
        value: DeployType::Prod,
        title: "Production",
        description: "Production deployment (test -> prod)",
        branches: BranchPair {
            source: "test",
            target: "prod",
        },
    },
];

/// The built-in catalog.
pub static DEPLOY_CATALOG: DeployCatalog = DeployCatalog::new(DEPLOY_TYPES, DeployType::Test);

impl DeployCatalog {
    /// Creates a catalog over a static table.
    ///
    /// `entries` must not be empty. If `default` has no row in `entries`,
    /// the first row acts as the default.
    #[must_use]
    pub const fn new(entries: &'static [DeployTypeEntry], default: DeployType) -> Self {
        Self { entries, default }
    }

    /// Returns all rows in menu order.
    #[must_use]
    pub const fn entries(&self) -> &'static [DeployTypeEntry] {
        self.entries
    }

    /// Returns the default deploy type.
    #[must_use]
    pub const fn default_type(&self) -> DeployType {
        self.default
    }

    /// Finds the row for a deploy type name, if it is known.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static DeployTypeEntry> {
        let value = DeployType::parse(name)?;
        self.entries.iter().find(|entry| entry.value == value)
    }

    /// Returns the row for a deploy type name, falling back to the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvpr::deploy::DEPLOY_CATALOG;
    ///
    /// let prod = DEPLOY_CATALOG.resolve(Some("prod"));
    /// assert_eq!((prod.branches.source, prod.branches.target), ("test", "prod"));
    ///
    /// let fallback = DEPLOY_CATALOG.resolve(Some("staging"));
    /// assert_eq!((fallback.branches.source, fallback.branches.target), ("dev", "test"));
    /// ```
    #[must_use]
    pub fn resolve(&self, name: Option<&str>) -> &'static DeployTypeEntry {
        name.and_then(|name| self.find(name))
            .unwrap_or_else(|| self.default_entry())
    }

    /// Returns the branch environments for a deploy type name.
    #[must_use]
    pub fn branches(&self, name: Option<&str>) -> BranchPair {
        self.resolve(name).branches
    }

    /// Returns the menu index for a deploy type name.
    ///
    /// Absent or unknown names select the first row.
    #[must_use]
    pub fn index_of(&self, name: Option<&str>) -> usize {
        name.and_then(DeployType::parse)
            .and_then(|value| self.entries.iter().position(|entry| entry.value == value))
            .unwrap_or(0)
    }

    fn default_entry(&self) -> &'static DeployTypeEntry {
        let entries = self.entries;
        entries
            .iter()
            .find(|entry| entry.value == self.default)
            .unwrap_or(&entries[0])
    }
}

impl Default for DeployCatalog {
    fn default() -> Self {
        DEPLOY_CATALOG
    }
}
