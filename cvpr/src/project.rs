//! Target repositories for a release.
//!
//! Each [`ProjectSpec`] names one repository and the branch templates its
//! release pull request uses. The built-in table can be replaced wholesale
//! by a `projects` list in the config file.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Descriptor of one repository taking part in a release.
///
/// `head` and `base` are branch-name templates. `head` uses the
/// `{source}` and `{version}` placeholders, `base` uses `{target}` and
/// `{version}`.
///
/// # Examples
///
/// ```
/// use cvpr::ProjectSpec;
///
/// let spec = ProjectSpec::new("Tools", "tools", "t_{source}_{version}", "t_{target}_{version}");
/// assert_eq!(spec.repo, "tools");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    /// Display name.
    pub name: Cow<'static, str>,
    /// Repository name within the owning organization.
    pub repo: Cow<'static, str>,
    /// Head branch template.
    pub head: Cow<'static, str>,
    /// Base branch template.
    pub base: Cow<'static, str>,
}

impl ProjectSpec {
    /// Creates a project spec from owned or borrowed strings.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        repo: impl Into<Cow<'static, str>>,
        head: impl Into<Cow<'static, str>>,
        base: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            repo: repo.into(),
            head: head.into(),
            base: base.into(),
        }
    }

    const fn builtin(
        name: &'static str,
        repo: &'static str,
        head: &'static str,
        base: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            repo: Cow::Borrowed(repo),
            head: Cow::Borrowed(head),
            base: Cow::Borrowed(base),
        }
    }
}

impl fmt::Display for ProjectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}: {} -> {})", self.name, self.repo, self.head, self.base)
    }
}

/// The repositories released together by default.
pub const DEFAULT_PROJECTS: &[ProjectSpec] = &[
    ProjectSpec::builtin(
        "JLV - CCP",
        "JLV",
        "cvccp_{source}_{version}",
        "cvccp_{target}_{version}",
    ),
    ProjectSpec::builtin(
        "JLV - VAS",
        "JLV",
        "cvvas_{source}_{version}",
        "cvvas_{target}_{version}",
    ),
    ProjectSpec::builtin(
        "JMeadows - CCP",
        "jMeadows",
        "cvccp_{source}_{version}",
        "cvccp_{target}_{version}",
    ),
    ProjectSpec::builtin(
        "JMeadows - VAS",
        "jMeadows",
        "cvvas_{source}_{version}",
        "cvvas_{target}_{version}",
    ),
    ProjectSpec::builtin(
        "HuiCore",
        "HuiCore",
        "cv_{source}_{version}",
        "cv_{target}_{version}",
    ),
    ProjectSpec::builtin(
        "VistA Data Service",
        "VistaDataService",
        "cv_{source}_{version}",
        "cv_{target}_{version}",
    ),
    ProjectSpec::builtin(
        "JLV QoS",
        "jlvqos",
        "cv_{source}_{version}",
        "cv_{target}_{version}",
    ),
    ProjectSpec::builtin(
        "Report Builder",
        "ReportBuilder",
        "cv_{source}_{version}",
        "cv_{target}_{version}",
    ),
];
