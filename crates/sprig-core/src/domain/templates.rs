//! Template catalog: the fixed file contents of a new project.
//!
//! Four templates are literal and never change between invocations. Two
//! (`README.md` and `setup.py`) interpolate the project name. Nothing here
//! performs I/O or can fail.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::ProjectName};

/// File name of the empty package marker.
pub const INIT_MARKER: &str = "__init__.py";

// ── Literal content ──────────────────────────────────────────────────────────

const GITIGNORE: &str = r##"# general things to ignore
build/
dist/
*.egg-info/
*.egg
*.py[cod]
__pycache__/
*.so
*~

# due to using tox and pytest
.tox
.cache "##;

const PYPROJECT_TOML: &str = r##"[build-system]
# These are the assumed default build requirements from pip:
# https://pip.pypa.io/en/stable/reference/pip/#pep-517-and-518-support
requires = ["setuptools>=43.0.0", "wheel"]
build-backend = "setuptools.build_meta" "##;

const SETUP_CFG: &str = r##"[metadata]
# This includes the license file(s) in the wheel.
# https://wheel.readthedocs.io/en/stable/user_guide.html#including-license-files-in-the-generated-wheel-file
license_files = LICENSE.txt"##;

const TOX_INI: &str = r##"# this file is *not* meant to cover or endorse the use of tox or pytest or
# testing in general,
#
#  It's meant to show the use of:
#
#  - check-manifest
#     confirm items checked into vcs are in your sdist
#  - python setup.py check
#     confirm required package meta-data in setup.py
#  - readme_renderer (when using a ReStructuredText README)
#     confirms your long_description will render correctly on PyPI.
#
#  and also to help confirm pull requests to this project.

[tox]
envlist = py{37,38,39,310}

# Define the minimal tox version required to run;
# if the host tox is less than this the tool with create an environment and
# provision it with a tox that satisfies it under provision_tox_env.
# At least this version is needed for PEP 517/518 support.
minversion = 3.3.0

# Activate isolated build environment. tox will use a virtual environment
# to build a source distribution from the source tree. For build tools and
# arguments use the pyproject.toml file as specified in PEP-517 and PEP-518.
isolated_build = true

[testenv]
deps =
    check-manifest >= 0.42
    # If your project uses README.rst, uncomment the following:
    # readme_renderer
    flake8
    pytest
commands =
    check-manifest --ignore 'tox.ini,tests/**'
    # This repository uses a Markdown long_description, so the -r flag to
    # `setup.py check` is not needed. If your project contains a README.rst,
    # use `python setup.py check -m -r -s` instead.
    python setup.py check -m -s
    flake8 .
    py.test tests {posargs}

[flake8]
exclude = .tox,*.egg,build,data
select = E,W,F"##;

// ── TemplateName ─────────────────────────────────────────────────────────────

/// Logical name of a literal template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateName {
    Gitignore,
    Pyproject,
    SetupMetadata,
    TestRunnerConfig,
}

impl TemplateName {
    pub const ALL: [TemplateName; 4] = [
        Self::Gitignore,
        Self::Pyproject,
        Self::SetupMetadata,
        Self::TestRunnerConfig,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gitignore => "gitignore",
            Self::Pyproject => "pyproject",
            Self::SetupMetadata => "setup-metadata",
            Self::TestRunnerConfig => "test-runner-config",
        }
    }

    /// File the template is written to, relative to the target directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Gitignore => ".gitignore",
            Self::Pyproject => "pyproject.toml",
            Self::SetupMetadata => "setup.cfg",
            Self::TestRunnerConfig => "tox.ini",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTemplate { name: s.into() })
    }
}

// ── TemplateSet ──────────────────────────────────────────────────────────────

static BUILTIN: LazyLock<TemplateSet> = LazyLock::new(|| {
    let literals = BTreeMap::from([
        (TemplateName::Gitignore, GITIGNORE),
        (TemplateName::Pyproject, PYPROJECT_TOML),
        (TemplateName::SetupMetadata, SETUP_CFG),
        (TemplateName::TestRunnerConfig, TOX_INI),
    ]);
    TemplateSet { literals }
});

/// Immutable catalog of the templates a scaffold is built from.
#[derive(Debug)]
pub struct TemplateSet {
    literals: BTreeMap<TemplateName, &'static str>,
}

impl TemplateSet {
    /// The process-wide catalog.
    pub fn builtin() -> &'static TemplateSet {
        &BUILTIN
    }

    /// Content of a literal template.
    pub fn get(&self, name: TemplateName) -> &'static str {
        // every variant is registered in `BUILTIN`
        self.literals.get(&name).copied().unwrap_or_default()
    }

    /// All literal templates in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TemplateName, &'static str)> + '_ {
        self.literals.iter().map(|(name, content)| (*name, *content))
    }

    /// `setup.py` for the given project.
    pub fn package_descriptor(&self, project: &ProjectName) -> String {
        format!(
            r##""""A setuptools based setup module.
See:
https://packaging.python.org/guides/distributing-packages-using-setuptools/
https://github.com/pypa/sampleproject
"""

from setuptools import setup, find_packages
import pathlib

here = pathlib.Path(__file__).parent.resolve()

long_description = (here / "README.md").read_text(encoding="utf-8")

setup(
    name="{name}",
    version="2.0.0",
    classifiers=[],
    python_requires=">=3.7, <4",
    extras_require={{
        "dev": ["check-manifest"],
        "test": ["coverage"],
    }},
    project_urls={{
        "Bug Reports": "https://github.com/your/project/issues",
        "Say Thanks!": "http://saythanks.io/to/example",
        "Source": "https://github.com/your/project/",
    }},
)
"##,
            name = project.as_str()
        )
    }

    /// `README.md` for the given project: a single heading line.
    pub fn readme(&self, project: &ProjectName) -> String {
        format!("# {}\n", project.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ProjectName {
        ProjectName::parse("widget").unwrap()
    }

    #[test]
    fn readme_is_single_heading() {
        assert_eq!(TemplateSet::builtin().readme(&widget()), "# widget\n");
    }

    #[test]
    fn setup_py_names_the_project() {
        let content = TemplateSet::builtin().package_descriptor(&widget());
        assert!(content.contains(r#"name="widget""#));
        assert!(content.contains(r#"version="2.0.0""#));
        assert!(content.contains("classifiers=[]"));
        assert!(content.starts_with(r#""""A setuptools based setup module."#));
        assert!(content.ends_with(")\n"));
    }

    #[test]
    fn setup_py_keeps_literal_braces() {
        let content = TemplateSet::builtin().package_descriptor(&widget());
        assert!(content.contains("extras_require={\n"));
        assert!(!content.contains("{{"));
    }

    #[test]
    fn every_template_is_registered() {
        let set = TemplateSet::builtin();
        for name in TemplateName::ALL {
            assert!(!set.get(name).is_empty(), "missing {name}");
        }
        assert_eq!(set.iter().count(), TemplateName::ALL.len());
    }

    #[test]
    fn literal_templates_keep_exact_endings() {
        let set = TemplateSet::builtin();
        assert!(set.get(TemplateName::Gitignore).ends_with(".cache "));
        assert!(
            set.get(TemplateName::Pyproject)
                .ends_with("build-backend = \"setuptools.build_meta\" ")
        );
        assert!(
            set.get(TemplateName::SetupMetadata)
                .ends_with("license_files = LICENSE.txt")
        );
        assert!(set.get(TemplateName::TestRunnerConfig).ends_with("select = E,W,F"));
        assert!(set.get(TemplateName::Gitignore).starts_with("# general things"));
    }

    #[test]
    fn template_names_round_trip_through_keys() {
        assert_eq!(
            "setup-metadata".parse::<TemplateName>().unwrap(),
            TemplateName::SetupMetadata
        );
        assert!("makefile".parse::<TemplateName>().is_err());
    }

    #[test]
    fn file_names_match_layout() {
        assert_eq!(TemplateName::Gitignore.file_name(), ".gitignore");
        assert_eq!(TemplateName::TestRunnerConfig.file_name(), "tox.ini");
    }
}
