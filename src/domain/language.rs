//! Source languages that header constants can be generated for.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Definition;

/// The language of the generated modules.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// One `.py` module per protocol, re-exported from `__init__.py`.
    #[default]
    Python,

    /// One `.rs` module per protocol, re-exported from `mod.rs`.
    Rust,
}

impl Language {
    /// The file extension of generated modules.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Rust => "rs",
        }
    }

    /// The file name of the package aggregator.
    #[must_use]
    pub const fn package_file(self) -> &'static str {
        match self {
            Self::Python => "__init__.py",
            Self::Rust => "mod.rs",
        }
    }

    /// The line comment prefix.
    #[must_use]
    pub const fn comment(self) -> &'static str {
        match self {
            Self::Python => "#",
            Self::Rust => "//",
        }
    }

    /// The file name of the module generated for `module`.
    #[must_use]
    pub fn module_file(self, module: &str) -> String {
        format!("{module}.{}", self.extension())
    }

    /// The statement that re-exports everything from `module`.
    #[must_use]
    pub fn import(self, module: &str) -> String {
        match self {
            Self::Python => format!("from {module} import *"),
            Self::Rust => format!("pub mod {module};\npub use self::{module}::*;"),
        }
    }

    /// Renders a definition as a comment line followed by an assignment,
    /// terminated by a newline.
    #[must_use]
    pub fn render(self, definition: &Definition) -> String {
        let comment = format!(
            "{} {}, {}",
            self.comment(),
            definition.status(),
            definition.reference()
        );
        let constant = definition.constant();
        let value = definition.value();
        match self {
            Self::Python => format!("{comment}\n{constant} = \"{value}\"\n"),
            Self::Rust => format!("{comment}\npub const {constant}: &str = \"{value}\";\n"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::Rust => write!(f, "rust"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HeaderRecord;

    fn definition() -> Definition {
        Definition::from_record(&HeaderRecord {
            name: "Content-Type".to_string(),
            template: String::new(),
            protocol: "http".to_string(),
            status: String::new(),
            reference: "[RFC9110, Section 8.3]".to_string(),
        })
    }

    #[test]
    fn python_definition() {
        assert_eq!(
            Language::Python.render(&definition()),
            "# standard, [RFC9110, Section 8.3]\nCONTENT_TYPE = \"Content-Type\"\n"
        );
    }

    #[test]
    fn rust_definition() {
        assert_eq!(
            Language::Rust.render(&definition()),
            "// standard, [RFC9110, Section 8.3]\npub const CONTENT_TYPE: &str = \"Content-Type\";\n"
        );
    }

    #[test]
    fn imports() {
        assert_eq!(Language::Python.import("http"), "from http import *");
        assert_eq!(
            Language::Rust.import("http"),
            "pub mod http;\npub use self::http::*;"
        );
    }

    #[test]
    fn file_names() {
        assert_eq!(Language::Python.module_file("mail"), "mail.py");
        assert_eq!(Language::Python.package_file(), "__init__.py");
        assert_eq!(Language::Rust.module_file("mail"), "mail.rs");
        assert_eq!(Language::Rust.package_file(), "mod.rs");
    }
}
