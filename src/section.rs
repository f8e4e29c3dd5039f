//! Comment-block accumulator — collects directive data for one contiguous
//! `///` block and renders it into a namespace-qualified stub declaration.
//!
//! Annotation shapes the accumulator understands:
//!
//! - `/// @function geo.vector.add`
//! - `/// @param {Vector} a first operand` (or untyped: `/// @param a first operand`)
//! - `/// @return {Vector} component-wise sum` (or untyped)
//!
//! Typed `@param`/`@return` lines are stored with the `{Type}` token
//! stripped, so the passthrough text the documentation generator sees is
//! free of bracket annotations.

use anyhow::{bail, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Return type recorded when no `{Type}` annotation is present.
pub const UNSPECIFIED_RETURN: &str = "undefined";

/// Parameter type recorded when no `{Type}` annotation is present.
pub const DEFAULT_PARAM_TYPE: &str = "Object";

static RE_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*///\s+@function\s+(.*)$").unwrap());

static RE_PARAM_TYPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)///\s+@param\s+\{(\w*)\}\s+(.+?)(\s+.*)$").unwrap());

static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*///\s+@param\s+(\S+)").unwrap());

static RE_RETURN_TYPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)///\s+@return\s+\{(\w+)\}(\s+.*)$").unwrap());

/// One documentation comment block and the stub derived from it.
///
/// Mutated only while its block is being read; the driver renders and
/// replaces it once the first non-comment line after the block shows up.
#[derive(Debug)]
pub struct Section {
    name: String,
    namespaces: Vec<String>,
    params: Vec<Param>,
    return_type: String,
    comments: Vec<String>,
}

#[derive(Debug)]
struct Param {
    name: String,
    ty: String,
}

impl Default for Section {
    fn default() -> Self {
        Section {
            name: String::new(),
            namespaces: Vec::new(),
            params: Vec::new(),
            return_type: UNSPECIFIED_RETURN.to_string(),
            comments: Vec::new(),
        }
    }
}

impl Section {
    /// `@function <dotted.path>` — the last path segment becomes the
    /// function name, the leading segments its enclosing namespaces.
    /// The `@function` line itself is not kept as passthrough text.
    pub fn handle_function(&mut self, line: &str) -> Result<()> {
        let Some(caps) = RE_FUNCTION.captures(line) else {
            bail!("malformed @function directive: {line:?}");
        };
        let mut path: Vec<String> = caps[1].split('.').map(str::to_string).collect();
        self.name = path.pop().unwrap_or_default();
        self.namespaces = path;
        Ok(())
    }

    /// `@param {Type} name desc` or `@param name desc`.
    ///
    /// The typed form is rewritten without the `{Type}` token before being
    /// stored; the untyped form is stored unchanged and the parameter is
    /// recorded with the `Object` default type.
    pub fn handle_param(&mut self, line: &str) -> Result<()> {
        if let Some(caps) = RE_PARAM_TYPED.captures(line) {
            let name = caps[3].to_string();
            self.comments
                .push(format!("{}/// @param {}{}", &caps[1], name, &caps[4]));
            self.params.push(Param {
                name,
                ty: caps[2].to_string(),
            });
            return Ok(());
        }
        let Some(caps) = RE_PARAM.captures(line) else {
            bail!("malformed @param directive: {line:?}");
        };
        self.params.push(Param {
            name: caps[1].to_string(),
            ty: DEFAULT_PARAM_TYPE.to_string(),
        });
        self.comments.push(line.to_string());
        Ok(())
    }

    /// `@return {Type} desc` or `@return desc`.
    ///
    /// The last `@return` in a block wins; a missing `{Type}` leaves the
    /// type unspecified. Never an error.
    pub fn handle_return(&mut self, line: &str) {
        self.return_type = UNSPECIFIED_RETURN.to_string();
        if let Some(caps) = RE_RETURN_TYPED.captures(line) {
            self.return_type = caps[2].to_string();
            self.comments
                .push(format!("{}/// @return{}", &caps[1], &caps[3]));
        } else {
            self.comments.push(line.to_string());
        }
    }

    /// Any other comment line — kept verbatim.
    pub fn handle_comment(&mut self, line: &str) {
        self.comments.push(line.to_string());
    }

    /// Assemble the stub block: namespace wrappers, passthrough comment
    /// lines, and (when a function was declared) the signature line.
    pub fn render(&self) -> String {
        let mut doc: Vec<String> = Vec::new();

        for ns in &self.namespaces {
            doc.push(format!("namespace {ns} {{"));
        }

        doc.extend(self.comments.iter().cloned());

        if !self.name.is_empty() {
            let args: Vec<String> = self
                .params
                .iter()
                .map(|p| format!("{} {}", p.ty, p.name))
                .collect();
            doc.push(format!(
                "{} {}({});",
                self.return_type,
                self.name,
                args.join(", ")
            ));
        }

        for _ in &self.namespaces {
            doc.push("}".to_string());
        }

        doc.join("\n")
    }
}
