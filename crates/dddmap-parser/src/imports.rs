//! Import path helpers.
//!
//! A qualified type such as `sales.Order` only names the local alias of an
//! import. These helpers map that alias back to the full import path.

use crate::ast::ImportSpec;

/// Strips one pair of surrounding double quotes, if both are present.
///
/// # Examples
///
/// ```
/// use dddmap_parser::unwrap_literal;
///
/// assert_eq!(unwrap_literal("\"a/b\""), "a/b");
/// assert_eq!(unwrap_literal("a/b"), "a/b");
/// ```
pub fn unwrap_literal(literal: &str) -> &str {
    literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(literal)
}

/// Finds the full path of the import bound to `name`.
///
/// An import is bound to its alias when it has one, otherwise to the last
/// segment of its path. The first matching import wins. Returns an empty
/// string when no import matches.
///
/// # Examples
///
/// ```
/// use dddmap_parser::{ImportSpec, resolve_path};
///
/// let imports = vec![ImportSpec::new("\"github.com/dddplayer/core\"")];
/// assert_eq!(resolve_path(&imports, "core"), "github.com/dddplayer/core");
/// assert_eq!(resolve_path(&imports, "other"), "");
/// ```
pub fn resolve_path(imports: &[ImportSpec], name: &str) -> String {
    imports
        .iter()
        .map(|spec| (spec, unwrap_literal(spec.path_literal())))
        .find(|(spec, path)| {
            let bound = match spec.alias() {
                Some(alias) => alias,
                None => path.rsplit('/').next().unwrap_or(path),
            };
            bound == name
        })
        .map(|(_, path)| path.to_string())
        .unwrap_or_default()
}
