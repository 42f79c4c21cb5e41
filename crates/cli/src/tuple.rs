//! Parser for parametrized-open tuple literals.
//!
//! An open test is declared as one row of a macro table:
//!
//! ```text
//! open_ne_03: (libc::O_RDONLY, libc::O_CREAT, true, 0),
//! ```
//!
//! The four positional fields are access mode, open flags, success flag,
//! and expected errno. The `libc::` qualifier is presentation noise and is
//! stripped before storage.

use crate::error::{Error, Result};

/// Namespace qualifier stripped from mode, flags, and errno tokens.
const NAMESPACE_PREFIX: &str = "libc::";

/// Parsed arguments of one open test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCase {
    /// Access mode token, e.g. `O_RDONLY` or `S_IRWXU`.
    pub permissions: String,
    /// Open flags token, e.g. `O_NONBLOCK`.
    pub options: String,
    /// Expected errno name; `None` means the open must succeed.
    pub expected_error: Option<String>,
}

fn strip_namespace(token: &str) -> &str {
    token.strip_prefix(NAMESPACE_PREFIX).unwrap_or(token)
}

/// Parse the tuple literal from a declaration line.
///
/// `text` is the full source line containing `<name>: (...)`. Any shape
/// deviation is fatal: wrong field count, an unknown success-flag token, or
/// a `true` flag paired with a nonzero errno.
pub fn parse_open_case(name: &str, text: &str) -> Result<OpenCase> {
    let shape_err = |message: String| Error::MetadataShape {
        name: name.to_string(),
        message,
    };

    let open = text
        .find('(')
        .ok_or_else(|| shape_err("no tuple literal on declaration line".to_string()))?;
    let close = text
        .rfind(')')
        .filter(|&close| close > open)
        .ok_or_else(|| shape_err("unterminated tuple literal".to_string()))?;

    let fields: Vec<&str> = text[open + 1..close].split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(shape_err(format!(
            "expected 4 tuple fields, found {}",
            fields.len()
        )));
    }

    let permissions = strip_namespace(fields[0]).to_string();
    let options = strip_namespace(fields[1]).to_string();
    let errno = strip_namespace(fields[3]);

    let expected_error = match fields[2] {
        "true" => {
            if errno != "0" {
                return Err(shape_err(format!(
                    "success case must carry errno 0, found {errno}"
                )));
            }
            None
        }
        "false" => Some(errno.to_string()),
        other => return Err(shape_err(format!("unknown success flag {other:?}"))),
    };

    Ok(OpenCase {
        permissions,
        options,
        expected_error,
    })
}

#[cfg(test)]
#[path = "tuple_tests.rs"]
mod tests;
