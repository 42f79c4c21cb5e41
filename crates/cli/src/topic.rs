//! Topic derivation from test names.

/// The topic a test belongs to: its name with the final `_<suffix>` segment
/// removed. A name without `_` is its own topic.
///
/// `open_creat_07` -> `open_creat`, `seek_02` -> `seek`, `fsync` -> `fsync`.
pub fn topic_of(name: &str) -> &str {
    name.rsplit_once('_').map_or(name, |(head, _)| head)
}

#[cfg(test)]
#[path = "topic_tests.rs"]
mod tests;
