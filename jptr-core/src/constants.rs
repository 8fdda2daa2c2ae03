//! Reserved characters and tokens of the JSON Pointer wire format

/// Separator between reference tokens, and the required first character of
/// every non-empty pointer.
pub const SEPARATOR: char = '/';
/// Escape character introducing `~0` and `~1`.
pub const ESCAPE: char = '~';
/// Wire form of a literal `~` inside a reference token.
pub const ESCAPED_ESCAPE: &str = "~0";
/// Wire form of a literal `/` inside a reference token.
pub const ESCAPED_SEPARATOR: &str = "~1";
/// Reserved token naming the element one past the end of an array.
///
/// Only meaningful as the last token of a write.
pub const APPEND_MARKER: &str = "-";
