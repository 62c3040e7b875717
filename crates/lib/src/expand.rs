//! Environment variable substitution for manifest text.
//!
//! Substitution runs on the raw manifest before it is parsed, so a variable
//! can supply any scalar in the document, including values nested deep inside
//! a package's target section.
//!
//! # Reference Formats
//!
//! - `${NAME}` - value of `NAME`, or the empty string if unset
//! - `$NAME` - same, where `NAME` is made of ASCII letters, digits and `_`
//!
//! # Literal Dollars
//!
//! A `$` that is not followed by `{` or a name character passes through
//! unchanged. An unclosed `${` is dropped and the text after it is scanned
//! as usual. There is no escape sequence: a well-formed `${...}` is always
//! substituted.
//!
//! # Example
//!
//! ```
//! use fpmfile_lib::expand::expand_with;
//!
//! let text = expand_with("version: ${GITHUB_REF}", |name| {
//!     (name == "GITHUB_REF").then(|| "refs/tags/v1.0.0".to_string())
//! });
//! assert_eq!(text, "version: refs/tags/v1.0.0");
//! ```

/// Expand references against the current process environment.
///
/// Values that are not valid unicode are converted lossily.
pub fn expand_env(input: &str) -> String {
  expand_with(input, |name| {
    std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
  })
}

/// Expand references using `lookup` to resolve variable names.
///
/// Unresolved names expand to the empty string.
pub fn expand_with<F>(input: &str, lookup: F) -> String
where
  F: Fn(&str) -> Option<String>,
{
  let mut result = String::with_capacity(input.len());
  let mut chars = input.char_indices().peekable();

  while let Some((pos, ch)) = chars.next() {
    if ch != '$' {
      result.push(ch);
      continue;
    }

    match chars.peek() {
      Some((_, '{')) => {
        let rest = &input[pos + 2..];
        match rest.find('}') {
          Some(end) => {
            let name = &rest[..end];
            if let Some(value) = lookup(name) {
              result.push_str(&value);
            }
            // Skip past the name and the closing brace
            let close = pos + 2 + end;
            for (i, _) in chars.by_ref() {
              if i == close {
                break;
              }
            }
          }
          None => {
            // Unclosed reference: eat the `${` and carry on after it
            chars.next();
          }
        }
      }
      Some((_, c)) if is_name_char(*c) => {
        let mut name = String::new();
        while let Some((_, c)) = chars.peek() {
          if !is_name_char(*c) {
            break;
          }
          name.push(*c);
          chars.next();
        }
        if let Some(value) = lookup(&name) {
          result.push_str(&value);
        }
      }
      _ => result.push('$'),
    }
  }

  result
}

fn is_name_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_'
}
