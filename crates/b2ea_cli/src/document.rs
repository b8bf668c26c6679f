//! Document assembly around the emitted code.
//!
//! The encoder output is treated as an opaque inner string here; this layer
//! only concatenates the label/`#define` header, the before/after literal
//! text and the trailing newline around it.

/// How the emitted code is headed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// `<name>:` on its own line, code indented below it.
    Plain(String),
    /// `#define <name> "<code>"`, always newline-terminated.
    Define(String),
}

/// Wrapping choices for one output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub label: Option<Label>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub newline: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        DocumentOptions {
            label: None,
            before: None,
            after: None,
            newline: true,
        }
    }
}

/// Builds the final output text around the emitted `code`.
pub fn wrap_document(code: &str, options: &DocumentOptions) -> String {
    let mut out = String::with_capacity(code.len() + 256);

    match &options.label {
        Some(Label::Define(name)) => {
            out.push_str("#define ");
            out.push_str(name);
            out.push_str(" \"");
        }
        Some(Label::Plain(name)) => {
            out.push_str(name);
            out.push_str(":\n\t");
        }
        None => {}
    }

    if let Some(before) = &options.before {
        out.push_str(before);
        out.push_str("; ");
    }

    out.push_str(code);

    if let Some(after) = &options.after {
        out.push_str("; ");
        out.push_str(after);
    }

    // A #define body must close its quote and end the line no matter what
    // the newline flag says.
    if matches!(options.label, Some(Label::Define(_))) {
        out.push_str("\"\n");
    } else if options.newline {
        out.push('\n');
    }

    out
}
