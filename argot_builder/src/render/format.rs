use terminal_size::{terminal_size, Width};

use crate::binder::BindingError;
use crate::constant::ERRORS_HEADING;

/// A specification's help text: either literal, or a pointer into an
/// external resource container resolved by the [`HelpFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpText {
    /// Text rendered as-is.
    Literal(String),
    /// A `(container, name)` pair for the format to resolve.
    Resource {
        /// The resource container (ex: a bundle or table name).
        container: String,
        /// The resource name within the container.
        name: String,
    },
}

/// One line of the help document: a usage summary plus a section listing.
#[derive(Debug, Clone)]
pub struct HelpEntry {
    pub(crate) positional: bool,
    pub(crate) summary: String,
    pub(crate) listing: String,
    pub(crate) help: Option<HelpText>,
}

impl HelpEntry {
    pub(crate) fn new(
        positional: bool,
        summary: String,
        listing: String,
        help: Option<HelpText>,
    ) -> Self {
        Self {
            positional,
            summary,
            listing,
            help,
        }
    }
}

/// Everything a [`HelpFormat`] needs to render the help document.
///
/// Entries are ordered options first (sorted by listing), then positionals in
/// index order.
#[derive(Debug, Clone)]
pub struct HelpDraft {
    pub(crate) program: String,
    pub(crate) about: Option<String>,
    pub(crate) entries: Vec<HelpEntry>,
}

impl HelpDraft {
    pub(crate) fn new(program: String, about: Option<String>, entries: Vec<HelpEntry>) -> Self {
        Self {
            program,
            about,
            entries,
        }
    }
}

/// The formatting strategy for help documents and error reports.
///
/// Passed explicitly into render calls; implement this to restyle the output
/// or to resolve resource-declared help text.
pub trait HelpFormat {
    /// Render the help document into display lines.
    fn render_help(&self, draft: &HelpDraft) -> Vec<String>;

    /// Render accumulated binding errors into display lines.
    fn render_errors(&self, errors: &[BindingError]) -> Vec<String>;

    /// Resolve a resource-declared help text.  The default resolves nothing;
    /// this is the localization boundary.
    fn lookup_resource(&self, _container: &str, _name: &str) -> Option<String> {
        None
    }
}

/// The standard format: `usage:` summary line, `positional arguments:` and
/// `options:` sections, long lines truncated to the display width.
pub struct DefaultFormat {
    width: Option<usize>,
}

impl DefaultFormat {
    /// Bound output lines by the current terminal width (unbounded when the
    /// width cannot be detected).
    pub fn terminal() -> Self {
        if let Some((Width(terminal_width), _)) = terminal_size() {
            Self {
                width: Some(terminal_width as usize),
            }
        } else {
            Self { width: None }
        }
    }

    /// Bound output lines by a fixed width.
    pub fn fixed(width: usize) -> Self {
        Self { width: Some(width) }
    }

    /// Never truncate output lines.
    pub fn unbounded() -> Self {
        Self { width: None }
    }

    fn clip(&self, line: String) -> String {
        match self.width {
            Some(width) if line.chars().count() > width => line.chars().take(width).collect(),
            _ => line,
        }
    }

    fn resolve(&self, help: &HelpText) -> String {
        match help {
            HelpText::Literal(text) => text.clone(),
            HelpText::Resource { container, name } => self
                .lookup_resource(container, name)
                .unwrap_or_else(|| name.clone()),
        }
    }

    fn section(&self, heading: &str, entries: &[&HelpEntry], column: usize, out: &mut Vec<String>) {
        if entries.is_empty() {
            return;
        }

        out.push(heading.to_string());

        for entry in entries {
            let listing = &entry.listing;
            let line = match &entry.help {
                Some(help) => {
                    let help = self.resolve(help);
                    format!("  {listing:column$}   {help}")
                }
                None => format!("  {listing}"),
            };
            out.push(self.clip(line));
        }
    }
}

impl HelpFormat for DefaultFormat {
    fn render_help(&self, draft: &HelpDraft) -> Vec<String> {
        let mut lines: Vec<String> = Vec::default();
        let program = &draft.program;
        let summary = draft
            .entries
            .iter()
            .map(|entry| entry.summary.as_str())
            .collect::<Vec<&str>>()
            .join(" ");
        lines.push(self.clip(format!("usage: {program} {summary}")));

        if let Some(about) = &draft.about {
            lines.push(self.clip(about.clone()));
        }

        let column = draft
            .entries
            .iter()
            .map(|entry| entry.listing.len())
            .max()
            .unwrap_or(0);
        let positionals: Vec<&HelpEntry> =
            draft.entries.iter().filter(|entry| entry.positional).collect();
        let options: Vec<&HelpEntry> =
            draft.entries.iter().filter(|entry| !entry.positional).collect();
        self.section("positional arguments:", &positionals, column, &mut lines);
        self.section("options:", &options, column, &mut lines);
        lines
    }

    fn render_errors(&self, errors: &[BindingError]) -> Vec<String> {
        let mut lines = vec![ERRORS_HEADING.to_string()];
        lines.extend(errors.iter().map(|error| self.clip(format!("  {error}"))));
        lines
    }
}
