//! Visual theme and styling.

use console::Style;

/// Width of the boxed header, including the border characters.
pub const HEADER_WIDTH: usize = 60;

/// Genesis visual theme.
#[derive(Debug, Clone)]
pub struct GenesisTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for box-drawing borders and separators (dim).
    pub border: Style,
    /// Style for header titles (magenta bold).
    pub header: Style,
}

impl Default for GenesisTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GenesisTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            border: Style::new().dim(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            border: Style::new(),
            header: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), msg)
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("⚠"), msg)
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), self.error.apply_to(msg))
    }

    /// Format a boxed, centered header as three lines.
    pub fn format_header(&self, title: &str) -> Vec<String> {
        boxed_header(title)
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 1 {
                    self.header.apply_to(line).to_string()
                } else {
                    self.border.apply_to(line).to_string()
                }
            })
            .collect()
    }

    pub fn format_separator(&self) -> String {
        self.border.apply_to(separator_line()).to_string()
    }
}

/// Unstyled boxed header lines for `title`.
pub fn boxed_header(title: &str) -> Vec<String> {
    let inner = HEADER_WIDTH - 2;
    let rule = "═".repeat(inner);
    vec![
        format!("╔{}╗", rule),
        format!("║{:^width$}║", title, width = inner),
        format!("╚{}╝", rule),
    ]
}

/// Unstyled separator line printed between composed commands.
pub fn separator_line() -> String {
    "─".repeat(HEADER_WIDTH)
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
