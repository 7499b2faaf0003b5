//! Usage text shown for `help` and unknown commands.

/// Commands and their one-line descriptions, in display order.
pub const COMMANDS: [(&str, &str); 6] = [
    ("validate", "Validate Genesis Commitment compliance"),
    ("state", "Show current state summary"),
    ("analyze", "Run recursive pattern analysis"),
    ("test", "Run integration tests"),
    ("status", "Show complete status (validate + state + analyze)"),
    ("help", "Show this help message"),
];

pub fn usage_text() -> String {
    let mut text = String::from("Genesis Commitment Framework CLI\n\n");
    text.push_str("Usage: genesis [OPTIONS] [COMMAND]\n\n");
    text.push_str("Commands:\n");
    for (name, description) in COMMANDS {
        text.push_str(&format!("  {:<10}{}\n", name, description));
    }
    text.push_str("\nOptions:\n");
    text.push_str("  -c, --config <FILE>   Path to config file (env: GENESIS_CONFIG)\n");
    text.push_str("  -p, --project <DIR>   Path to project root (env: GENESIS_PROJECT)\n");
    text.push_str("      --debug           Enable debug logging\n");
    text.push_str("      --no-color        Disable colored output\n");
    text.push_str("  -V, --version         Print version\n");
    text.push_str("\nExamples:\n");
    text.push_str("  genesis validate\n");
    text.push_str("  genesis status\n");
    text.push_str("  genesis --project ../other analyze\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_command() {
        let text = usage_text();
        for (name, _) in COMMANDS {
            assert!(text.contains(&format!("  {}", name)), "missing {}", name);
        }
    }

    #[test]
    fn has_examples() {
        assert!(usage_text().contains("Examples:\n  genesis validate"));
    }
}
