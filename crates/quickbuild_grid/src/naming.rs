//! Exit naming and alias derivation.
//!
//! Exits are typed by players, so each one gets a short alias. A name that
//! already carries `<b>racket` markup yields its bracketed letters as the
//! alias (`<N>orth` gives `N`). With auto-bracketing on, unmarked names are
//! bracketed word by word (`North East` gives `<N>orth <E>ast;NE`).

use std::sync::LazyLock;

use regex::Regex;

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(\S+)>").unwrap_or_else(|e| panic!("invalid bracket pattern: {e}"))
});

/// Exit naming switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamingOptions {
    /// Extract the alias from names that already contain `<X>` markup.
    pub detect_brackets: bool,
    /// Bracket the first letter of every word of unmarked names.
    pub auto_brackets: bool,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            detect_brackets: true,
            auto_brackets: false,
        }
    }
}

impl NamingOptions {
    /// Builder method to toggle bracket detection.
    #[must_use]
    pub fn with_detect_brackets(mut self, detect: bool) -> Self {
        self.detect_brackets = detect;
        self
    }

    /// Builder method to toggle auto-bracketing.
    #[must_use]
    pub fn with_auto_brackets(mut self, auto: bool) -> Self {
        self.auto_brackets = auto;
        self
    }
}

/// Builds the full `name;alias;alias` string for an exit.
///
/// `declared` is the exit's display name, optionally followed by
/// `;`-separated aliases that are kept after the derived one.
#[must_use]
pub fn exit_name(declared: &str, options: NamingOptions) -> String {
    let (base, given) = declared.split_once(';').unwrap_or((declared, ""));

    let (display, short) = if options.detect_brackets && BRACKETED.is_match(base) {
        let short: String = BRACKETED
            .captures_iter(base)
            .map(|caps| caps[1].to_string())
            .collect();
        (base.to_string(), short)
    } else if options.auto_brackets {
        let short: String = base
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect();
        let display = base
            .split_whitespace()
            .map(bracket_first_letter)
            .collect::<Vec<_>>()
            .join(" ");
        (display, short)
    } else {
        (base.to_string(), String::new())
    };

    std::iter::once(display.as_str())
        .chain(std::iter::once(short.as_str()))
        .chain(given.split(';'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(";")
}

/// Returns the part of a full exit name usable as a single-token reference.
#[must_use]
pub fn short_form(full_name: &str) -> &str {
    full_name.split(';').next().unwrap_or(full_name)
}

fn bracket_first_letter(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("<{first}>{}", chars.as_str()),
        None => String::new(),
    }
}
