// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Terminal colouring that can be switched off.

use owo_colors::OwoColorize;

/// Applies colours when enabled, plain text otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    enabled: bool,
}

impl Style {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn pass(&self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn fail(&self, text: &str) -> String {
        self.paint(text, |t| t.red().bold().to_string())
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, |t| t.white().bold().to_string())
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan().to_string())
    }

    pub fn number(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow().to_string())
    }

    pub fn text(&self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed().to_string())
    }

    fn paint(&self, text: &str, f: impl Fn(&str) -> String) -> String {
        if self.enabled {
            f(text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_style_is_plain() {
        let style = Style::new(false);
        assert_eq!(style.fail("✗ broken"), "✗ broken");
        assert_eq!(style.dim("(2ms)"), "(2ms)");
    }

    #[test]
    fn test_enabled_style_adds_escapes() {
        let style = Style::new(true);
        assert!(style.pass("ok").contains("\u{1b}["));
    }
}
