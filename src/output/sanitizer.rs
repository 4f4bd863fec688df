//! Terminal escape stripping for captured command output.

use vte::{Params, Parser, Perform};

/// Removes terminal control sequences from command output.
///
/// Programs such as `ls --color=always` or `grep --color=always` embed
/// colour codes even when writing to a pipe. Overstrike sequences
/// (`x\x08x`, used by `man` for bold) collapse to the final character.
pub struct OutputSanitizer;

impl OutputSanitizer {
    /// Strip escape sequences from raw bytes.
    ///
    /// Invalid UTF-8 becomes U+FFFD.
    pub fn strip_ansi(input: &[u8]) -> String {
        let mut text = PlainText::default();
        let mut parser = Parser::new();
        parser.advance(&mut text, input);
        text.0
    }

    /// Strip escape sequences from a string.
    pub fn strip_ansi_str(input: &str) -> String {
        Self::strip_ansi(input.as_bytes())
    }
}

#[derive(Default)]
struct PlainText(String);

impl Perform for PlainText {
    fn print(&mut self, c: char) {
        self.0.push(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' | b'\r' | b'\t' => self.0.push(byte as char),
            // backspace
            0x08 => {
                self.0.pop();
            }
            _ => {}
        }
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {}

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {}

    fn csi_dispatch(
        &mut self,
        _params: &Params,
        _intermediates: &[u8],
        _ignore: bool,
        _action: char,
    ) {
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, _byte: u8) {}
}
