use terminal_size::{Width, terminal_size};

use crate::ui::ansi::ESC_BYTE;

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    /// Drop CSI sequences (`ESC [ ... letter`) so colored cells measure
    /// by what is actually shown.
    pub fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch as u32 == u32::from(ESC_BYTE) && chars.peek() == Some(&'[') {
                chars.next();
                for nc in chars.by_ref() {
                    if nc.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
            out.push(ch);
        }
        out
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    pub fn pad_right(&self, s: &str, width: usize) -> String {
        let fill = width.saturating_sub(self.visible_width(s));
        format!("{s}{}", " ".repeat(fill))
    }

    pub fn pad_left(&self, s: &str, width: usize) -> String {
        let fill = width.saturating_sub(self.visible_width(s));
        format!("{}{s}", " ".repeat(fill))
    }

    /// Best-effort terminal width (defaults to 80).
    pub fn terminal_width(&self) -> usize {
        match terminal_size() {
            Some((Width(w), _)) => w as usize,
            None => 80,
        }
    }

    /// Left padding that centers `content_width` columns in the terminal.
    pub fn center_pad(&self, content_width: usize) -> usize {
        self.terminal_width().saturating_sub(content_width) / 2
    }
}
