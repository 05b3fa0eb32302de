// ANSI/VT100 control sequences used by the shell.

#[macro_export]
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}

#[macro_export]
macro_rules! csi2 {
    ($first:literal, $second:literal) => {
        concat!("\x1B[", $first, "\x1B[", $second)
    };
}

/// ESC as a byte, for stripping sequences back out.
pub const ESC_BYTE: u8 = 0x1B;

pub const CLEAR_LINE_REST: &str = crate::csi!("0K");
pub const CURSOR_UP_ONE: &str = crate::csi!("1A");

pub const STYLE_RESET: &str = crate::csi!("0m");
pub const STYLE_BOLD: &str = crate::csi!("1m");
pub const STYLE_ITALIC: &str = crate::csi!("3m");
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
pub const FG_GREEN: &str = crate::csi!("32m");
pub const FG_YELLOW: &str = crate::csi!("33m");
pub const FG_RED: &str = crate::csi!("31m");
/// White on dark gray, used for the input line.
pub const PROMPT_STYLE: &str = crate::csi2!("38;5;15m", "48;5;236m");
