use crate::ui::ansi::{
    CLEAR_LINE_REST, CURSOR_UP_ONE, FG_LIGHT_GRAY, PROMPT_STYLE, STYLE_BOLD, STYLE_ITALIC,
    STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

/// Screen-level helpers: the banner and the styled input line.
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner_lines(&self) -> Vec<String> {
        const INNER_WIDTH: usize = 50;
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}A T T E N D I T{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Attendance management system{STYLE_RESET}");
        vec![
            format!("╭{}╮", "─".repeat(INNER_WIDTH)),
            format!("│{}│", self.center_in_box(&title, INNER_WIDTH)),
            format!("│{}│", self.center_in_box(&subtitle, INNER_WIDTH)),
            format!("╰{}╯", "─".repeat(INNER_WIDTH)),
        ]
    }

    /// Print the banner centered in the terminal.
    pub fn print_banner(&self) {
        let lines = self.banner_lines();
        let width = lines.first().map_or(0, |l| self.util.visible_width(l));
        let pad = " ".repeat(self.util.center_pad(width));
        for line in lines {
            println!("{pad}{line}");
        }
    }

    /// Draw `prompt` on a shaded line and park the cursor after it.
    pub fn print_prompt(&self, prompt: &str) {
        self.print_padding_line();
        print!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET}\n");
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}");
        let column = self.util.visible_width(prompt) + 1;
        print!("{CURSOR_UP_ONE}\x1B[{column}G{PROMPT_STYLE}");
        let _ = io::stdout().flush();
    }

    /// Close the shaded block after input and reset styling for output.
    pub fn finish_prompt(&self) {
        self.print_padding_line();
        println!("{STYLE_RESET}");
        let _ = io::stdout().flush();
    }

    fn print_padding_line(&self) {
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}\n");
    }

    pub fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
