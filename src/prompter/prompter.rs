use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use std::io::{self, BufRead, BufReader};

/// Render / read / dispatch loop shared by every interactive flow.
#[derive(Debug, Default, Clone)]
pub struct Prompter;

impl Prompter {
    pub fn new() -> Self {
        Self
    }

    pub fn run<F: Flow>(&self, flow: F) -> Result<()> {
        let reader = BufReader::new(io::stdin());
        self.run_with_reader(flow, reader)
    }

    /// Runs until the flow finishes or `reader` hits EOF.
    pub fn run_with_reader<F: Flow, R: BufRead>(&self, mut flow: F, mut reader: R) -> Result<()> {
        loop {
            flow.render()?;

            let mut line = String::new();
            let n = reader.read_line(&mut line).map_err(Error::Io)?;
            if n == 0 {
                return Ok(());
            }

            match flow.handle_input(line.trim())? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish => return Ok(()),
            }
        }
    }
}
