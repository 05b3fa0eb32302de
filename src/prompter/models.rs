use crate::errors::Result;
use strum_macros::{Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowCtrl {
    Continue,
    Finish,
}

pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}

/// Main menu entries, selectable by number or by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum MenuOption {
    #[strum(serialize = "1", serialize = "add", to_string = "Add New Course")]
    Add,
    #[strum(serialize = "2", serialize = "modify", to_string = "Modify Course Attendance")]
    Modify,
    #[strum(serialize = "3", serialize = "remove", to_string = "Remove Course")]
    Remove,
    #[strum(serialize = "4", serialize = "predict", to_string = "Predict Attendance")]
    Predict,
    #[strum(serialize = "5", serialize = "report", to_string = "Generate Attendance Report")]
    Report,
    #[strum(serialize = "6", serialize = "exit", to_string = "Exit")]
    Exit,
}

impl MenuOption {
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    Menu,
    AddName,
    AddAttended { name: String },
    AddConducted { name: String, attended: u32 },
    ModifySelect,
    ModifyAttended { index: usize },
    ModifyConducted { index: usize, attended: u32 },
    RemoveSelect,
    /// Asking for future classes of the course at this 0-based position.
    Predict { position: usize },
}
