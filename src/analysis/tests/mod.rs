use crate::core::attendance::Thresholds;
use crate::core::models::Course;


pub(super) fn course(name: &str, attended: u32, conducted: u32) -> Course {
    Course::new(name, attended, conducted).unwrap()
}

pub(super) fn default_thresholds() -> Thresholds {
    Thresholds::default()
}
