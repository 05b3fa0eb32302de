use crate::core::models::Course;
use crate::errors::{Error, Result};

/// Ordered course list. Position is the only identity a course has:
/// selections are 1-based and removing one shifts the rest down.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CourseRepository {
    items: Vec<Course>,
}

impl CourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_courses(items: Vec<Course>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Course] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.items.iter()
    }

    pub fn add(&mut self, name: impl Into<String>, attended: u32, conducted: u32) -> Result<&Course> {
        let course = Course::new(name, attended, conducted)?;
        self.items.push(course);
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn get(&self, index: usize) -> Result<&Course> {
        let pos = self.position(index)?;
        Ok(&self.items[pos])
    }

    pub fn modify(&mut self, index: usize, attended: u32, conducted: u32) -> Result<&Course> {
        let pos = self.position(index)?;
        self.items[pos].modify(attended, conducted)
    }

    pub fn remove(&mut self, index: usize) -> Result<Course> {
        let pos = self.position(index)?;
        Ok(self.items.remove(pos))
    }

    pub fn replace_all(&mut self, items: Vec<Course>) {
        self.items = items;
    }

    /// Map a 1-based selection onto a vector position.
    fn position(&self, index: usize) -> Result<usize> {
        if self.items.is_empty() {
            return Err(Error::NoCourses);
        }
        if index == 0 || index > self.items.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(index - 1)
    }
}

impl<'a> IntoIterator for &'a CourseRepository {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
