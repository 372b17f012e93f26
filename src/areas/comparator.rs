use crate::areas::source::Source;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Two sources under comparison and the sink their report is written to
pub struct Comparator {
    old: Source,
    new: Source,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Comparator {
    pub fn new(old: &Path, new: &Path, writer: Box<dyn std::io::Write>) -> Self {
        Comparator {
            old: Source::new(old.into()),
            new: Source::new(new.into()),
            writer: RefCell::new(writer),
        }
    }

    pub fn old(&self) -> &Source {
        &self.old
    }

    pub fn new_source(&self) -> &Source {
        &self.new
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
