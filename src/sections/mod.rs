//! Password evaluation sections
//!
//! Each section scores one rule of the rubric independently.

mod blacklist;
mod length;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use variety::character_variety_section;

/// Points granted by one section plus the advice it produced, in the
/// order its checks ran.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SectionScore {
    pub points: u8,
    pub feedback: Vec<&'static str>,
}

impl SectionScore {
    pub(crate) fn award(&mut self, points: u8) {
        self.points += points;
    }

    pub(crate) fn advise(&mut self, advice: &'static str) {
        self.feedback.push(advice);
    }
}
