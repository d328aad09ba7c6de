pub mod coordinate;
pub mod mark;
pub mod person;
