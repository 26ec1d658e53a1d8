pub mod group;
pub mod option;
pub mod rule;
pub mod selections;
