pub mod contact;
mod fields;
pub mod roi;
pub mod survey;
