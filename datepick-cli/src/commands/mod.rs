pub mod excluded;
pub mod gaps;
pub mod reset;
pub mod show;
pub mod status;
pub mod toggle;
