pub mod limits;
pub mod pan;
pub mod zoom;
