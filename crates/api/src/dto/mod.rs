pub mod about;

pub use about::AboutResponse;
