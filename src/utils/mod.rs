pub mod interactive;
pub mod output;

pub use interactive::*;
pub use output::*;
