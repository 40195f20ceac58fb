pub mod list;
pub mod price;
pub mod top;
