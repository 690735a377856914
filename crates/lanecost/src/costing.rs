pub mod aggregate;
pub mod margin;
