pub mod date;
pub mod ident;
pub mod table;
