pub mod assign;
pub mod roads;
