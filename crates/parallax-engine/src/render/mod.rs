pub mod labels;
pub mod vector;
