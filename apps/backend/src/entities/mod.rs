pub mod people;
pub mod videos;
