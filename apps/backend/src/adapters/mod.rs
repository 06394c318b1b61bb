pub mod videos_sea;
