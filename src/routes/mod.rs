pub mod health;
pub mod pacman;
