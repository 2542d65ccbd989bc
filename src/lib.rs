pub mod bot;
pub mod chart;
pub mod command;
pub mod constants;
pub mod game;
pub mod input;
pub mod map;
pub mod position;
pub mod render;
