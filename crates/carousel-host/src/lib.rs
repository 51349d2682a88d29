//! Desktop/terminal platform adapters for the carousel controller.

pub mod animation;
pub mod input;
pub mod render;
pub mod storage;
