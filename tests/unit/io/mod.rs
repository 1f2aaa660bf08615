mod image;
mod render;
mod visualization;
