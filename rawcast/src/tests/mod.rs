mod fixed;
mod text;
