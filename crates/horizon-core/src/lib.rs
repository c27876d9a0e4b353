pub mod align;
pub mod color;
pub mod consts;
pub mod error;
pub mod frame;
pub mod gallery;
pub mod io;
pub mod panels;
pub mod pipeline;
pub mod validate;
