//! I/O boundary: decoding and encoding image files

pub mod image_io;
