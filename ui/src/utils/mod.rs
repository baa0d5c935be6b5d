pub mod clipboard;
pub mod colors;
pub mod download;
pub mod png;
pub mod qr;
pub mod theme;
