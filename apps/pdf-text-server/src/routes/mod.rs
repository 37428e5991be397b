//! Route modules for the PDF Text Extractor server

pub mod extract;
pub mod health;
pub mod root;
