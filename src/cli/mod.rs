pub mod convert;
pub mod deconvert;
pub mod decrypt;
pub mod encrypt;

pub use convert::{convert_file, ConvertOptions};
pub use deconvert::deconvert_file;
pub use decrypt::decrypt_file;
pub use encrypt::{encrypt_file, EncryptOptions};
