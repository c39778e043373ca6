pub mod encoder;
pub mod error;
pub mod export;
pub mod wav_writer;
pub mod waveform;

pub use encoder::{encode, encode_all, Scheme};
pub use error::EncodeError;
pub use waveform::Waveform;
