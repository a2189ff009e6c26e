//! The mbus module contains the components responsible for the data-link
//! frame structure of the wired M-Bus protocol: recognizing frame types and
//! validating their checksums.

pub mod frame;

pub use frame::{decode_frame, Frame};
