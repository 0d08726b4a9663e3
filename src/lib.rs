//! Terminal client for a Kokoro text-to-speech HTTP service.
//!
//! [`client`] sends `POST /tts` and classifies the reply into a
//! [`client::SynthesisOutcome`]; [`form`] holds the fields the user edits and
//! drives submissions; [`audio`] inspects, saves and plays the result.

pub mod audio;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
