//! # Artifact Store Module
//!
//! This module provides functionality for persisting the intermediate and
//! final artifacts of a podcast run: the consolidated article text, the
//! narration script, and the synthesized audio.
//!
//! The module exposes an abstraction layer over storage backends so the
//! pipeline can checkpoint artifacts without caring where they land.

mod sink;

pub use sink::fs::{FsArtifactSink, AUDIO_FILE, CONSOLIDATED_TEXT_FILE, NARRATION_SCRIPT_FILE};
pub use sink::ArtifactSink;
