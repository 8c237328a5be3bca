//! # Transcript Module
//!
//! Domain types shared between the transcript-retrieval side of the system and
//! the summarization pipeline, plus the [`TranscriptSource`] abstraction the
//! pipeline uses to obtain a video's metadata and transcript.
//!
//! Retrieval itself (scraping the video platform, caption download) lives
//! behind the trait; this crate only describes the shapes that flow through it.

mod domain;
mod source;

pub use domain::{TranscriptInput, TranscriptSegment, VideoInfo, VideoTranscript};
pub use source::TranscriptSource;
