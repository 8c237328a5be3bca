#![allow(dead_code)]

pub mod generator;
pub mod http_stub;
pub mod transcript_source;
