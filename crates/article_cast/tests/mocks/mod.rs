pub mod crawler;
pub mod generator;
pub mod sink;
pub mod synthesizer;
