pub mod pipeline;
pub mod recitation;
pub mod scoring;
pub mod shared;
pub mod text;
