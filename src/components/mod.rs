pub mod app;
pub mod paper;
pub mod paper_content;
