pub mod api;
pub mod errors;
pub mod manifest;
pub mod preview;
pub mod report;
pub mod scaffold;
