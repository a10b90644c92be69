pub mod baseline;
pub mod dashboard;
pub mod dispatch;
pub mod features;
pub mod predict;
pub mod status;
