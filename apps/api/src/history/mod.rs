// Saved analyses: persistence, listing and text report downloads.

pub mod handlers;
pub mod report;
pub mod store;
