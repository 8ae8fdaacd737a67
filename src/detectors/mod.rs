pub mod content;
pub mod fields;
pub mod honeypot;
pub mod timing;
