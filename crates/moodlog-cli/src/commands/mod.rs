pub mod calendar;
pub mod entries;
pub mod init;
pub mod misc;
pub mod moods;
pub mod quote;
pub mod stats;
