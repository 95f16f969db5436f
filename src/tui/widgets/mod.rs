pub mod calendar;
pub mod challenge;
pub mod chart;
pub mod distribution;
pub mod header;
pub mod statusbar;
