//! UI module for the ConCrete Calculator GUI
//!
//! # Panel Structure
//! - `toolbar` - Title header and theme toggle
//! - `input_panel` - Left panel: dimension inputs, Calculate and Clear
//! - `results_panel` - Right panel: volume and bag counts, or a prompt
//! - `status_bar` - Bottom status messages

pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;
