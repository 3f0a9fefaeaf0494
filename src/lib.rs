/// Where the template lives and what day it is.
pub mod config;

/// Parse the command line and fill the label template with it.
pub mod label;

/// Hand a finished label to the first printer that can be found.
pub mod dispatch;

/// Connect to a Godex label printer over USB and send EZPL to it.
pub mod printer;
