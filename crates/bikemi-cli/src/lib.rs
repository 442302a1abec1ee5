//! Command-line front end for `bikemi-core`: merge the BikeMi open-data feed
//! with the live stations page, then list, search and locate stations.
//!
//! ```text
//! bikemi-cli find "viale piave"
//! bikemi-cli --json nearest 45.4641 9.1919
//! bikemi-cli --basic-file info.json --extra-file stazioni.html list --sort bike
//! ```
//!
//! Everything lives in the binary; this target only carries the docs.
