//! Operations exposed by the command line
//!
//! - `compare`: align two sources under a policy and print the change report

pub mod compare;
