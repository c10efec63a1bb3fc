// Each test binary uses a subset of the helpers.
#![allow(dead_code)]

pub mod env;
pub mod http;
