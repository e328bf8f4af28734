#![allow(dead_code)]

pub mod netpredict_env;
pub mod service;
