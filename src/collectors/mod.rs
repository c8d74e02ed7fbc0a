//! Information collectors for the local machine

pub mod hardware;
