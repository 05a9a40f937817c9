//! Main module for tsexpr library functionality

pub mod ast;
pub mod building;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
