//! Turn a Python source file into a self-contained, Monokai-highlighted HTML
//! page.
//!
//! Lexing is syntect's job; this crate owns the stylesheet, the page
//! template, and the two front ends that read a file, render it, and write
//! the page next to it.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
