//! Declarative configuration for the Tatami window manager.
//!
//! The host reads a [`Config`] at startup: a color palette, keybinds,
//! groups, layouts, per-screen bars, mousebinds, floating rules, and a
//! handful of global behavior flags. [`Config::default`] is the stock
//! configuration, assembled top to bottom in load order and never mutated
//! afterwards; [`Config::load`] reads the same structure from
//! `config.toml` in a config directory.
//!
//! Nothing in this crate manages windows. Binds and widgets are inert
//! data the host interprets; validation ([`Config::check`]) catches the
//! structural mistakes that would otherwise only surface at dispatch
//! time.

pub mod action;
pub mod bar;
pub mod cli;
pub mod config;
pub mod group;
pub mod input;
pub mod layout;
pub mod rules;
pub mod theme;
pub mod validate;

pub use config::Config;
