//! ISO 27001:2022 audit practice deck: content, navigation, and the
//! interactive and print views.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod deck;
pub mod error;
pub mod fonts;
pub mod icons;
pub mod nav;
pub mod render;
pub mod theme;
pub mod views;
