//! The interactive navigator.
//!
//! [`state::NavigatorState`] holds directory, selection and scroll;
//! [`navigator::Navigator`] drives it from key events over a
//! [`navigator::Surface`]; [`render`] draws it with ratatui; [`filter`]
//! orders and filters listings.

pub mod filter;
pub mod navigator;
pub mod render;
pub mod state;
