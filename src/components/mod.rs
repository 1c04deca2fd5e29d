// UI Components
// This module contains all reusable UI components

pub mod profile_card;

pub use profile_card::{ProfileCard, DEFAULT_AVATAR_URL};
