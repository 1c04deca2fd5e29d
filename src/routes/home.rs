use dioxus::prelude::*;
use crate::components::{ProfileCard, DEFAULT_AVATAR_URL};

/// Edge of the page's primary profile image, in CSS pixels
pub const HERO_AVATAR_SIZE: u32 = 100;

pub const OWNER_NAME: &str = "John Doe";
pub const OWNER_ROLE: &str = "Developer";

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "max-w-2xl mx-auto px-6 py-12 flex flex-col items-center gap-8",

            // Primary profile image
            img {
                src: DEFAULT_AVATAR_URL,
                alt: "Profile",
                width: "{HERO_AVATAR_SIZE}",
                height: "{HERO_AVATAR_SIZE}",
                class: "rounded-full"
            }

            ProfileCard {
                name: OWNER_NAME.to_string(),
                role: OWNER_ROLE.to_string(),
            }
        }
    }
}
