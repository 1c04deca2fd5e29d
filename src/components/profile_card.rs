use dioxus::prelude::*;

/// Avatar shown when the caller doesn't supply one
pub const DEFAULT_AVATAR_URL: &str = "/profile.png";

/// Square avatar edge, in CSS pixels
pub const AVATAR_SIZE: u32 = 64;

#[derive(Props, Clone, PartialEq)]
pub struct ProfileCardProps {
    pub name: String,
    pub role: String,
    #[props(default)]
    pub image_url: Option<String>,
}

impl ProfileCardProps {
    /// Image source for the avatar. Missing or empty URLs fall back to
    /// `DEFAULT_AVATAR_URL`; anything else is used as given.
    pub fn avatar_src(&self) -> &str {
        match self.image_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_AVATAR_URL,
        }
    }
}

#[component]
pub fn ProfileCard(props: ProfileCardProps) -> Element {
    let src = props.avatar_src();

    log::debug!("Rendering profile card for {} (avatar: {})", props.name, src);

    rsx! {
        div {
            class: "flex items-center gap-4 p-4 rounded-lg bg-gray-100",

            // Avatar
            img {
                src: "{src}",
                alt: "{props.name}'s profile",
                width: "{AVATAR_SIZE}",
                height: "{AVATAR_SIZE}",
                class: "rounded-full"
            }

            // Name and role
            div {
                h2 {
                    class: "text-xl font-semibold",
                    "{props.name}"
                }
                p {
                    class: "text-gray-600",
                    "{props.role}"
                }
            }
        }
    }
}
