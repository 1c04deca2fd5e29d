use dioxus::prelude::*;

pub mod home;

use home::Home;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        main {
            class: "min-h-screen bg-background text-foreground",
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_routes_home() {
        let route: Route = "/".parse().unwrap();
        assert_eq!(route, Route::Home {});
        assert_eq!(Route::Home {}.to_string(), "/");
    }
}
