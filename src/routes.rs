use crate::auth::AuthGate;
use crate::catalogue::ProjectStore;

pub const LISTING_PATH: &str = "/projects";
pub const LOGIN_PATH: &str = "/admin-login";

/// Screen a path resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Listing,
    Detail(String),
    About,
    Contact,
    Login,
    Admin,
    Redirect(&'static str),
    NotFound,
}

/// Map a site path to a view, applying the admin guard and slug lookup.
pub fn resolve(path: &str, store: &ProjectStore, auth: &AuthGate) -> View {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');

    match trimmed {
        "" => View::Home,
        LISTING_PATH => View::Listing,
        "/about" => View::About,
        "/contact" => View::Contact,
        LOGIN_PATH => View::Login,
        "/admin" if auth.is_authenticated() => View::Admin,
        "/admin" => View::Redirect(LOGIN_PATH),
        _ => match trimmed.strip_prefix("/projects/") {
            Some(slug) if !slug.contains('/') => {
                if store.find_by_slug(slug).is_some() {
                    View::Detail(slug.to_string())
                } else {
                    View::Redirect(LISTING_PATH)
                }
            }
            _ => View::NotFound,
        },
    }
}
