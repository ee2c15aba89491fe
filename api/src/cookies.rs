//! Session cookie construction from the token service's cookie specs.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use bz_core::domain::entities::token::CookieSpec;

/// Build a session cookie from its spec and token value
pub fn build_cookie(spec: &CookieSpec, value: String) -> Cookie<'static> {
    let mut builder = Cookie::build(spec.name, value)
        .path("/")
        .max_age(Duration::seconds(spec.max_age_seconds));

    if spec.http_only {
        builder = builder.http_only(true);
    }
    if spec.secure {
        builder = builder.secure(true);
    }
    if spec.same_site_none {
        builder = builder.same_site(SameSite::None);
    }

    builder.finish()
}
