//! The connect page template and its placeholder substitution.

/// The connect page markup. Placeholders are substituted at render time.
const CONNECT_PAGE: &str = include_str!("../assets/connect.html");

/// The browser-side bridge script, served verbatim.
pub const KARING_SCRIPT: &str = include_str!("../assets/karing.js");

/// Render the connect page for a logged-in user.
///
/// `{uname}` is the user's display name, `{link}` the full subscription
/// URL, `{lname}` the subscription label shown inside the app, and
/// `{script}` where the bridge script is loaded from.
pub fn render_connect_page(uname: &str, link: &str, lname: &str, script: &str) -> String {
    CONNECT_PAGE
        .replace("{uname}", uname)
        .replace("{link}", link)
        .replace("{lname}", lname)
        .replace("{script}", script)
}
