use contracts::system::auth::SessionUser;
use web_sys::window;

/// Key the login flow saves the signed-in user under
pub const SESSION_USER_KEY: &str = "gestpro_usuario";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Signed-in user saved by the login flow, if any
pub fn load_session_user() -> Option<SessionUser> {
    let raw = get_local_storage()?.get_item(SESSION_USER_KEY).ok()??;
    parse_session_user(&raw)
}

/// Decode a stored user. Unreadable entries count as signed out.
pub fn parse_session_user(raw: &str) -> Option<SessionUser> {
    match serde_json::from_str::<SessionUser>(raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("Ignoring stored session user: {}", err);
            None
        }
    }
}
