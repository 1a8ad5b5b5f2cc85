use contracts::system::session::Session;
use web_sys::window;

const SESSION_KEY: &str = "hotel_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn encode_session(session: &Session) -> Option<String> {
    serde_json::to_string(session)
        .map_err(|e| log::warn!("failed to encode session: {}", e))
        .ok()
}

/// Malformed or outdated entries decode to `None`.
pub fn decode_session(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

/// Entry to keep for `session`; `None` when it matches the configured fallback.
pub fn stored_entry(session: &Session, fallback: &Session) -> Option<String> {
    if session == fallback {
        None
    } else {
        encode_session(session)
    }
}

/// Writes the session to localStorage, or removes the entry when it is the fallback.
pub fn persist_session(session: &Session, fallback: &Session) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    let _ = match stored_entry(session, fallback) {
        Some(raw) => storage.set_item(SESSION_KEY, &raw),
        None => storage.remove_item(SESSION_KEY),
    };
}

/// Get session from localStorage
pub fn load_session() -> Option<Session> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    decode_session(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::session::UserRole;

    #[test]
    fn test_stored_role_uses_wire_code() {
        let session = Session::new("Marie Laurent", UserRole::Receptionist, "hotel-2");
        let raw = encode_session(&session).unwrap();
        assert!(raw.contains("\"receptionist\""));
        assert_eq!(decode_session(&raw), Some(session));
    }

    #[test]
    fn test_garbage_is_ignored() {
        assert_eq!(decode_session("not json"), None);
        assert_eq!(decode_session(r#"{"user_name":"x","role":"admin","hotel_id":"h"}"#), None);
    }

    #[test]
    fn test_fallback_session_is_not_stored() {
        let fallback = Session::new("Jean Dupont", UserRole::Owner, "hotel-1");
        assert_eq!(stored_entry(&fallback.clone(), &fallback), None);

        let switched = Session::new("Jean Dupont", UserRole::Owner, "hotel-2");
        let raw = stored_entry(&switched, &fallback).unwrap();
        assert_eq!(decode_session(&raw), Some(switched));
    }
}
