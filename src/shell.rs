use crate::gui::message_dialog::{Icon, MessageDialog};

pub fn msg_fail<E: std::fmt::Display>(e: &E, prefix: &str, msg: &mut MessageDialog) {
    msg.open(Icon::Error, prefix, e.to_string());
}

pub fn msg_if_fail<T, E: Into<anyhow::Error>>(
    result: Result<T, E>,
    prefix: &str,
    msg: &mut MessageDialog,
) -> Option<T> {
    match result {
        Ok(t) => Some(t),
        Err(e) => {
            msg_fail(&e.into(), prefix, msg);
            None
        }
    }
}
