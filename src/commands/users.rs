use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_warning,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    if config.users.is_empty() {
        msg_warning!(Message::NoUsersConfigured);
        return Ok(());
    }
    View::users(&config.users)
}
