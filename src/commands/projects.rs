use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_warning,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    if config.projects.is_empty() {
        msg_warning!(Message::NoProjectsConfigured);
        return Ok(());
    }
    View::projects(&config.projects)
}
