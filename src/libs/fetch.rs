//! Calendar fetching over HTTP(S).
//!
//! One GET per calendar source. The response body is consumed chunk by
//! chunk and pushed straight through the line assembler into the event
//! parser, so no full calendar is ever held in memory and no line-boundary
//! guarantee is expected from the transport. Connection setup, TLS and
//! redirects belong to the HTTP client; there is no retry logic here.

use crate::ics::{EventParser, EventStore, LineAssembler};
use crate::libs::calendar::WorkdayCalendar;
use crate::libs::config::GeneralConfig;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::{Context, Result};
use reqwest::{Client, Url};

pub struct CalendarFetcher {
    client: Client,
    auth: Option<(String, String)>,
}

impl CalendarFetcher {
    pub fn new(general: &GeneralConfig) -> Self {
        let auth = match (&general.user, &general.password) {
            (Some(user), Some(password)) => Some((user.clone(), password.clone())),
            _ => None,
        };
        Self {
            client: Client::new(),
            auth,
        }
    }

    /// Fetches one calendar source and feeds it through the parser.
    ///
    /// `user` identifies the owning user; `None` marks the public-holiday
    /// source, whose events update the workday calendar instead of the
    /// store. Credentials embedded in the URL take precedence over the
    /// configured general ones. Any transport failure or non-success
    /// status is a hard error; the caller aborts the run.
    pub async fn fetch(
        &self,
        user: Option<&str>,
        url: &str,
        store: &mut EventStore,
        calendar: &mut WorkdayCalendar,
    ) -> Result<()> {
        let parsed = Url::parse(url).with_context(|| format!("invalid calendar url '{}'", url))?;

        let mut request = self.client.get(parsed.clone());
        if parsed.username().is_empty() {
            if let Some((auth_user, auth_password)) = &self.auth {
                request = request.basic_auth(auth_user, Some(auth_password));
            }
        }

        let mut response = request.send().await.with_context(|| Message::FetchFailed(url.to_owned()).to_string())?;
        if !response.status().is_success() {
            msg_bail_anyhow!(Message::FetchHttpStatus(url.to_owned(), response.status().to_string()));
        }

        let mut assembler = LineAssembler::new();
        let mut parser = EventParser::new(user);
        while let Some(chunk) = response.chunk().await.with_context(|| Message::FetchFailed(url.to_owned()).to_string())? {
            for line in assembler.feed(&chunk) {
                msg_debug!(format!("ICS: {}", line));
                parser.parse_line(&line, store, calendar);
            }
        }
        Ok(())
    }
}
