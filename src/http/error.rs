use crate::{dispatch::error::CommandError, http::parse_body};

impl From<ureq::Error> for CommandError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                CommandError::Remote {
                    status,
                    body: parse_body(&body),
                }
            }

            ureq::Error::Transport(transport) => CommandError::Transport(transport.to_string()),
        }
    }
}
