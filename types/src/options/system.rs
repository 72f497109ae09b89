use crate::filters::Args;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsOptions {
    pub since: String,
    pub until: String,
    pub filters: Args,
}

/// New terminal geometry for a container tty or an exec session tty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeOptions {
    pub id: String,
    pub height: u32,
    pub width: u32,
}
