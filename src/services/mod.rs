mod download_client;
pub(crate) use download_client::*;
