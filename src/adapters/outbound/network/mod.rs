/// Network adapters for external API calls
mod tracker_client;

pub use tracker_client::TrackerClient;
