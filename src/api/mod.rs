pub mod client;
pub mod campaigns;

pub use client::*;
pub use campaigns::{CampaignSource, CampaignSourceHandle};
