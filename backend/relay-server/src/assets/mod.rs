pub mod asset_error;
pub mod resolve;
pub mod serve;
