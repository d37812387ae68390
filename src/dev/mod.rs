/// Development utilities module
///
/// This module contains utilities for development and debugging,
/// such as a fixture-backed stats client.

pub mod mock_client;

pub use mock_client::MockClient;
