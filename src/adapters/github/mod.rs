pub mod rest;

pub use rest::GitHubClient;
