//! Repository traits over the REST surface, one backend resource per file.

mod auth;
mod dashboard;
mod equipment;
mod request;
mod stage;
mod team;
