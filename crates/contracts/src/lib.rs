//! Wire types exchanged with the collection service.
//!
//! The service exposes read-only collection endpoints (`GET /models`,
//! `GET /experiments`) returning JSON arrays of the aggregates defined here.

pub mod domain;
