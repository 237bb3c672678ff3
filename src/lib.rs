//! Bloglist Core - aggregation and authorization for a blog publishing service.
//!
//! This crate implements the two load-bearing pieces of the bloglist backend:
//! the statistics engine over collections of blog posts, and the
//! authorization gate that decides whether a bearer credential may perform
//! a mutation. HTTP routing and persistence live in the consuming service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
