//! Path Finder - Decision Journal Analytics
//!
//! This crate turns a journal of framed, sealed and retrospected decisions
//! into the aggregates behind the Path Finder dashboard: summary KPIs, tag
//! clusters, conviction quadrants, lifecycle flow, a similarity network and
//! monthly trends.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
