//! Anchorwork - Attendance Reward Ledger and Hybrid-Work Policy Engine
//!
//! This crate turns office attendance into spendable remote-day credits,
//! checks weekly schedules against return-to-office policy, and computes
//! team anchor days by strict-majority consensus.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
