//! Haven Sentinel - Crisis Detection and Safety Escalation Engine
//!
//! This crate inspects user-submitted chat text in real time, tracks
//! per-session behavioral risk over rolling windows, and drives a tiered
//! intervention policy. The chat UI, moderation dashboards, and persistence
//! layers are external collaborators: they feed `(user, session, text,
//! timestamp)` events in and consume `InterventionDirective` verdicts and
//! `CrisisEvent` streams out.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
